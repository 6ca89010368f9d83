//! Process-wide cache of named script engines
//!
//! Engines are created lazily on first lookup, retained for the lifetime of
//! the process, and never explicitly torn down. Looking up the same name from
//! two threads is safe; at most one of the racing instances is kept.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use rhai::Engine;
use std::sync::Arc;

/// Name under which the default engine instance is cached
pub const DEFAULT_ENGINE_NAME: &str = "rhai";

/// Global engine cache keyed by name
static ENGINES: Lazy<DashMap<String, Arc<Engine>>> = Lazy::new(DashMap::new);

/// Look up the engine instance cached under `name`, creating it on first use.
///
/// Every name maps to a stock Rhai engine; distinct names yield distinct
/// cached instances, which lets callers keep side-effect-prone closures away
/// from the shared default.
pub fn get(name: &str) -> Arc<Engine> {
    // Fast path: already cached
    if let Some(engine) = ENGINES.get(name) {
        return Arc::clone(&engine);
    }

    let engine = Arc::new(Engine::new());

    // Insert and return, handling potential race conditions
    match ENGINES.entry(name.to_string()) {
        dashmap::mapref::entry::Entry::Occupied(entry) => Arc::clone(entry.get()),
        dashmap::mapref::entry::Entry::Vacant(entry) => {
            log::debug!("created script engine '{name}'");
            entry.insert(Arc::clone(&engine));
            engine
        }
    }
}

/// The shared default engine, cached under [`DEFAULT_ENGINE_NAME`]
pub fn default_engine() -> Arc<Engine> {
    get(DEFAULT_ENGINE_NAME)
}
