use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use crate::function::analyticfunction::AnalyticFunction;
use crate::function::registryerror::RegistryError;
use crate::function::wellknownfunctions::WELL_KNOWN_FUNCTIONS;

/// Name → function lookup over an immutable table.
pub struct FunctionRegistry {
    map: HashMap<&'static str, AnalyticFunction>,
    names: Vec<&'static str>,
}

impl FunctionRegistry {
    pub fn new(functions: &[AnalyticFunction]) -> FunctionRegistry {
        let mut map = HashMap::with_capacity(functions.len());
        let mut names = Vec::with_capacity(functions.len());
        for f in functions {
            // 名稱重複時保留第一個
            if let Entry::Vacant(slot) = map.entry(f.name()) {
                slot.insert(*f);
                names.push(f.name());
            }
        }
        FunctionRegistry { map, names }
    }

    pub fn get(&self, name: &str) -> Result<AnalyticFunction, RegistryError> {
        self.map
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::NameNotFound(name.to_owned()))
    }

    /// Names in registration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

static WELL_KNOWN_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// The registry of built-in functions.
pub fn well_known_registry() -> &'static FunctionRegistry {
    WELL_KNOWN_REGISTRY.get_or_init(|| FunctionRegistry::new(&WELL_KNOWN_FUNCTIONS))
}
