//! adaptor registry
//!
//! registration order is preserved: descriptions and names are reported
//! in the order adaptors were registered

use crate::adaptor::Adaptor;
use crate::adaptors::{LocalAdaptor, MemoryAdaptor};
use crate::description::AdaptorDescription;
use crate::error::{Result, StowError};

/// the set of adaptors a server exposes
///
/// built once at startup and only read afterwards
#[derive(Default)]
pub struct AdaptorRegistry {
    adaptors: Vec<Box<dyn Adaptor>>,
}

impl AdaptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// registry preloaded with the built-in adaptors
    pub fn with_builtin_adaptors() -> Self {
        let mut registry = Self::new();
        // built-in names are distinct, registration cannot collide
        registry.adaptors.push(Box::new(LocalAdaptor::new()));
        registry.adaptors.push(Box::new(MemoryAdaptor::new()));
        registry
    }

    pub fn register(&mut self, adaptor: Box<dyn Adaptor>) -> Result<()> {
        let name = adaptor.name();
        if self.adaptors.iter().any(|a| a.name() == name) {
            return Err(StowError::DuplicateAdaptor(name.to_string()));
        }
        self.adaptors.push(adaptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Adaptor> {
        self.adaptors
            .iter()
            .map(|a| a.as_ref())
            .find(|a| a.name() == name)
            .ok_or_else(|| StowError::UnknownAdaptor(name.to_string()))
    }

    /// all adaptor names, registration order
    pub fn names(&self) -> Vec<&str> {
        self.adaptors.iter().map(|a| a.name()).collect()
    }

    /// all capability descriptions, registration order
    pub fn descriptions(&self) -> Vec<&AdaptorDescription> {
        self.adaptors.iter().map(|a| a.description()).collect()
    }
}
