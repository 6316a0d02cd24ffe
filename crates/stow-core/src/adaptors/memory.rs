//! in-memory adaptor
//!
//! ephemeral namespaces, mostly useful for tests and scratch space; the
//! backend needs no connection, so the adaptor is connectionless

use std::collections::HashMap;

use crate::adaptor::{validate_create, Adaptor, FileSystem};
use crate::credential::{Credential, CredentialType};
use crate::description::AdaptorDescription;
use crate::error::{Result, StowError};
use crate::property::{PropertyDescription, PropertyKind};

pub struct MemoryAdaptor {
    description: AdaptorDescription,
}

impl MemoryAdaptor {
    pub fn new() -> Self {
        let description = AdaptorDescription {
            name: "memory".to_string(),
            description: "Ephemeral in-memory namespaces".to_string(),
            is_connectionless: true,
            supports_rename: true,
            can_append: true,
            supported_locations: vec!["name".to_string()],
            supported_credential_types: vec![CredentialType::Default, CredentialType::Password],
            supported_properties: vec![PropertyDescription::new(
                "memory.capacity",
                PropertyKind::Natural,
                None,
                "Maximum number of entries held in the namespace",
            )],
            ..Default::default()
        };
        Self { description }
    }
}

impl Default for MemoryAdaptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Adaptor for MemoryAdaptor {
    fn description(&self) -> &AdaptorDescription {
        &self.description
    }

    fn create_filesystem(
        &self,
        location: &str,
        credential: &Credential,
        properties: &HashMap<String, String>,
    ) -> Result<Box<dyn FileSystem>> {
        validate_create(&self.description, credential, properties)?;

        if location.is_empty() {
            return Err(StowError::InvalidLocation(
                "memory adaptor needs a namespace name".to_string(),
            ));
        }

        Ok(Box::new(MemoryFileSystem {
            namespace: location.to_string(),
            open: true,
        }))
    }
}

struct MemoryFileSystem {
    namespace: String,
    open: bool,
}

impl FileSystem for MemoryFileSystem {
    fn adaptor_name(&self) -> &str {
        "memory"
    }

    fn location(&self) -> &str {
        &self.namespace
    }

    fn entry_path(&self) -> String {
        "/".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) -> Result<()> {
        if !self.open {
            return Err(StowError::NotConnected(
                "filesystem already closed".to_string(),
            ));
        }
        self.open = false;
        Ok(())
    }
}
