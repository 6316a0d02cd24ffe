//! local disk adaptor

use std::collections::HashMap;
use std::path::PathBuf;

use crate::adaptor::{validate_create, Adaptor, FileSystem};
use crate::credential::{Credential, CredentialType};
use crate::description::AdaptorDescription;
use crate::error::{Result, StowError};
use crate::property::{PropertyDescription, PropertyKind};

/// serves a directory tree on the local disk
pub struct LocalAdaptor {
    description: AdaptorDescription,
}

impl LocalAdaptor {
    pub fn new() -> Self {
        let description = AdaptorDescription {
            name: "local".to_string(),
            description: "Access to a directory tree on the local disk".to_string(),
            can_read_symbolic_links: true,
            supports_reading_posix_permissions: true,
            supports_setting_posix_permissions: true,
            supports_rename: true,
            can_append: true,
            supported_locations: vec!["".to_string(), "/absolute/path".to_string()],
            supported_credential_types: vec![CredentialType::Default],
            supported_properties: vec![PropertyDescription::new(
                "local.bufsize",
                PropertyKind::Size,
                Some("64K"),
                "Buffer size for streaming operations",
            )],
            ..Default::default()
        };
        Self { description }
    }
}

impl Default for LocalAdaptor {
    fn default() -> Self {
        Self::new()
    }
}

impl Adaptor for LocalAdaptor {
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

        // empty location means the current working directory
        let root = if location.is_empty() {
            std::env::current_dir()?
        } else {
            PathBuf::from(location)
        };
        if !root.is_dir() {
            return Err(StowError::InvalidLocation(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        Ok(Box::new(LocalFileSystem {
            root,
            location: location.to_string(),
            open: true,
        }))
    }
}

struct LocalFileSystem {
    root: PathBuf,
    location: String,
    open: bool,
}

impl FileSystem for LocalFileSystem {
    fn adaptor_name(&self) -> &str {
        "local"
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn entry_path(&self) -> String {
        self.root.display().to_string()
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
