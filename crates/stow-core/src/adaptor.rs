//! adaptor and filesystem traits

use std::collections::HashMap;

use crate::credential::Credential;
use crate::description::AdaptorDescription;
use crate::error::{Result, StowError};

/// a storage backend known to the registry
pub trait Adaptor: Send + Sync {
    /// capability description, built once at registration
    fn description(&self) -> &AdaptorDescription;

    /// open a filesystem on this backend
    fn create_filesystem(
        &self,
        location: &str,
        credential: &Credential,
        properties: &HashMap<String, String>,
    ) -> Result<Box<dyn FileSystem>>;

    fn name(&self) -> &str {
        &self.description().name
    }
}

/// an open filesystem instance
pub trait FileSystem: Send + Sync {
    fn adaptor_name(&self) -> &str;

    /// location the instance was created with
    fn location(&self) -> &str;

    /// path a relative path resolves against
    fn entry_path(&self) -> String;

    fn is_open(&self) -> bool;

    /// release the instance; closing twice is a NotConnected error
    fn close(&mut self) -> Result<()>;
}

/// check a creation request against an adaptor description
///
/// shared by all adaptors: the credential type must be supported, every
/// supplied property must be declared, and every value must pass the
/// declared kind's check
pub fn validate_create(
    desc: &AdaptorDescription,
    credential: &Credential,
    properties: &HashMap<String, String>,
) -> Result<()> {
    let credential_type = credential.type_of();
    if !desc.supported_credential_types.contains(&credential_type) {
        return Err(StowError::InvalidCredential(format!(
            "adaptor {} does not accept {}",
            desc.name,
            credential_type.name()
        )));
    }

    for (name, value) in properties {
        let prop = desc
            .supported_properties
            .iter()
            .find(|p| p.name == *name)
            .ok_or_else(|| {
                StowError::UnknownProperty(format!("{} (adaptor {})", name, desc.name))
            })?;
        if !prop.kind.check(value) {
            return Err(StowError::InvalidProperty(format!(
                "{}: {:?} is not a valid {}",
                name,
                value,
                prop.kind.name()
            )));
        }
    }

    Ok(())
}
