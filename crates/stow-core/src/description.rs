//! adaptor capability descriptions

use serde::{Deserialize, Serialize};

use crate::credential::CredentialType;
use crate::property::PropertyDescription;

/// static metadata a storage adaptor exposes describing what it supports
///
/// A plain immutable value record: built once when the adaptor is
/// registered and never mutated afterwards. The nine capability flags are
/// orthogonal, there is no ordering or dependency between them. The three
/// collections are ordered; their order is significant to clients and is
/// preserved all the way to the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptorDescription {
    /// adaptor name, unique within a registry
    pub name: String,
    pub description: String,
    pub supports_third_party_copy: bool,
    pub can_read_symbolic_links: bool,
    pub can_create_symbolic_links: bool,
    pub is_connectionless: bool,
    pub supports_reading_posix_permissions: bool,
    pub supports_setting_posix_permissions: bool,
    pub supports_rename: bool,
    pub can_append: bool,
    pub needs_size_beforehand: bool,
    /// accepted location formats, in documentation order
    pub supported_locations: Vec<String>,
    pub supported_credential_types: Vec<CredentialType>,
    pub supported_properties: Vec<PropertyDescription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_capabilities() {
        let desc = AdaptorDescription::default();
        assert!(!desc.supports_third_party_copy);
        assert!(!desc.can_read_symbolic_links);
        assert!(!desc.can_create_symbolic_links);
        assert!(!desc.is_connectionless);
        assert!(!desc.supports_reading_posix_permissions);
        assert!(!desc.supports_setting_posix_permissions);
        assert!(!desc.supports_rename);
        assert!(!desc.can_append);
        assert!(!desc.needs_size_beforehand);
        assert!(desc.supported_locations.is_empty());
        assert!(desc.supported_credential_types.is_empty());
        assert!(desc.supported_properties.is_empty());
    }
}
