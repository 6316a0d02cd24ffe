//! converters from adaptor descriptions to gRPC response fields
//!
//! both converters are pure: immutable input, freshly allocated output,
//! no I/O, safe to call from any number of serving tasks

use stow_core::{AdaptorDescription, PropertyDescription, PropertyKind};

use crate::stow::property_description::Type as ProtoPropertyType;
use crate::stow::{
    FileSystemAdaptorDescription, PropertyDescription as ProtoPropertyDescription,
};

/// map one capability description to its wire message
///
/// every field crosses over: the nine flags 1:1, name and description
/// verbatim, the three collections in source order (empty stays empty,
/// never absent)
pub fn map_adaptor_description(desc: &AdaptorDescription) -> FileSystemAdaptorDescription {
    FileSystemAdaptorDescription {
        name: desc.name.clone(),
        description: desc.description.clone(),
        supports_third_party_copy: desc.supports_third_party_copy,
        can_read_symboliclinks: desc.can_read_symbolic_links,
        can_create_symboliclinks: desc.can_create_symbolic_links,
        is_connectionless: desc.is_connectionless,
        supports_reading_posix_permissions: desc.supports_reading_posix_permissions,
        supports_setting_posix_permissions: desc.supports_setting_posix_permissions,
        supports_rename: desc.supports_rename,
        can_append: desc.can_append,
        needs_size_beforehand: desc.needs_size_beforehand,
        supported_locations: desc.supported_locations.clone(),
        supported_credentials: desc
            .supported_credential_types
            .iter()
            .map(|t| t.name().to_string())
            .collect(),
        supported_properties: desc
            .supported_properties
            .iter()
            .map(map_property_description)
            .collect(),
    }
}

/// map one property description to its wire message
///
/// an absent default becomes the empty string; the value is never
/// interpreted against the kind
pub fn map_property_description(prop: &PropertyDescription) -> ProtoPropertyDescription {
    ProtoPropertyDescription {
        name: prop.name.clone(),
        r#type: map_property_kind(prop.kind) as i32,
        default_value: prop.default_value.clone().unwrap_or_default(),
        description: prop.description.clone(),
    }
}

/// wire counterpart of a property kind
///
/// exhaustive on purpose: a kind added without a wire member must fail
/// here at compile time instead of falling back to some default member
pub fn map_property_kind(kind: PropertyKind) -> ProtoPropertyType {
    match kind {
        PropertyKind::Boolean => ProtoPropertyType::Boolean,
        PropertyKind::Integer => ProtoPropertyType::Integer,
        PropertyKind::Long => ProtoPropertyType::Long,
        PropertyKind::Double => ProtoPropertyType::Double,
        PropertyKind::String => ProtoPropertyType::String,
        PropertyKind::Size => ProtoPropertyType::Size,
        PropertyKind::Natural => ProtoPropertyType::Natural,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use stow_core::CredentialType;

    /// description with no value equal to the proto default
    fn mock_description() -> AdaptorDescription {
        AdaptorDescription {
            name: "mock".to_string(),
            description: "Some description".to_string(),
            supports_third_party_copy: true,
            can_read_symbolic_links: true,
            can_create_symbolic_links: true,
            is_connectionless: true,
            supports_reading_posix_permissions: true,
            supports_setting_posix_permissions: true,
            supports_rename: true,
            can_append: true,
            needs_size_beforehand: true,
            supported_locations: vec!["host".to_string()],
            supported_credential_types: vec![CredentialType::Default],
            supported_properties: vec![PropertyDescription::new(
                "propname",
                PropertyKind::Integer,
                Some("42"),
                "Mock prop desc",
            )],
        }
    }

    #[test]
    fn test_mocked_description_maps_field_for_field() {
        let wire = map_adaptor_description(&mock_description());

        assert!(wire.supports_third_party_copy);
        assert!(wire.can_read_symboliclinks);
        assert!(wire.can_create_symboliclinks);
        assert!(wire.is_connectionless);
        assert!(wire.supports_reading_posix_permissions);
        assert!(wire.supports_setting_posix_permissions);
        assert!(wire.supports_rename);
        assert!(wire.can_append);
        assert!(wire.needs_size_beforehand);
        assert_eq!(wire.name, "mock");
        assert_eq!(wire.description, "Some description");
        assert_eq!(wire.supported_locations, vec!["host"]);
        assert_eq!(wire.supported_credentials, vec!["DefaultCredential"]);

        assert_eq!(wire.supported_properties.len(), 1);
        let prop = &wire.supported_properties[0];
        assert_eq!(prop.name, "propname");
        assert_eq!(prop.r#type, ProtoPropertyType::Integer as i32);
        assert_eq!(prop.default_value, "42");
        assert_eq!(prop.description, "Mock prop desc");
    }

    #[test]
    fn test_all_flags_false() {
        let desc = AdaptorDescription {
            name: "bare".to_string(),
            ..Default::default()
        };
        let wire = map_adaptor_description(&desc);

        assert!(!wire.supports_third_party_copy);
        assert!(!wire.can_read_symboliclinks);
        assert!(!wire.can_create_symboliclinks);
        assert!(!wire.is_connectionless);
        assert!(!wire.supports_reading_posix_permissions);
        assert!(!wire.supports_setting_posix_permissions);
        assert!(!wire.supports_rename);
        assert!(!wire.can_append);
        assert!(!wire.needs_size_beforehand);
    }

    #[test]
    fn test_empty_collections_stay_empty() {
        let wire = map_adaptor_description(&AdaptorDescription::default());
        assert!(wire.supported_locations.is_empty());
        assert!(wire.supported_credentials.is_empty());
        assert!(wire.supported_properties.is_empty());
    }

    #[test]
    fn test_collection_order_preserved() {
        let desc = AdaptorDescription {
            name: "ordered".to_string(),
            supported_locations: vec![
                "host".to_string(),
                "host:port".to_string(),
                "host:port/path".to_string(),
            ],
            supported_credential_types: vec![
                CredentialType::Password,
                CredentialType::Default,
            ],
            supported_properties: vec![
                PropertyDescription::new("first", PropertyKind::String, None, ""),
                PropertyDescription::new("second", PropertyKind::Long, None, ""),
            ],
            ..Default::default()
        };
        let wire = map_adaptor_description(&desc);

        assert_eq!(
            wire.supported_locations,
            vec!["host", "host:port", "host:port/path"]
        );
        assert_eq!(
            wire.supported_credentials,
            vec!["PasswordCredential", "DefaultCredential"]
        );
        let names: Vec<&str> = wire
            .supported_properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_absent_default_maps_to_empty_string() {
        let prop = PropertyDescription::new("nameless", PropertyKind::String, None, "no default");
        let wire = map_property_description(&prop);
        assert_eq!(wire.default_value, "");
    }

    #[test]
    fn test_kind_table_is_injective() {
        let mapped: HashSet<i32> = PropertyKind::ALL
            .iter()
            .map(|k| map_property_kind(*k) as i32)
            .collect();
        assert_eq!(mapped.len(), PropertyKind::ALL.len());
    }

    #[test]
    fn test_kind_table_fixed_correspondence() {
        assert_eq!(
            map_property_kind(PropertyKind::Boolean),
            ProtoPropertyType::Boolean
        );
        assert_eq!(
            map_property_kind(PropertyKind::Integer),
            ProtoPropertyType::Integer
        );
        assert_eq!(map_property_kind(PropertyKind::Long), ProtoPropertyType::Long);
        assert_eq!(
            map_property_kind(PropertyKind::Double),
            ProtoPropertyType::Double
        );
        assert_eq!(
            map_property_kind(PropertyKind::String),
            ProtoPropertyType::String
        );
        assert_eq!(map_property_kind(PropertyKind::Size), ProtoPropertyType::Size);
        assert_eq!(
            map_property_kind(PropertyKind::Natural),
            ProtoPropertyType::Natural
        );
    }
}
