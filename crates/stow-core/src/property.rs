//! property metadata and value checking

use serde::{Deserialize, Serialize};

/// closed set of property value kinds
///
/// adding a member here requires extending the wire table in stowd; the
/// exhaustive match there turns a missing entry into a compile error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Boolean,
    Integer,
    Long,
    Double,
    String,
    Size,
    Natural,
}

impl PropertyKind {
    /// every kind, in declaration order
    pub const ALL: [PropertyKind; 7] = [
        PropertyKind::Boolean,
        PropertyKind::Integer,
        PropertyKind::Long,
        PropertyKind::Double,
        PropertyKind::String,
        PropertyKind::Size,
        PropertyKind::Natural,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PropertyKind::Boolean => "boolean",
            PropertyKind::Integer => "integer",
            PropertyKind::Long => "long",
            PropertyKind::Double => "double",
            PropertyKind::String => "string",
            PropertyKind::Size => "size",
            PropertyKind::Natural => "natural",
        }
    }

    /// check a string-encoded value against this kind
    ///
    /// sizes accept an optional K/M/G suffix ("64K"), naturals are
    /// non-negative integers
    pub fn check(&self, value: &str) -> bool {
        match self {
            PropertyKind::Boolean => matches!(value, "true" | "false"),
            PropertyKind::Integer => value.parse::<i32>().is_ok(),
            PropertyKind::Long => value.parse::<i64>().is_ok(),
            PropertyKind::Double => value.parse::<f64>().is_ok(),
            PropertyKind::String => true,
            PropertyKind::Size => {
                let digits = match value.as_bytes().last() {
                    Some(b'K' | b'M' | b'G' | b'k' | b'm' | b'g') => &value[..value.len() - 1],
                    _ => value,
                };
                digits.parse::<u64>().is_ok()
            }
            PropertyKind::Natural => value.parse::<u64>().is_ok(),
        }
    }
}

/// a named, typed configuration option an adaptor accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub name: String,
    pub kind: PropertyKind,
    /// string-encoded default; never interpreted against the kind here
    pub default_value: Option<String>,
    pub description: String,
}

impl PropertyDescription {
    pub fn new(
        name: &str,
        kind: PropertyKind,
        default_value: Option<&str>,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default_value: default_value.map(|v| v.to_string()),
            description: description.to_string(),
        }
    }
}
