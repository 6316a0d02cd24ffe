//! stow core - storage-backend adaptor framework
//!
//! An adaptor describes a storage backend (local disk, in-memory scratch
//! space, ...) through a static capability description and knows how to
//! open filesystem instances on that backend. The gRPC surface lives in
//! the `stowd` binary; this crate holds everything it serves:
//! - adaptor capability descriptions (plain immutable value records)
//! - the property and credential models referenced by descriptions
//! - the adaptor registry and the built-in adaptors

pub mod adaptor;
pub mod adaptors;
pub mod credential;
pub mod description;
pub mod error;
pub mod property;
pub mod registry;

pub use adaptor::{Adaptor, FileSystem};
pub use credential::{Credential, CredentialType};
pub use description::AdaptorDescription;
pub use error::{Result, StowError};
pub use property::{PropertyDescription, PropertyKind};
pub use registry::AdaptorRegistry;
