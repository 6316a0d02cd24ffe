//! credential values carried alongside filesystem requests
//!
//! nothing in this crate authenticates anything: credentials travel as
//! data and are handed to the backend untouched

use serde::{Deserialize, Serialize};

/// handle for a credential type
///
/// the symbolic name is recorded once, at adaptor registration, so the
/// wire mapping never inspects a live credential value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialType {
    Default,
    Password,
    Certificate,
}

impl CredentialType {
    /// symbolic type name as it appears on the wire, qualifiers stripped
    pub fn name(&self) -> &'static str {
        match self {
            CredentialType::Default => "DefaultCredential",
            CredentialType::Password => "PasswordCredential",
            CredentialType::Certificate => "CertificateCredential",
        }
    }
}

/// one credential, as supplied by a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Default {
        username: Option<String>,
    },
    Password {
        username: String,
        password: String,
    },
    Certificate {
        username: String,
        certfile: String,
        passphrase: String,
    },
}

impl Default for Credential {
    fn default() -> Self {
        Credential::Default { username: None }
    }
}

impl Credential {
    pub fn type_of(&self) -> CredentialType {
        match self {
            Credential::Default { .. } => CredentialType::Default,
            Credential::Password { .. } => CredentialType::Password,
            Credential::Certificate { .. } => CredentialType::Certificate,
        }
    }

    /// username for filesystem instance ids; "nousername" when the
    /// credential carries none
    pub fn username(&self) -> &str {
        match self {
            Credential::Default { username } => username.as_deref().unwrap_or("nousername"),
            Credential::Password { username, .. } => username,
            Credential::Certificate { username, .. } => username,
        }
    }
}
