//! # Catalog user
//!
//! [`User`] is a record from the catalog API's `/users` collection. The login
//! page matches credentials against this list and the profile page renders a
//! single record.
//!
//! `senha` comes back from the remote API in plain text. It is only ever read
//! for the credential match and is never serialized again.

use serde::{Deserialize, Serialize};

use super::de::{opt_string_or_number, string_or_number};

/// A user record from the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing, deserialize_with = "opt_string_or_number")]
    pub senha: Option<String>,
    /// Monetary balance as sent by the API.
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub saldo: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Balance line as shown on the profile page.
    pub fn saldo_label(&self) -> String {
        format!("Saldo: R$ {}", self.saldo.as_deref().unwrap_or("0"))
    }
}
