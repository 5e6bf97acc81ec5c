//! Per-client credential store

use std::collections::HashMap;

/// Key under which the API user token is stored
pub const USER_TOKEN: &str = "userToken";

/// Credential mapping owned by one client instance.
///
/// Updates merge: new keys are added, existing keys are overwritten,
/// untouched keys persist.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    values: HashMap<String, String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Create a credential store from key/value pairs
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut credentials = Self::default();
        credentials.set(values);
        credentials
    }

    /// Create a credential store holding a single user token
    pub fn from_user_token(token: impl Into<String>) -> Self {
        Self::new([(USER_TOKEN, token.into())])
    }

    /// Merge key/value pairs into the store
    pub fn set<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in values {
            self.values.insert(key.into(), value.into());
        }
    }

    /// Look up a single credential
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The whole credential mapping
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// The stored user token, if any
    pub fn user_token(&self) -> Option<&str> {
        self.get(USER_TOKEN)
    }
}
