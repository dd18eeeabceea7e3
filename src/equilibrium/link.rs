//!
//! Link identifiers
//!
use serde::{Deserialize, Serialize};

/// Opaque name of one network arc, e.g. `"AB"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new<S: Into<String>>(name: S) -> LinkId {
        LinkId(name.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LinkId {
    fn from(name: &str) -> LinkId {
        LinkId::new(name)
    }
}

impl From<String> for LinkId {
    fn from(name: String) -> LinkId {
        LinkId(name)
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
