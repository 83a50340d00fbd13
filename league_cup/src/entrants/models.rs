use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable entrant identifier, supplied by the identity provider.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrantId(String);

impl EntrantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EntrantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntrantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A participant: identity, display name and the team they play as.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    pub name: String,
    pub team: String,
}

impl Entrant {
    pub fn new(id: impl Into<EntrantId>, name: &str, team: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            team: team.to_string(),
        }
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}
