//! Client usage records.
//!
//! # Purpose
//! A `ClientUsage` is the recorded fact "application A performs action Act on
//! topic T using subject S at version V". Usages are immutable once stored.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Version literal resolved by the registry to the newest schema.
pub const LATEST_VERSION: &str = "latest";

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "read" => Ok(Action::Read),
            "write" => Ok(Action::Write),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct ClientUsage {
    pub id: String,
    pub topic: String,
    pub application: String,
    pub action: Action,
    pub subject: String,
    pub version: String,
}

impl ClientUsage {
    /// True when both usages point at the same registry schema.
    pub fn same_schema(&self, subject: &str, version: &str) -> bool {
        self.subject == subject && self.version == version
    }

    /// `subject/version` as shown in conflict messages.
    pub fn schema_ref(&self) -> String {
        format!("{}/{}", self.subject, self.version)
    }
}
