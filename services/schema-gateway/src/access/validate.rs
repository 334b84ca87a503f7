//! Request validation for schema access.
//!
//! Rules run in a fixed order so the first failure is deterministic.
use super::GetSchemaCmd;
use crate::error::{Error, ErrorKind};
use crate::model::{Action, LATEST_VERSION};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    Missing,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: ValidationReason::Missing,
        }
    }

    fn invalid(field: &'static str) -> Self {
        Self {
            field,
            reason: ValidationReason::Invalid,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ValidationReason::Missing => write!(f, "missing field {:?}", self.field),
            ValidationReason::Invalid => write!(f, "invalid input for field {:?}", self.field),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::new(ErrorKind::Validation, err.to_string())
    }
}

/// Check `cmd` without side effects.
pub fn validate(cmd: &GetSchemaCmd) -> Result<(), ValidationError> {
    if cmd.version.is_empty() {
        return Err(ValidationError::missing("version"));
    }
    if cmd.version != LATEST_VERSION && !matches!(cmd.version.parse::<i64>(), Ok(v) if v >= 1) {
        return Err(ValidationError::invalid("version"));
    }

    if cmd.subject.is_empty() {
        return Err(ValidationError::missing("subject"));
    }
    if cmd.application.is_empty() {
        return Err(ValidationError::missing("application"));
    }
    if cmd.topic.is_empty() {
        return Err(ValidationError::missing("topic"));
    }

    if cmd.action.is_empty() {
        return Err(ValidationError::missing("action"));
    }
    if cmd.action.parse::<Action>().is_err() {
        return Err(ValidationError::invalid("action"));
    }

    Ok(())
}
