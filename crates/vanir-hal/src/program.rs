//! Program payload and input binding types.
//!
//! The compiled program is opaque to the submission core: backends receive
//! it as a named JSON payload plus a map of bound input arguments. The
//! meaning of the payload is a contract between the compiler that produced
//! it and the backend that runs it.

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// An opaque compiled program, identified by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramInfo {
    /// Entry-point name of the program.
    pub name: String,
    /// Serialized program payload. Never inspected by the driver.
    pub payload: serde_json::Value,
}

impl ProgramInfo {
    /// Create a program from a name and payload.
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// Input arguments bound for a backend invocation.
///
/// Produced by the argument-binding layer (CLI `--param key=value` flags)
/// and handed to the backend verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramInput(pub serde_json::Map<String, serde_json::Value>);

impl ProgramInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self(serde_json::Map::new())
    }

    /// Bind `key=value` pairs into an input map.
    ///
    /// Values are parsed as JSON when possible so that `shots=100` binds a
    /// number and `flag=true` a boolean; anything else binds as a string.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> HalResult<Self> {
        let mut map = serde_json::Map::new();
        for pair in pairs {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                HalError::InvalidProgram(format!(
                    "Invalid parameter '{pair}': expected key=value"
                ))
            })?;
            if key.is_empty() {
                return Err(HalError::InvalidProgram(format!(
                    "Invalid parameter '{pair}': empty key"
                )));
            }
            let value = serde_json::from_str(value)
                .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
            map.insert(key.to_string(), value);
        }
        Ok(Self(map))
    }

    /// Insert a single bound value.
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.0.insert(key.into(), value);
    }

    /// Check whether no arguments are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
