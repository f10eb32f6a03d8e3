use super::InputSource;
use crate::error::InputError;
use crate::future::{InputKind, Value};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The on-disk shape of an inputs file.
///
/// ```json
/// {
///   "accounts": ["0xf39f...", "0x7099..."],
///   "parameters": [{ "name": "baseUri", "value": "ipfs://tickets/" }]
/// }
/// ```
#[derive(Deserialize, Debug, Default)]
struct RawInputs {
    #[serde(default)]
    accounts: Vec<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
}

#[derive(Deserialize, Debug)]
struct RawParameter {
    name: String,
    value: serde_json::Value,
}

/// A named parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
}

/// An in-memory input source holding accounts and named parameters.
#[derive(Debug, Clone, Default)]
pub struct StaticInputs {
    accounts: Vec<String>,
    parameters: Vec<Parameter>,
}

impl StaticInputs {
    pub fn new(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.push(Parameter {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    /// Parses inputs from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let raw: RawInputs = serde_json::from_str(json)
            .map_err(|e| InputError::Load(format!("Invalid inputs JSON: {}", e)))?;

        let parameters = raw
            .parameters
            .into_iter()
            .map(|p| {
                Value::from_json(&p.value)
                    .map(|value| Parameter {
                        name: p.name.clone(),
                        value,
                    })
                    .ok_or_else(|| {
                        InputError::Load(format!(
                            "Parameter '{}' has an unsupported value: {}",
                            p.name, p.value
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            accounts: raw.accounts,
            parameters,
        })
    }

    /// Loads inputs from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            InputError::Load(format!("Could not read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl InputSource for StaticInputs {
    fn count(&self, kind: InputKind) -> usize {
        match kind {
            InputKind::Account => self.accounts.len(),
            InputKind::Parameter => self.parameters.len(),
        }
    }

    fn get_input(&self, kind: InputKind, index: usize) -> Result<Value, InputError> {
        let value = match kind {
            InputKind::Account => self.accounts.get(index).cloned().map(Value::Text),
            InputKind::Parameter => self.parameters.get(index).map(|p| p.value.clone()),
        };
        value.ok_or(InputError::OutOfRange {
            kind,
            index,
            available: self.count(kind),
        })
    }

    fn position(&self, kind: InputKind, name: &str) -> Option<usize> {
        match kind {
            InputKind::Account => None,
            InputKind::Parameter => self.parameters.iter().position(|p| p.name == name),
        }
    }
}
