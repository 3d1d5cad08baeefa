//! Declarations schema loading.
//!
//! The schema is an ordered list of functions, each with a name and an
//! ordered list of arguments:
//!
//! ```yaml
//! - name: CreateWindow
//!   arguments:
//!     - name: title
//!     - name: width
//! - name: Flush
//!   arguments: []
//! ```
//!
//! Entries are kept in document order since that order decides the order of
//! generated lines. Fields other than `name` and `arguments` are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tokio::fs;

use crate::{Error, Result};

/// One positional argument of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
}

/// One API entry point to generate bindings for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub arguments: Vec<ArgumentDescriptor>,
}

impl FunctionDescriptor {
    pub fn new<I, S>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            arguments: arguments
                .into_iter()
                .map(|name| ArgumentDescriptor { name: name.into() })
                .collect(),
        }
    }
}

/// Parsed declarations schema, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    functions: Vec<FunctionDescriptor>,
}

impl Schema {
    pub fn new(functions: Vec<FunctionDescriptor>) -> Self {
        Self { functions }
    }

    /// Load a schema from disk. Files ending in `.json` are parsed as JSON,
    /// everything else as YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            Error::schema(format!(
                "Failed to read declarations {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let schema = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };

        schema.map_err(|e| match e {
            Error::Schema(msg) => Error::schema(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let document: JsonValue = serde_yaml::from_str(content)
            .map_err(|e| Error::schema(format!("invalid YAML: {}", e)))?;
        Self::from_value(&document)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: JsonValue = serde_json::from_str(content)
            .map_err(|e| Error::schema(format!("invalid JSON: {}", e)))?;
        Self::from_value(&document)
    }

    /// Build a schema from an already parsed document tree.
    pub fn from_value(document: &JsonValue) -> Result<Self> {
        let entries = match document {
            // An empty YAML document has no entries.
            JsonValue::Null => return Ok(Self::default()),
            JsonValue::Array(entries) => entries,
            other => {
                return Err(Error::schema(format!(
                    "expected a sequence of functions, found {}",
                    value_kind(other)
                )))
            }
        };

        let functions = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| parse_function(idx, entry))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Parsed {} function descriptors", functions.len());
        Ok(Self { functions })
    }

    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FunctionDescriptor;
    type IntoIter = std::slice::Iter<'a, FunctionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}

fn parse_function(idx: usize, entry: &JsonValue) -> Result<FunctionDescriptor> {
    let location = format!("entry {}", idx);
    if !entry.is_object() {
        return Err(Error::schema(format!(
            "{}: expected a mapping, found {}",
            location,
            value_kind(entry)
        )));
    }

    let name = required_scalar(entry, "name", &location)?;
    let arguments = match entry.get("arguments") {
        None => {
            return Err(Error::schema(format!(
                "{} ({}): missing field \"arguments\"",
                location, name
            )))
        }
        Some(JsonValue::Array(arguments)) => arguments,
        Some(other) => {
            return Err(Error::schema(format!(
                "{} ({}): \"arguments\" must be a sequence, found {}",
                location,
                name,
                value_kind(other)
            )))
        }
    };

    let arguments = arguments
        .iter()
        .enumerate()
        .map(|(arg_idx, argument)| {
            let location = format!("{} ({}), argument {}", location, name, arg_idx);
            if !argument.is_object() {
                return Err(Error::schema(format!(
                    "{}: expected a mapping, found {}",
                    location,
                    value_kind(argument)
                )));
            }
            Ok(ArgumentDescriptor {
                name: required_scalar(argument, "name", &location)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FunctionDescriptor { name, arguments })
}

/// Read a scalar field as text. Numbers and booleans are accepted in their
/// plain spelling, so `name: 123` names a function `123`.
fn required_scalar(node: &JsonValue, field: &str, location: &str) -> Result<String> {
    match node.get(field) {
        Some(JsonValue::String(value)) => Ok(value.clone()),
        Some(JsonValue::Number(value)) => Ok(value.to_string()),
        Some(JsonValue::Bool(value)) => Ok(value.to_string()),
        Some(other) => Err(Error::schema(format!(
            "{}: \"{}\" must be a scalar, found {}",
            location,
            field,
            value_kind(other)
        ))),
        None => Err(Error::schema(format!(
            "{}: missing field \"{}\"",
            location, field
        ))),
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
