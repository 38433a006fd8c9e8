//! JSON payload input for commands that take one.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read and parse a JSON payload from `path`, or from stdin when `None`.
pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&content)?)
}
