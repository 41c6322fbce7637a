use jsonschema::Validator;
use mvvmd_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

lazy_static::lazy_static! {
    static ref CONFIG_SCHEMA: Validator = {
        let schema = include_str!("../schema/config.json");
        let schema = serde_json::from_str(schema).expect("embedded config schema is valid JSON");
        Validator::new(&schema).expect("embedded config schema is a valid JSON Schema")
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog names of the data sources to register, in order.
    pub data_sources: Vec<String>,
}

impl AppConfig {
    pub fn from_json(value: Value) -> Result<Self> {
        if let Err(error) = CONFIG_SCHEMA.validate(&value) {
            return Err(Error::Config(format!(
                "Schema validation failed: {}",
                error
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| Error::Config(format!("Invalid mvvmd config: {}", e)))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&contents)?;
        Self::from_json(value)
    }
}
