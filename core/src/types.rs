use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String parameters passed to data sources and data access objects.
pub type Params = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceState {
    Initialized,
    Ready,
    Unavailable,
}

/// Point-in-time description of a registered data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceInfo {
    pub id: String,
    pub type_name: String,
    pub state: DataSourceState,
    pub params: Params,
}
