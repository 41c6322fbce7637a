mod records;
mod source;

pub use records::RecordStore;
pub use source::{MemoryDataSource, DATA_SOURCE_ID, RECORDS_SERVICE};

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type Records = Arc<RwLock<HashMap<String, Value>>>;
