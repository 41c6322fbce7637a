use crate::{records::RecordStore, Records};
use mvvmd_core::{
    DataAccessObject, DataSource, DataSourceState, Params, Result, SingleInstance,
};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

pub const DATA_SOURCE_ID: &str = "memory";
pub const RECORDS_SERVICE: &str = "records";

/// Process-local record storage shared by every `records` DAO it hands out.
pub struct MemoryDataSource {
    records: Records,
}

impl MemoryDataSource {
    pub fn record_count(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SingleInstance for MemoryDataSource {
    fn create() -> Result<Self> {
        info!("Creating memory data source");
        Ok(Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        })
    }
}

impl DataSource for MemoryDataSource {
    fn data_source_id(&self) -> &str {
        DATA_SOURCE_ID
    }

    fn state(&self) -> DataSourceState {
        DataSourceState::Ready
    }

    fn params(&self) -> Params {
        Params::from([("backend".to_string(), "memory".to_string())])
    }

    fn create_data_access_object(
        &self,
        service_id: &str,
        params: &Params,
    ) -> Option<Box<dyn DataAccessObject>> {
        match service_id {
            RECORDS_SERVICE => Some(Box::new(RecordStore::new(
                self.records.clone(),
                params.get("namespace").cloned(),
            ))),
            _ => {
                debug!(service = service_id, "Unknown memory service");
                None
            }
        }
    }
}
