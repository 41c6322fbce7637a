use crate::vars::EnvVars;
use mvvmd_core::{
    DataAccessObject, DataSource, DataSourceState, Params, Result, SingleInstance,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

pub const DATA_SOURCE_ID: &str = "env";
pub const VARS_SERVICE: &str = "vars";

/// Read-only snapshot of the process environment taken at construction.
/// Variables whose name or value is not valid UTF-8 are left out.
pub struct EnvDataSource {
    vars: Arc<BTreeMap<String, String>>,
}

impl EnvDataSource {
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Arc::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SingleInstance for EnvDataSource {
    fn create() -> Result<Self> {
        let source = Self::with_vars(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }));
        info!(variables = source.vars.len(), "Environment snapshot taken");
        Ok(source)
    }
}

impl DataSource for EnvDataSource {
    fn data_source_id(&self) -> &str {
        DATA_SOURCE_ID
    }

    fn state(&self) -> DataSourceState {
        DataSourceState::Ready
    }

    fn params(&self) -> Params {
        Params::from([("variables".to_string(), self.vars.len().to_string())])
    }

    fn create_data_access_object(
        &self,
        service_id: &str,
        params: &Params,
    ) -> Option<Box<dyn DataAccessObject>> {
        match service_id {
            VARS_SERVICE => Some(Box::new(EnvVars::new(
                self.vars.clone(),
                params.get("prefix").cloned(),
            ))),
            _ => {
                debug!(service = service_id, "Unknown env service");
                None
            }
        }
    }
}
