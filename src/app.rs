use crate::{cli::Command, config::AppConfig, manager::AppDataManager, sources};
use mvvmd_core::{DataManager, DataSourceCatalog, InstanceStore, Params, Result};
use serde_json::{json, Value};
use tracing::warn;

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: Value,
    pub success: bool,
}

/// Configured data source names, or every catalog entry without a config.
pub fn data_source_names(catalog: &DataSourceCatalog, config: Option<AppConfig>) -> Vec<String> {
    match config {
        Some(config) => config.data_sources,
        None => catalog.names().into_iter().map(String::from).collect(),
    }
}

pub fn build_manager(config: Option<AppConfig>, store: &InstanceStore) -> Result<AppDataManager> {
    let catalog = sources::catalog();
    let names = data_source_names(&catalog, config);
    let descriptors = catalog.resolve(&names)?;
    AppDataManager::init(descriptors, store)
}

pub fn execute(manager: &AppDataManager, command: &Command) -> Result<Outcome> {
    match command {
        Command::Sources => Ok(Outcome {
            output: serde_json::to_value(manager.registry().snapshot())?,
            success: true,
        }),
        Command::Dao { id, params } => {
            let params: Params = params.iter().cloned().collect();
            let dao = manager.create_data_access_object_with_params(id, &params);
            if dao.is_none() {
                warn!(id = %id, "No data access object created");
            }
            Ok(Outcome {
                output: json!({
                    "id": id,
                    "service_id": dao.as_deref().map(|dao| dao.service_id()),
                    "created": dao.is_some(),
                }),
                success: dao.is_some(),
            })
        }
    }
}
