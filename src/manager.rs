use mvvmd_core::{DataManager, DataSourceRegistry};

pub struct AppDataManager {
    registry: DataSourceRegistry,
}

impl DataManager for AppDataManager {
    fn from_registry(registry: DataSourceRegistry) -> Self {
        Self { registry }
    }

    fn registry(&self) -> &DataSourceRegistry {
        &self.registry
    }
}
