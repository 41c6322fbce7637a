use crate::{
    descriptor::DataSourceDescriptor,
    error::Result,
    instance::InstanceStore,
    registry::DataSourceRegistry,
    source::DataAccessObject,
    types::Params,
};
use std::any::Any;
use std::sync::Arc;

/// Application-specific owner of a [`DataSourceRegistry`].
///
/// Implementors only say how to wrap and expose the registry; construction,
/// injection and DAO creation come from the provided methods.
///
/// ```
/// use mvvmd_core::{DataManager, DataSourceRegistry};
///
/// struct AppDataManager {
///     registry: DataSourceRegistry,
/// }
///
/// impl DataManager for AppDataManager {
///     fn from_registry(registry: DataSourceRegistry) -> Self {
///         Self { registry }
///     }
///
///     fn registry(&self) -> &DataSourceRegistry {
///         &self.registry
///     }
/// }
/// ```
pub trait DataManager: Sized {
    fn from_registry(registry: DataSourceRegistry) -> Self;

    fn registry(&self) -> &DataSourceRegistry;

    /// Builds every described data source through `store`.
    ///
    /// Fails without leaving instances behind in `store` when the list is
    /// empty, a data source cannot be constructed, or two data sources
    /// report the same id.
    fn init(descriptors: Vec<DataSourceDescriptor>, store: &InstanceStore) -> Result<Self> {
        DataSourceRegistry::build(descriptors, store).map(Self::from_registry)
    }

    fn inject_data_source<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        self.registry().inject_data_source::<T>()
    }

    fn create_data_access_object(&self, id: &str) -> Option<Box<dyn DataAccessObject>> {
        self.registry().create_data_access_object(id)
    }

    fn create_data_access_object_with_params(
        &self,
        id: &str,
        params: &Params,
    ) -> Option<Box<dyn DataAccessObject>> {
        self.registry()
            .create_data_access_object_with_params(id, params)
    }
}
