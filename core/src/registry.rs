use crate::{
    descriptor::{DataSourceDescriptor, SourceHandle},
    error::{Error, Result},
    identifier::DaoId,
    instance::InstanceStore,
    source::{DataAccessObject, DataSource},
    types::{DataSourceInfo, Params},
};
use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Immutable table of data source singletons keyed by their reported id.
///
/// A registry can only be obtained through
/// [`DataManager::init`](crate::manager::DataManager::init):
///
/// ```compile_fail
/// use mvvmd_core::{DataSourceRegistry, InstanceStore};
///
/// let registry = DataSourceRegistry::build(Vec::new(), &InstanceStore::new());
/// ```
pub struct DataSourceRegistry {
    sources: HashMap<String, SourceHandle>,
    types: HashMap<String, DataSourceDescriptor>,
}

impl DataSourceRegistry {
    pub(crate) fn build(
        descriptors: Vec<DataSourceDescriptor>,
        store: &InstanceStore,
    ) -> Result<Self> {
        if descriptors.is_empty() {
            let err = Error::NoDataSources;
            error!("{}", err);
            return Err(err);
        }

        let mut registry = Self {
            sources: HashMap::with_capacity(descriptors.len()),
            types: HashMap::with_capacity(descriptors.len()),
        };

        let held_before = store.type_ids();
        for descriptor in descriptors {
            if let Err(err) = registry.register(descriptor, store, &held_before) {
                error!("{}. DataManager not initialized.", err);
                registry.release(store, &held_before);
                return Err(err);
            }
        }

        info!(data_sources = registry.len(), "Data sources registered");
        Ok(registry)
    }

    fn register(
        &mut self,
        descriptor: DataSourceDescriptor,
        store: &InstanceStore,
        held_before: &HashSet<TypeId>,
    ) -> Result<()> {
        if self.types.values().any(|registered| *registered == descriptor) {
            return Err(Error::DuplicateDescriptor(
                descriptor.type_name().to_string(),
            ));
        }

        let handle = descriptor
            .instantiate(store)
            .map_err(|e| Error::Instantiation {
                type_name: descriptor.type_name().to_string(),
                source: Box::new(e),
            })?;

        let id = handle.source().data_source_id().to_string();
        if self.sources.contains_key(&id) {
            handle.release(store, held_before);
            return Err(Error::DuplicateDataSource(id));
        }

        debug!(id = %id, type_name = descriptor.type_name(), "Data source registered");
        self.sources.insert(id.clone(), handle);
        self.types.insert(id, descriptor);
        Ok(())
    }

    fn release(self, store: &InstanceStore, held_before: &HashSet<TypeId>) {
        for handle in self.sources.values() {
            handle.release(store, held_before);
        }
    }

    /// Resolves the singleton registered under the descriptor for `T`.
    pub fn inject_data_source<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        let id = self
            .types
            .iter()
            .find(|(_, descriptor)| descriptor.is::<T>())
            .map(|(id, _)| id)
            .ok_or_else(|| Error::DataSourceNotFound(type_name::<T>().to_string()))?;

        self.sources
            .get(id)
            .and_then(|handle| handle.downcast::<T>())
            .ok_or_else(|| Error::DataSourceTypeConversionFailed(id.clone()))
    }

    pub fn create_data_access_object(&self, id: &str) -> Option<Box<dyn DataAccessObject>> {
        self.create_data_access_object_with_params(id, &Params::new())
    }

    /// Delegates `"<data source>.<service>"` to the named data source.
    ///
    /// Every failure yields `None`; only a malformed id is logged.
    pub fn create_data_access_object_with_params(
        &self,
        id: &str,
        params: &Params,
    ) -> Option<Box<dyn DataAccessObject>> {
        let Some(dao_id) = DaoId::parse(id) else {
            error!(
                "create_data_access_object `id` requires at least two dot-separated components (\"datasource.service\"), got \"{}\"",
                id
            );
            return None;
        };

        let handle = self.sources.get(dao_id.data_source)?;
        handle
            .source()
            .create_data_access_object(dao_id.service, params)
    }

    pub fn data_source(&self, id: &str) -> Option<&Arc<dyn DataSource>> {
        self.sources.get(id).map(SourceHandle::source)
    }

    pub fn descriptor(&self, id: &str) -> Option<&DataSourceDescriptor> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn data_source_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn snapshot(&self) -> Vec<DataSourceInfo> {
        let mut infos: Vec<DataSourceInfo> = self
            .sources
            .iter()
            .map(|(id, handle)| DataSourceInfo {
                id: id.clone(),
                type_name: handle.type_name().to_string(),
                state: handle.source().state(),
                params: handle.source().params(),
            })
            .collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        infos
    }

    #[cfg(test)]
    fn descriptor_count(&self) -> usize {
        self.types.len()
    }
}
