use crate::{
    descriptor::DataSourceDescriptor,
    error::{Error, Result},
};
use std::collections::HashMap;

/// Host-side table from configuration names to data source descriptors.
#[derive(Debug, Default, Clone)]
pub struct DataSourceCatalog {
    descriptors: HashMap<String, DataSourceDescriptor>,
}

impl DataSourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, descriptor: DataSourceDescriptor) {
        self.descriptors.insert(name.to_string(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<DataSourceDescriptor> {
        self.descriptors.get(name).copied()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Looks up every name in order.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<DataSourceDescriptor>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| Error::Config(format!("Unknown data source type: {}", name)))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
