use mvvmd_core::DataSourceCatalog;

/// Every data source this build knows how to register.
pub fn catalog() -> DataSourceCatalog {
    #[allow(unused_mut)]
    let mut catalog = DataSourceCatalog::new();

    #[cfg(feature = "memory")]
    catalog.register(
        mvvmd_memory::DATA_SOURCE_ID,
        mvvmd_core::DataSourceDescriptor::of::<mvvmd_memory::MemoryDataSource>(),
    );

    #[cfg(feature = "env")]
    catalog.register(
        mvvmd_env::DATA_SOURCE_ID,
        mvvmd_core::DataSourceDescriptor::of::<mvvmd_env::EnvDataSource>(),
    );

    catalog
}

#[cfg(all(test, feature = "memory", feature = "env"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_features_register_reference_sources() {
        let catalog = catalog();
        assert_eq!(catalog.names(), vec!["env", "memory"]);
        assert!(catalog
            .get("memory")
            .unwrap()
            .is::<mvvmd_memory::MemoryDataSource>());
        assert!(catalog.get("env").unwrap().is::<mvvmd_env::EnvDataSource>());
    }
}
