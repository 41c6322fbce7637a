pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod instance;
pub mod manager;
pub mod registry;
pub mod source;
pub mod types;

pub use catalog::DataSourceCatalog;
pub use descriptor::{DataSourceDescriptor, SourceHandle};
pub use error::{Error, Result};
pub use identifier::DaoId;
pub use instance::InstanceStore;
pub use manager::DataManager;
pub use registry::DataSourceRegistry;
pub use source::{DataAccessObject, DataSource, SingleInstance};
pub use types::*;
