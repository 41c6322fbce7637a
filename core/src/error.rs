use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data source not found: {0}")]
    DataSourceNotFound(String),

    #[error("Data source type conversion failed: {0}")]
    DataSourceTypeConversionFailed(String),

    #[error("Data source not uniquely instanced: {0}")]
    DataSourceNotUniquelyInstanced(String),

    #[error("Non-unique data source detected: {0}")]
    DuplicateDataSource(String),

    #[error("Data source type registered more than once: {0}")]
    DuplicateDescriptor(String),

    #[error("Data manager cannot initialize without data sources")]
    NoDataSources,

    #[error("Couldn't instantiate data source {type_name}: {source}")]
    Instantiation {
        type_name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Type conversion error: {0}")]
    Type(String),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Type(err.to_string())
    }
}
