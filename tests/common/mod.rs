#![allow(dead_code)]

use mvvmd_core::{
    DataAccessObject, DataManager, DataSource, DataSourceRegistry, DataSourceState, Error,
    InstanceStore, Params, Result, SingleInstance, SourceHandle,
};
use std::any::Any;
use std::io;
use std::sync::{Arc, Mutex};

pub struct TestDataManager {
    registry: DataSourceRegistry,
}

impl DataManager for TestDataManager {
    fn from_registry(registry: DataSourceRegistry) -> Self {
        Self { registry }
    }

    fn registry(&self) -> &DataSourceRegistry {
        &self.registry
    }
}

// records every DAO request it receives
pub struct Books {
    requests: Mutex<Vec<(String, Params)>>,
}

impl Books {
    pub fn requests(&self) -> Vec<(String, Params)> {
        self.requests.lock().unwrap().clone()
    }
}

impl SingleInstance for Books {
    fn create() -> Result<Self> {
        Ok(Self {
            requests: Mutex::new(Vec::new()),
        })
    }
}

impl DataSource for Books {
    fn data_source_id(&self) -> &str {
        "books"
    }

    fn state(&self) -> DataSourceState {
        DataSourceState::Ready
    }

    fn params(&self) -> Params {
        Params::from([("shelves".to_string(), "3".to_string())])
    }

    fn create_data_access_object(
        &self,
        service_id: &str,
        params: &Params,
    ) -> Option<Box<dyn DataAccessObject>> {
        self.requests
            .lock()
            .unwrap()
            .push((service_id.to_string(), params.clone()));
        match service_id {
            "shelf" => Some(Box::new(Shelf {
                params: params.clone(),
            })),
            _ => None,
        }
    }
}

pub struct Shelf {
    pub params: Params,
}

impl DataAccessObject for Shelf {
    fn service_id(&self) -> &str {
        "shelf"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

macro_rules! fixed_source {
    ($ty:ident, $id:expr, $state:expr) => {
        pub struct $ty;

        impl SingleInstance for $ty {
            fn create() -> Result<Self> {
                Ok($ty)
            }
        }

        impl DataSource for $ty {
            fn data_source_id(&self) -> &str {
                $id
            }

            fn state(&self) -> DataSourceState {
                $state
            }

            fn params(&self) -> Params {
                Params::new()
            }

            fn create_data_access_object(
                &self,
                _service_id: &str,
                _params: &Params,
            ) -> Option<Box<dyn DataAccessObject>> {
                None
            }
        }
    };
}

fixed_source!(Authors, "authors", DataSourceState::Initialized);
// reports the same id as `Books`
fixed_source!(Shadow, "books", DataSourceState::Ready);
fixed_source!(Loans, "loans", DataSourceState::Unavailable);

pub struct Failing;

impl SingleInstance for Failing {
    fn create() -> Result<Self> {
        Err(Error::Other("backing system offline".to_string()))
    }
}

impl DataSource for Failing {
    fn data_source_id(&self) -> &str {
        "failing"
    }

    fn state(&self) -> DataSourceState {
        DataSourceState::Unavailable
    }

    fn params(&self) -> Params {
        Params::new()
    }

    fn create_data_access_object(
        &self,
        _service_id: &str,
        _params: &Params,
    ) -> Option<Box<dyn DataAccessObject>> {
        None
    }
}

/// Described as its own type but built as a `Loans` stand-in.
pub struct Archive;

pub fn build_archive(_store: &InstanceStore) -> Result<SourceHandle> {
    Ok(SourceHandle::new(Arc::new(Loans)))
}

/// Described as its own type, built through the store as `Books`.
pub struct BooksViaHost;

pub fn build_books_via_host(store: &InstanceStore) -> Result<SourceHandle> {
    store.instantiate::<Books>().map(SourceHandle::new)
}

/// Hands back whatever `Books` the store already holds.
pub fn reuse_books(store: &InstanceStore) -> Result<SourceHandle> {
    store
        .get::<Books>()
        .map(SourceHandle::new)
        .ok_or_else(|| Error::DataSourceNotFound("books".to_string()))
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber writing into a buffer, returning its output.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
