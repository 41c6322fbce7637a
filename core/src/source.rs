use crate::{
    error::Result,
    types::{DataSourceState, Params},
};
use std::any::Any;

/// A named backing system that hands out data access objects per service.
pub trait DataSource: Send + Sync + 'static {
    fn data_source_id(&self) -> &str;
    fn state(&self) -> DataSourceState;
    fn params(&self) -> Params;

    /// Returns `None` when `service_id` is not a service this source offers.
    fn create_data_access_object(
        &self,
        service_id: &str,
        params: &Params,
    ) -> Option<Box<dyn DataAccessObject>>;
}

/// Zero-argument construction for types that may exist at most once per
/// [`InstanceStore`](crate::instance::InstanceStore).
pub trait SingleInstance: Sized + Send + Sync + 'static {
    fn create() -> Result<Self>;
}

pub trait DataAccessObject: Any + Send + Sync {
    fn service_id(&self) -> &str;
    fn as_any(&self) -> &dyn Any;
}

impl dyn DataAccessObject {
    pub fn downcast_ref<T: DataAccessObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: DataAccessObject>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
