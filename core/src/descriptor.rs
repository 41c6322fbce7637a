use crate::{
    error::Result,
    instance::InstanceStore,
    source::{DataSource, SingleInstance},
};
use std::any::{type_name, Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

pub type Constructor = fn(&InstanceStore) -> Result<SourceHandle>;

/// A constructed data source, viewable both through the [`DataSource`]
/// contract and as its concrete type.
#[derive(Clone)]
pub struct SourceHandle {
    type_id: TypeId,
    type_name: &'static str,
    source: Arc<dyn DataSource>,
    instance: Arc<dyn Any + Send + Sync>,
}

impl SourceHandle {
    pub fn new<T: DataSource>(instance: Arc<T>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            source: instance.clone(),
            instance,
        }
    }

    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.instance.clone().downcast::<T>().ok()
    }

    /// Gives the instance back to `store` if the store holds this very
    /// instance and held nothing of its type before `held_before` was taken.
    pub(crate) fn release(&self, store: &InstanceStore, held_before: &HashSet<TypeId>) {
        if !held_before.contains(&self.type_id) {
            store.release_instance(self.type_id, &self.instance);
        }
    }
}

/// Type-level description of a data source: how to build it and how to
/// recognise it again when it is requested by type.
#[derive(Clone, Copy)]
pub struct DataSourceDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    constructor: Constructor,
}

impl DataSourceDescriptor {
    pub fn of<T: DataSource + SingleInstance>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            constructor: construct::<T>,
        }
    }

    /// Describes `T` but builds through `constructor`. Nothing checks that the
    /// constructor actually yields a `T`; lookups by type report a conversion
    /// failure when it does not.
    pub fn from_fn<T: 'static>(constructor: Constructor) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            constructor,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub(crate) fn instantiate(&self, store: &InstanceStore) -> Result<SourceHandle> {
        (self.constructor)(store)
    }
}

fn construct<T: DataSource + SingleInstance>(store: &InstanceStore) -> Result<SourceHandle> {
    store.instantiate::<T>().map(SourceHandle::new)
}

impl PartialEq for DataSourceDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for DataSourceDescriptor {}

impl fmt::Debug for DataSourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DataSourceDescriptor")
            .field(&self.type_name)
            .finish()
    }
}
