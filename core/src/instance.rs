use crate::{
    error::{Error, Result},
    source::SingleInstance,
};
use lazy_static::lazy_static;
use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

lazy_static! {
    static ref GLOBAL_STORE: InstanceStore = InstanceStore::new();
}

type Instances = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Holds at most one instance per concrete type.
///
/// Registries receive the store they should construct through, so tests and
/// embedded hosts can keep isolated stores while applications share
/// [`InstanceStore::global`].
#[derive(Default)]
pub struct InstanceStore {
    instances: Mutex<Instances>,
}

impl InstanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static InstanceStore {
        &GLOBAL_STORE
    }

    /// Constructs `T` and keeps it, failing if an instance of `T` is already held.
    pub fn instantiate<T: SingleInstance>(&self) -> Result<Arc<T>> {
        let type_id = TypeId::of::<T>();
        if self.lock().contains_key(&type_id) {
            return Err(Error::DataSourceNotUniquelyInstanced(
                type_name::<T>().to_string(),
            ));
        }

        // the lock is not held across `create` so constructors may use the store
        let instance = Arc::new(T::create()?);

        let mut instances = self.lock();
        if instances.contains_key(&type_id) {
            return Err(Error::DataSourceNotUniquelyInstanced(
                type_name::<T>().to_string(),
            ));
        }
        instances.insert(type_id, instance.clone());
        debug!(type_name = type_name::<T>(), "Single instance created");

        Ok(instance)
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.lock()
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.lock().contains_key(&TypeId::of::<T>())
    }

    /// Drops the store's hold on the instance of `type_id`, allowing the type
    /// to be constructed again. Outstanding handles stay valid.
    pub fn release(&self, type_id: TypeId) -> bool {
        self.lock().remove(&type_id).is_some()
    }

    /// Like [`release`](Self::release), but only when the held instance is
    /// `instance` itself.
    pub(crate) fn release_instance(
        &self,
        type_id: TypeId,
        instance: &Arc<dyn Any + Send + Sync>,
    ) -> bool {
        let mut instances = self.lock();
        let same = instances
            .get(&type_id)
            .map_or(false, |held| same_instance(held, instance));
        if same {
            instances.remove(&type_id);
        }
        same
    }

    pub(crate) fn type_ids(&self) -> HashSet<TypeId> {
        self.lock().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Instances> {
        self.instances.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn same_instance(a: &Arc<dyn Any + Send + Sync>, b: &Arc<dyn Any + Send + Sync>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}
