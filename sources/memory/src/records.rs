use crate::{source::RECORDS_SERVICE, Records};
use mvvmd_core::DataAccessObject;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

/// Key/value access to a memory data source, optionally confined to a
/// namespace. Namespaced keys are stored as `"<namespace>/<key>"`.
pub struct RecordStore {
    records: Records,
    namespace: Option<String>,
}

impl RecordStore {
    pub(crate) fn new(records: Records, namespace: Option<String>) -> Self {
        Self { records, namespace }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(&self.qualify(key)).cloned()
    }

    pub fn put(&self, key: &str, value: Value) -> Option<Value> {
        self.write().insert(self.qualify(key), value)
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.write().remove(&self.qualify(key))
    }

    /// Keys visible in this store's namespace, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .read()
            .keys()
            .filter_map(|key| match &self.namespace {
                Some(namespace) => key
                    .strip_prefix(namespace.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(str::to_string),
                None => Some(key.clone()),
            })
            .collect();
        keys.sort();
        keys
    }

    fn qualify(&self, key: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}/{}", namespace, key),
            None => key.to_string(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Value>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Value>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DataAccessObject for RecordStore {
    fn service_id(&self) -> &str {
        RECORDS_SERVICE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, RwLock};

    #[test]
    fn test_namespaces_partition_keys() {
        let records: Records = Arc::new(RwLock::new(HashMap::new()));
        let users = RecordStore::new(records.clone(), Some("users".to_string()));
        let root = RecordStore::new(records, None);

        users.put("alice", json!({"age": 20}));
        root.put("alice", json!("root"));

        assert_eq!(users.get("alice"), Some(json!({"age": 20})));
        assert_eq!(root.get("alice"), Some(json!("root")));
        assert_eq!(users.keys(), vec!["alice".to_string()]);
        assert_eq!(
            root.keys(),
            vec!["alice".to_string(), "users/alice".to_string()]
        );

        assert_eq!(users.remove("alice"), Some(json!({"age": 20})));
        assert_eq!(users.get("alice"), None);
        assert_eq!(users.namespace(), Some("users"));
    }
}
