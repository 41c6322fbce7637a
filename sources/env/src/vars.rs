use crate::source::VARS_SERVICE;
use mvvmd_core::DataAccessObject;
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct EnvVars {
    vars: Arc<BTreeMap<String, String>>,
    prefix: Option<String>,
}

impl EnvVars {
    pub(crate) fn new(vars: Arc<BTreeMap<String, String>>, prefix: Option<String>) -> Self {
        Self { vars, prefix }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        if !self.is_visible(name) {
            return None;
        }
        self.vars.get(name).map(String::as_str)
    }

    /// Visible variables ordered by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.vars
            .iter()
            .filter(|(name, _)| self.is_visible(name))
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    fn is_visible(&self, name: &str) -> bool {
        self.prefix
            .as_deref()
            .map_or(true, |prefix| name.starts_with(prefix))
    }
}

impl DataAccessObject for EnvVars {
    fn service_id(&self) -> &str {
        VARS_SERVICE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> Arc<BTreeMap<String, String>> {
        Arc::new(BTreeMap::from([
            ("APP_HOST".to_string(), "localhost".to_string()),
            ("APP_PORT".to_string(), "8080".to_string()),
            ("HOME".to_string(), "/root".to_string()),
        ]))
    }

    #[test]
    fn test_prefix_hides_other_variables() {
        let env = EnvVars::new(vars(), Some("APP_".to_string()));
        assert_eq!(env.get("APP_PORT"), Some("8080"));
        assert_eq!(env.get("HOME"), None);
        assert_eq!(
            env.list(),
            vec![("APP_HOST", "localhost"), ("APP_PORT", "8080")]
        );
    }

    #[test]
    fn test_without_prefix_everything_is_visible() {
        let env = EnvVars::new(vars(), None);
        assert_eq!(env.get("HOME"), Some("/root"));
        assert_eq!(env.list().len(), 3);
    }
}
