use crate::core::value::ConfigValue;
use serde::de::DeserializeOwned;

/// Read-only view over the configuration attached to one action or trait record.
///
/// Every accessor answers `None` on a missing key or a shape mismatch, so plugin
/// constructors can bail out with `?` instead of failing loudly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PluginConfig<'a> {
    value: Option<&'a ConfigValue>,
}

impl<'a> PluginConfig<'a> {
    pub fn new(value: Option<&'a ConfigValue>) -> Self {
        Self { value }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        match self.value {
            None | Some(ConfigValue::Null) => true,
            Some(ConfigValue::Map(map)) => map.is_empty(),
            Some(_) => false,
        }
    }

    pub fn value(&self, key: &str) -> Option<&'a ConfigValue> {
        self.value?.get(key)
    }

    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.value(key)?.as_str()
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.value(key)?.as_bool()
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.value(key)?.as_i64()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a ConfigValue)> + 'a {
        self.value
            .and_then(ConfigValue::as_map)
            .into_iter()
            .flat_map(|map| map.iter().map(|(key, value)| (key.as_str(), value)))
    }

    /// Decode the whole bag into a typed config struct.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        let value = self.value?;
        let json = serde_json::to_value(value).ok()?;
        serde_json::from_value(json).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::PluginConfig;
    use crate::core::ConfigValue;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct LaunchConfig {
        experience_id: String,
    }

    fn config(json: &str) -> ConfigValue {
        serde_json::from_str(json).expect("config should parse")
    }

    #[test]
    fn typed_accessors_read_keys() {
        let value = config(r#"{"experienceID":"abc","count":3,"flag":false}"#);
        let plugin = PluginConfig::new(Some(&value));

        assert_eq!(plugin.string("experienceID"), Some("abc"));
        assert_eq!(plugin.integer("count"), Some(3));
        assert_eq!(plugin.bool("flag"), Some(false));
        assert_eq!(plugin.string("count"), None);
        assert_eq!(plugin.entries().count(), 3);
    }

    #[test]
    fn missing_config_is_empty() {
        let plugin = PluginConfig::empty();
        assert!(plugin.is_empty());
        assert_eq!(plugin.string("anything"), None);
        assert_eq!(plugin.entries().count(), 0);
        assert_eq!(plugin.decode::<LaunchConfig>(), None);
    }

    #[test]
    fn decode_reads_struct() {
        let value = config(r#"{"experienceId":"xyz"}"#);
        let decoded = PluginConfig::new(Some(&value)).decode::<LaunchConfig>();
        assert_eq!(
            decoded,
            Some(LaunchConfig {
                experience_id: "xyz".to_string()
            })
        );
    }
}
