//! Custom key/value properties.

use crate::error::{CoreError, CoreResult};
use std::collections::BTreeMap;

/// String-keyed, string-valued property mapping. Keys iterate in sorted order.
pub type Properties = BTreeMap<String, String>;

/// Bulk edits used when applying object type templates.
pub trait PropertiesExt {
    /// Inserts every entry of `other`, overwriting existing values.
    fn merge_from(&mut self, other: &Properties);

    /// Removes every key that `other` defines, whatever its value.
    fn remove_keys_of(&mut self, other: &Properties);
}

impl PropertiesExt for Properties {
    fn merge_from(&mut self, other: &Properties) {
        for (key, value) in other {
            self.insert(key.clone(), value.clone());
        }
    }

    fn remove_keys_of(&mut self, other: &Properties) {
        for key in other.keys() {
            self.remove(key);
        }
    }
}

/// Splits a `key=value` pair. The value may itself contain `=`.
pub fn parse_property_pair(pair: &str) -> CoreResult<(String, String)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| CoreError::InvalidPropertyPair(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CoreError::EmptyPropertyName);
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, &str)]) -> Properties {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = props(&[("hp", "5"), ("note", "keep")]);
        base.merge_from(&props(&[("hp", "10"), ("speed", "2")]));
        assert_eq!(base, props(&[("hp", "10"), ("note", "keep"), ("speed", "2")]));
    }

    #[test]
    fn test_remove_keys_ignores_values() {
        let mut base = props(&[("hp", "99"), ("note", "keep")]);
        base.remove_keys_of(&props(&[("hp", "10"), ("missing", "x")]));
        assert_eq!(base, props(&[("note", "keep")]));
    }

    #[test]
    fn test_parse_property_pair() {
        assert_eq!(
            parse_property_pair("hp=10").unwrap(),
            ("hp".to_string(), "10".to_string())
        );
        assert_eq!(
            parse_property_pair("expr=a=b").unwrap(),
            ("expr".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_property_pair("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_property_pair("novalue").is_err());
        assert_eq!(
            parse_property_pair("=10").unwrap_err(),
            CoreError::EmptyPropertyName
        );
    }
}
