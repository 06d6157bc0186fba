//! Tag store carrier and the railway tag classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Owned key/value tag map for one map feature. Parsing raw map data into
/// tag stores happens upstream; this is only the carrier the classifiers
/// read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagStore {
    entries: HashMap<String, String>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut tags = Self::new();
        for &(key, value) in pairs {
            tags.insert(key, value);
        }
        tags
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Railway feature variants the synthesizer handles. Disused lines keep
/// their track geometry, so they classify too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RailwayClass {
    Rail,
    LightRail,
    Tram,
    Disused,
}

impl RailwayClass {
    /// Pure, total membership test over a tag store.
    pub fn from_tags(tags: &TagStore) -> Option<Self> {
        match tags.value("railway") {
            Some("rail") => Some(RailwayClass::Rail),
            Some("light_rail") => Some(RailwayClass::LightRail),
            Some("tram") => Some(RailwayClass::Tram),
            Some("disused") => Some(RailwayClass::Disused),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_all_railway_values() {
        let cases = [
            ("rail", RailwayClass::Rail),
            ("light_rail", RailwayClass::LightRail),
            ("tram", RailwayClass::Tram),
            ("disused", RailwayClass::Disused),
        ];
        for (value, expected) in cases {
            let tags = TagStore::from_pairs(&[("railway", value)]);
            assert_eq!(RailwayClass::from_tags(&tags), Some(expected));
        }
    }

    #[test]
    fn test_ignores_non_railway_features() {
        assert_eq!(
            RailwayClass::from_tags(&TagStore::from_pairs(&[("highway", "primary")])),
            None
        );
        assert_eq!(
            RailwayClass::from_tags(&TagStore::from_pairs(&[("railway", "platform")])),
            None
        );
        assert_eq!(RailwayClass::from_tags(&TagStore::new()), None);
    }

    #[test]
    fn test_value_lookup() {
        let mut tags = TagStore::new();
        tags.insert("railway", "tram");
        assert_eq!(tags.value("railway"), Some("tram"));
        assert_eq!(tags.value("bridge"), None);
    }
}
