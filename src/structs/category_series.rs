use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Synthesized per-category daily values, in canonical category order.
/// Every series has one value per day of the completion trend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySeries {
    entries: Vec<(String, Vec<i64>)>,
}

impl CategorySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: &str, values: Vec<i64>) {
        self.entries.push((category.to_string(), values));
    }

    pub fn get(&self, category: &str) -> Option<&[i64]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> + '_ {
        self.entries.iter().map(|(c, v)| (c.as_str(), v.as_slice()))
    }

    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategorySeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, values) in &self.entries {
            map.serialize_entry(category, values)?;
        }
        map.end()
    }
}
