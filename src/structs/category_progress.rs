use std::collections::HashMap;
use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Success percentage per category, with the category order carried
/// explicitly. The order is the canonical ordering used for palette
/// assignment in every chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryProgress {
    order: Vec<String>,
    rates: HashMap<String, f64>,
}

impl CategoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `category` to the canonical order, or updates its rate in
    /// place if it is already known.
    pub fn insert(&mut self, category: &str, rate: f64) {
        if self.rates.insert(category.to_string(), rate).is_none() {
            self.order.push(category.to_string());
        }
    }

    pub fn with(mut self, category: &str, rate: f64) -> Self {
        self.insert(category, rate);
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.order
    }

    pub fn rate(&self, category: &str) -> Option<f64> {
        self.rates.get(category).copied()
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.order.iter().position(|c| c == category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.rates.contains_key(category)
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(move |c| (c.as_str(), self.rates.get(c).copied().unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<(String, f64)> for CategoryProgress {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut progress = CategoryProgress::new();
        for (category, rate) in iter {
            progress.insert(&category, rate);
        }
        progress
    }
}

impl Serialize for CategoryProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, rate) in self.iter() {
            map.serialize_entry(category, &rate)?;
        }
        map.end()
    }
}

struct CategoryProgressVisitor;

impl<'de> Visitor<'de> for CategoryProgressVisitor {
    type Value = CategoryProgress;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category name to success percentage")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut progress = CategoryProgress::new();
        while let Some((category, rate)) = access.next_entry::<String, f64>()? {
            progress.insert(&category, rate);
        }
        Ok(progress)
    }
}

impl<'de> Deserialize<'de> for CategoryProgress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryProgressVisitor)
    }
}
