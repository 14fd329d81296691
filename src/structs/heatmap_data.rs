use std::collections::HashMap;
use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub date: String,
    pub count: i64,
}

/// Payload of `GET /analytics/heatmap`: date to completion count, kept in
/// the order the backend sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeatmapData {
    pub cells: Vec<HeatmapCell>,
}

impl HeatmapData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, date: &str, count: i64) -> Self {
        self.cells.push(HeatmapCell {
            date: date.to_string(),
            count,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for HeatmapData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for cell in &self.cells {
            map.serialize_entry(&cell.date, &cell.count)?;
        }
        map.end()
    }
}

struct HeatmapDataVisitor;

impl<'de> Visitor<'de> for HeatmapDataVisitor {
    type Value = HeatmapData;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of date to completion count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0);
        let mut cells: Vec<HeatmapCell> = Vec::with_capacity(capacity);
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);

        // A repeated date keeps its first position and takes the last count.
        while let Some((date, count)) = access.next_entry::<String, i64>()? {
            match positions.get(&date) {
                Some(&index) => cells[index].count = count,
                None => {
                    positions.insert(date.clone(), cells.len());
                    cells.push(HeatmapCell { date, count });
                }
            }
        }
        Ok(HeatmapData { cells })
    }
}

impl<'de> Deserialize<'de> for HeatmapData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HeatmapDataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_date_keeps_first_position_and_last_count() {
        let data: HeatmapData =
            serde_json::from_str(r#"{"2024-01-02": 1, "2024-01-01": 4, "2024-01-02": 7}"#).expect("heatmap json");

        assert_eq!(data, HeatmapData::new().with("2024-01-02", 7).with("2024-01-01", 4));
    }

    #[test]
    fn many_days_decode_in_order() {
        let json = format!(
            "{{{}}}",
            (0..2000).map(|i| format!("\"d{i}\": {i}")).collect::<Vec<_>>().join(",")
        );
        let data: HeatmapData = serde_json::from_str(&json).expect("heatmap json");

        assert_eq!(data.len(), 2000);
        assert_eq!(data.cells[1999].date, "d1999");
        assert_eq!(data.cells[1999].count, 1999);
    }
}
