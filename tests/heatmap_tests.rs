use habit_dashboard::enums::heatmap_bucket::HeatmapBucket;
use habit_dashboard::services::heatmap_colorizer::HeatmapColorizer;
use habit_dashboard::structs::heatmap_data::HeatmapData;

#[test]
fn documented_counts_map_to_documented_buckets() {
    let expected = [
        (0, HeatmapBucket::Bucket0),
        (2, HeatmapBucket::Bucket1),
        (4, HeatmapBucket::Bucket2),
        (6, HeatmapBucket::Bucket3),
        (7, HeatmapBucket::Bucket4),
        (100, HeatmapBucket::Bucket4),
    ];

    for (count, bucket) in expected {
        assert_eq!(HeatmapColorizer::bucket(count), bucket, "count {count}");
    }
}

#[test]
fn bucket_colors_run_light_to_dark() {
    let colors: Vec<&str> = HeatmapBucket::ALL.iter().map(|b| b.color()).collect();

    assert_eq!(colors, vec!["#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127"]);
}

#[test]
fn payload_order_survives_deserialization() {
    let data: HeatmapData =
        serde_json::from_str(r#"{"2024-01-03": 7, "2024-01-01": 0, "2024-01-02": 3}"#).unwrap();

    let cells = HeatmapColorizer::colorize(&data, false);

    let dates: Vec<&str> = cells.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-03", "2024-01-01", "2024-01-02"]);
    assert_eq!(cells[0].bucket, HeatmapBucket::Bucket4);
    assert_eq!(cells[1].bucket, HeatmapBucket::Bucket0);
    assert_eq!(cells[2].bucket, HeatmapBucket::Bucket2);
}

#[test]
fn chronological_sort_is_opt_in() {
    let data = HeatmapData::new()
        .with("2024-02-01", 1)
        .with("not-a-date", 9)
        .with("2024-01-15", 5)
        .with("2023-12-31", 2);

    let cells = HeatmapColorizer::colorize(&data, true);

    let dates: Vec<&str> = cells.iter().map(|c| c.date.as_str()).collect();
    assert_eq!(dates, vec!["2023-12-31", "2024-01-15", "2024-02-01", "not-a-date"]);
}

#[test]
fn empty_heatmap_colors_nothing() {
    assert!(HeatmapColorizer::colorize(&HeatmapData::new(), true).is_empty());
}

#[test]
fn malformed_negative_count_renders_lightest() {
    let data: HeatmapData = serde_json::from_str(r#"{"2024-01-01": -4}"#).unwrap();

    let cells = HeatmapColorizer::colorize(&data, false);

    assert_eq!(cells[0].bucket, HeatmapBucket::Bucket0);
    assert_eq!(cells[0].tooltip, "2024-01-01 : -4 habits completed");
}

#[test]
fn heatmap_serializes_back_in_received_order() {
    let raw = r#"{"2024-01-02":1,"2024-01-01":2}"#;
    let data: HeatmapData = serde_json::from_str(raw).unwrap();

    assert_eq!(serde_json::to_string(&data).unwrap(), raw);
}
