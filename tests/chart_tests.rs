use habit_dashboard::config::constants::{CATEGORY_PALETTE, DIMMED_BAR_COLOR};
use habit_dashboard::enums::category_selection::CategorySelection;
use habit_dashboard::services::category_selector::CategorySelector;
use habit_dashboard::services::chart_dataset_builder::ChartDatasetBuilder;
use habit_dashboard::services::series_synthesizer::SeriesSynthesizer;
use habit_dashboard::structs::chart::dashboard_charts::DashboardCharts;
use habit_dashboard::structs::dashboard_analytics::DashboardAnalytics;
use crate::support::{analytics, sample_analytics};

fn build(analytics: &DashboardAnalytics, selection: &CategorySelection) -> DashboardCharts {
    let series = SeriesSynthesizer::synthesize(&analytics.completion_trend, &analytics.category_progress);
    ChartDatasetBuilder::new().build(&analytics.trend_dates(), &series, &analytics.category_progress, selection)
}

fn seven_categories() -> DashboardAnalytics {
    analytics(
        &[("2024-01-01", 20)],
        &[
            ("health", 90.0),
            ("fitness", 80.0),
            ("study", 70.0),
            ("mindfulness", 60.0),
            ("finance", 50.0),
            ("social", 40.0),
            ("sleep", 30.0),
        ],
    )
}

#[test]
fn all_selection_has_one_line_per_category() {
    let charts = build(&sample_analytics(), &CategorySelection::All);

    let line = &charts.line;
    assert_eq!(line.labels, vec!["2024-01-01", "2024-01-02"]);
    assert_eq!(line.datasets.len(), 2);
    assert_eq!(line.datasets[0].label, "HEALTH");
    assert_eq!(line.datasets[0].data, vec![5, 2]);
    assert_eq!(line.datasets[0].border_color, CATEGORY_PALETTE[0]);
    assert_eq!(line.datasets[0].background_color, format!("{}33", CATEGORY_PALETTE[0]));
    assert_eq!(line.datasets[1].label, "FITNESS");
    assert_eq!(line.datasets[1].data, vec![3, 1]);
    assert_eq!(line.datasets[1].border_color, CATEGORY_PALETTE[1]);
    assert!(line.datasets.iter().all(|d| d.fill));
}

#[test]
fn single_selection_keeps_its_own_palette_color() {
    let selection = CategorySelection::Single("fitness".to_string());

    let charts = build(&sample_analytics(), &selection);

    assert_eq!(charts.line.datasets.len(), 1);
    let dataset = &charts.line.datasets[0];
    assert_eq!(dataset.label, "FITNESS");
    assert_eq!(dataset.data, vec![3, 1]);
    assert_eq!(dataset.border_color, CATEGORY_PALETTE[1]);
    assert_eq!(dataset.background_color, format!("{}44", CATEGORY_PALETTE[1]));
}

#[test]
fn bars_cover_every_category_regardless_of_selection() {
    let analytics = sample_analytics();

    for selection in [CategorySelection::All, CategorySelection::Single("health".to_string())] {
        let bar = build(&analytics, &selection).bar;

        assert_eq!(bar.labels, vec!["HEALTH", "FITNESS"]);
        assert_eq!(bar.datasets.len(), 1);
        assert_eq!(bar.datasets[0].data, vec![50.0, 25.0]);
        assert_eq!(bar.datasets[0].label, "Success Rate (%)");
    }
}

#[test]
fn all_selection_colors_every_bar() {
    let bar = build(&seven_categories(), &CategorySelection::All).bar;

    for index in 0..7 {
        assert_eq!(bar.bar_color(index), Some(CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]));
    }
}

#[test]
fn selecting_a_category_dims_every_other_bar() {
    let analytics = seven_categories();
    let categories = analytics.category_progress.categories().to_vec();

    for (selected_index, selected) in categories.iter().enumerate() {
        let bar = build(&analytics, &CategorySelection::Single(selected.clone())).bar;

        for index in 0..categories.len() {
            let expected = if index == selected_index {
                CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
            } else {
                DIMMED_BAR_COLOR
            };
            assert_eq!(bar.bar_color(index), Some(expected), "selected {selected}, bar {index}");
        }
    }
}

#[test]
fn palette_wraps_for_seventh_category() {
    let charts = build(&seven_categories(), &CategorySelection::All);

    assert_eq!(charts.line.datasets[6].border_color, charts.line.datasets[0].border_color);
    assert_ne!(charts.line.datasets[6].border_color, charts.line.datasets[5].border_color);

    let single = build(&seven_categories(), &CategorySelection::Single("sleep".to_string()));
    assert_eq!(single.line.datasets[0].border_color, CATEGORY_PALETTE[0]);
}

#[test]
fn identical_inputs_build_identical_json() {
    let analytics = seven_categories();
    let selection = CategorySelection::Single("study".to_string());

    let first = serde_json::to_string(&build(&analytics, &selection)).unwrap();
    let second = serde_json::to_string(&build(&analytics, &selection)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_payload_builds_empty_charts() {
    let charts = build(&DashboardAnalytics::default(), &CategorySelection::All);

    assert!(charts.line.labels.is_empty());
    assert!(charts.line.datasets.is_empty());
    assert!(charts.bar.labels.is_empty());
    assert!(charts.bar.datasets[0].data.is_empty());
}

#[test]
fn selector_drives_builder_end_to_end() {
    let analytics = sample_analytics();
    let mut selector = CategorySelector::new();

    assert!(!selector.select("nonexistent", &analytics.category_progress));
    assert_eq!(selector.selection(), &CategorySelection::All);

    assert!(selector.select("health", &analytics.category_progress));
    let bar = build(&analytics, selector.selection()).bar;
    assert_eq!(bar.bar_color(0), Some(CATEGORY_PALETTE[0]));
    assert_eq!(bar.bar_color(1), Some(DIMMED_BAR_COLOR));
}

#[test]
fn chart_json_uses_chart_js_field_names() {
    let json = serde_json::to_value(build(&sample_analytics(), &CategorySelection::All)).unwrap();

    assert_eq!(json["line"]["datasets"][0]["borderColor"], CATEGORY_PALETTE[0]);
    assert_eq!(json["bar"]["datasets"][0]["borderRadius"], 10);
    assert_eq!(json["options"]["yBeginAtZero"], true);
}
