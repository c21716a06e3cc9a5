//! End-to-end layout reconstruction tests.
//!
//! These exercise the full pipeline the hosting application runs per image:
//! raw detections -> clustered lines -> flattened text + reconstructed table,
//! including the degenerate shapes OCR routinely produces (all-low-confidence
//! input, ragged column counts, vertically drifting lines).

use textweave::{
    cluster_blocks, cluster_lines, lines_to_text, reconstruct_table, table_to_markdown,
    ClusterConfig, Detection, Line, Point,
};

fn detection(x: f64, y: f64, text: &str, confidence: f64) -> Detection {
    let bounds = [
        Point::new(x, y),
        Point::new(x + 40.0, y),
        Point::new(x + 40.0, y + 10.0),
        Point::new(x, y + 10.0),
    ];
    Detection::new(bounds, text, confidence)
}

#[test]
fn test_jittered_header_clusters_into_one_line() {
    let detections = vec![
        detection(5.0, 10.0, "Name", 0.9),
        detection(50.0, 12.0, "Age", 0.9),
        detection(95.0, 11.0, "City", 0.9),
    ];

    let lines = cluster_lines(&detections, &ClusterConfig::default());
    assert_eq!(lines, vec![Line::from(vec!["Name", "Age", "City"])]);
}

#[test]
fn test_distant_detections_split_into_singleton_lines() {
    let detections = vec![
        detection(5.0, 10.0, "first", 0.9),
        detection(5.0, 200.0, "second", 0.9),
    ];

    let lines = cluster_lines(&detections, &ClusterConfig::default());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], Line::from(vec!["first"]));
    assert_eq!(lines[1], Line::from(vec!["second"]));
}

#[test]
fn test_short_data_row_padded_into_full_row_mapping() {
    let lines = vec![
        Line::from(vec!["Name", "Age"]),
        Line::from(vec!["Bob"]),
    ];

    let table = reconstruct_table(&lines);
    assert_eq!(table.headers, vec!["Name", "Age"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0]["Name"], "Bob");
    assert_eq!(table.rows[0]["Age"], "");
}

#[test]
fn test_all_low_confidence_input_degrades_to_empty_results() {
    let detections = vec![
        detection(5.0, 10.0, "noise", 0.2),
        detection(50.0, 12.0, "more", 0.4),
    ];

    let lines = cluster_lines(&detections, &ClusterConfig::default());
    assert!(lines.is_empty());
    assert_eq!(lines_to_text(&lines), "");

    let table = reconstruct_table(&lines);
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn test_vertical_drift_within_consecutive_gaps_stays_one_line() {
    // Consecutive centroid gaps of 13px each (threshold 15), first-to-last
    // gap 26px: the sequential-neighbor comparison keeps all three together.
    let detections = vec![
        detection(5.0, 0.0, "drift", 0.9),
        detection(50.0, 13.0, "keeps", 0.9),
        detection(95.0, 26.0, "going", 0.9),
    ];

    let lines = cluster_lines(&detections, &ClusterConfig::default());
    assert_eq!(lines, vec![Line::from(vec!["drift", "keeps", "going"])]);
}

#[test]
fn test_full_pipeline_from_blocks_to_table() {
    // Grouped detector output for a small two-column table, blocks split
    // arbitrarily and detections unordered within them.
    let blocks = vec![
        vec![
            detection(50.0, 62.0, "41", 0.88),
            detection(5.0, 10.0, "Name", 0.97),
        ],
        vec![
            detection(50.0, 11.0, "Age", 0.95),
            detection(5.0, 60.0, "Bob", 0.91),
            detection(5.0, 110.0, "Alice", 0.93),
            detection(50.0, 112.0, "38", 0.9),
        ],
    ];

    let lines = cluster_blocks(&blocks, &ClusterConfig::default());
    assert_eq!(
        lines,
        vec![
            Line::from(vec!["Name", "Age"]),
            Line::from(vec!["Bob", "41"]),
            Line::from(vec!["Alice", "38"]),
        ]
    );

    assert_eq!(lines_to_text(&lines), "Name\tAge\nBob\t41\nAlice\t38");

    let table = reconstruct_table(&lines);
    assert_eq!(table.headers, vec!["Name", "Age"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0]["Name"], "Bob");
    assert_eq!(table.rows[1]["Age"], "38");

    let markdown = table_to_markdown(&table);
    assert!(markdown.starts_with("| Name"));
    assert!(markdown.contains("| Alice"));
}

#[test]
fn test_within_line_tokens_non_decreasing_in_anchor() {
    let detections = vec![
        detection(95.0, 10.0, "c", 0.9),
        detection(5.0, 11.0, "a", 0.9),
        detection(50.0, 12.0, "b", 0.9),
        detection(50.0, 60.0, "e", 0.9),
        detection(5.0, 61.0, "d", 0.9),
    ];

    let lines = cluster_lines(&detections, &ClusterConfig::default());
    assert_eq!(
        lines,
        vec![Line::from(vec!["a", "b", "c"]), Line::from(vec!["d", "e"])]
    );
}

#[test]
fn test_filtered_text_never_appears_in_output() {
    let detections = vec![
        detection(5.0, 10.0, "visible", 0.9),
        detection(50.0, 10.0, "invisible", 0.49),
        detection(5.0, 60.0, "shown", 0.51),
    ];

    let lines = cluster_lines(&detections, &ClusterConfig::default());
    let flattened = lines_to_text(&lines);
    assert!(flattened.contains("visible"));
    assert!(flattened.contains("shown"));
    assert!(!flattened.contains("invisible"));
}

#[test]
fn test_empty_input_shapes() {
    assert!(cluster_lines(&[], &ClusterConfig::default()).is_empty());
    assert!(cluster_blocks(&[], &ClusterConfig::default()).is_empty());

    let table = reconstruct_table(&[]);
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn test_structured_output_wire_shape() {
    // The hosting application serializes rows straight to JSON; header order
    // must survive and padded cells must appear as empty strings.
    let lines = vec![
        Line::from(vec!["Name", "Age", "City"]),
        Line::from(vec!["Bob", "41"]),
    ];

    let table = reconstruct_table(&lines);
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "headers": ["Name", "Age", "City"],
            "rows": [{"Name": "Bob", "Age": "41", "City": ""}],
        })
    );
}

#[test]
fn test_detection_deserializes_from_detector_shape() {
    let json = r#"{
        "bounds": [
            {"x": 5.0, "y": 8.0},
            {"x": 45.0, "y": 8.0},
            {"x": 45.0, "y": 18.0},
            {"x": 5.0, "y": 18.0}
        ],
        "text": "Name",
        "confidence": 0.97
    }"#;

    let det: Detection = serde_json::from_str(json).unwrap();
    assert_eq!(det.text, "Name");
    assert_eq!(det.centroid_y(), 13.0);
    assert_eq!(det.anchor_x(), 5.0);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = ClusterConfig {
        y_threshold: f64::NAN,
        confidence_threshold: 0.5,
    };
    assert!(config.validate().is_err());

    let config = ClusterConfig {
        y_threshold: 15.0,
        confidence_threshold: 1.2,
    };
    assert!(config.validate().is_err());
}
