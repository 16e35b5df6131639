//! Basic tests for unwrap-core

use unwrap_core::*;

fn texts(paragraphs: &[Paragraph]) -> Vec<&str> {
    paragraphs.iter().map(Paragraph::text).collect()
}

#[test]
fn test_metric_avg_and_dev() {
    let mut metric = Metric::new();
    metric.add(2.0).add(4.0).add(6.0);

    assert_eq!(metric.avg(), 4.0);
    assert!((metric.dev() - 8.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_paragraph_joins() {
    let mut joined = Paragraph::new();
    joined.add("inter-").add("national");
    assert_eq!(joined.text(), "international");

    let mut spaced = Paragraph::new();
    spaced.add("hello").add("world");
    assert_eq!(spaced.text(), "hello world");
}

#[test]
fn test_blank_line_produces_single_empty_paragraph() {
    let paragraphs = unwrap_lines(&["hello", "", "world"], 1);
    assert_eq!(texts(&paragraphs), vec!["hello", "", "world"]);
}

#[test]
fn test_end_to_end_two_passes() {
    let lines = [
        "The quick brown fox jumps over the",
        "lazy dog.",
        "",
        "Next paragraph starts here and is",
        "a single short line.",
    ];

    let mut joiner = Joiner::new(&lines);
    joiner.iterate(1);
    let paragraphs: Vec<Paragraph> = joiner.paragraphs().collect();

    assert_eq!(
        texts(&paragraphs),
        vec![
            "The quick brown fox jumps over the lazy dog.",
            "",
            "Next paragraph starts here and is a single short line.",
        ]
    );
    assert!(!paragraphs.last().unwrap().is_uncertain());

    // Both passes recorded the two opening lines
    assert_eq!(joiner.first_metric().count(), 4);
    assert_eq!(joiner.middle_metric().count(), 0);
    assert_eq!(joiner.stats().first_avg, 33.5);
}

#[test]
fn test_stats_snapshot_is_detached() {
    let lines = ["a wrapped", "line."];
    let mut joiner = Joiner::new(&lines);
    let before = joiner.stats();
    joiner.iterate(1);
    let after = joiner.stats();

    assert_eq!(before, Stats::default());
    assert_eq!(after.first_avg, 9.0);
}

#[test]
fn test_uncertain_colon_ending() {
    let lines = ["The list is as follows:", "one item per line"];
    let paragraphs = unwrap_lines(&lines, 2);

    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[0].is_uncertain());
    assert!(!paragraphs[1].is_uncertain());
}

#[test]
fn test_config_rejects_empty_marks() {
    let result = JoinerConfig::builder().end_marks(["", "."]).build();
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_per_pass_policy_end_to_end() {
    let text = "one short opening\nline that keeps going\nand ends here.\n\nsecond block\nends.";
    let lines: Vec<&str> = text.lines().collect();
    let config = JoinerConfig::builder()
        .metric_policy(MetricPolicy::PerPass)
        .build()
        .unwrap();

    let mut joiner = Joiner::with_config(&lines, config);
    joiner.iterate(2);
    let per_pass_counts = (joiner.first_metric().count(), joiner.middle_metric().count());
    let paragraphs: Vec<Paragraph> = joiner.paragraphs().collect();

    assert_eq!(per_pass_counts, (2, 1));
    assert_eq!(
        texts(&paragraphs),
        vec![
            "one short opening line that keeps going and ends here.",
            "",
            "second block ends.",
        ]
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_paragraph_and_stats_serialize() {
    let paragraphs = unwrap_lines(&["a:", "b"], 1);
    let json = serde_json::to_string(&paragraphs[0]).unwrap();
    assert!(json.contains("\"uncertain\":true"));

    let stats = serde_json::to_value(Stats::default()).unwrap();
    assert_eq!(stats["first_avg"], 0.0);
}
