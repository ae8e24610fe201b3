//! Integration tests for curriculum grouping and tag navigation

use curriculum_tags::core::models::{CurriculumTable, DaySpec, SubtopicSpec, Tag};
use curriculum_tags::core::models::tag::day_number;
use curriculum_tags::core::sequencer::{
    build_indices, first_tag, last_tag, neighbors, sequence, CurriculumIndices,
};

const SAMPLE: &str = "samples/curriculum/tester_curriculum.json";

fn math_x() -> CurriculumTable {
    CurriculumTable::from_payload_str(
        r#"{"curriculumTable": {"mathX": {
            "d1": {"Topics": "Algebra", "SubTopics": [
                {"title": "A", "tag": "Day-1:1", "status": true},
                {"title": "B", "tag": "Day-1:2", "status": false}]},
            "d2": {"Topics": "Geometry", "SubTopics": [
                {"title": "C", "tag": "Day-2:1", "status": false}]}
        }}}"#,
    )
    .expect("payload should parse")
}

fn sample(subject: &str) -> CurriculumIndices {
    let table = CurriculumTable::from_file(SAMPLE).expect("sample payload should parse");
    build_indices(&table, subject)
}

fn tag_strings(tags: &[Tag]) -> Vec<String> {
    tags.iter().map(ToString::to_string).collect()
}

#[test]
fn test_end_to_end_scenario() {
    let indices = build_indices(&math_x(), "mathX");

    assert_eq!(indices.tag_count_per_day.len(), 2);
    assert_eq!(indices.tag_count_per_day.get("day-1"), Some(&2));
    assert_eq!(indices.tag_count_per_day.get("day-2"), Some(&1));

    let n = neighbors("Day-1:2", &indices);
    assert_eq!(n.next, Some(Tag::new(2, 1)));
    assert_eq!(n.prev, Some(Tag::new(1, 1)));

    let n = neighbors("Day-2:1", &indices);
    assert_eq!(n.next, None);
    assert_eq!(n.prev, Some(Tag::new(1, 2)));

    assert_eq!(indices.topic_for("day-2:1"), Some("Geometry"));
}

#[test]
fn test_empty_subject_yields_empty_structures() {
    let table = math_x();
    let indices = build_indices(&table, "history");
    assert!(indices.grouped_by_day.is_empty());
    assert!(indices.tag_count_per_day.is_empty());
    assert!(indices.tag_to_topic.is_empty());

    let indices = build_indices(&CurriculumTable::new(), "mathX");
    assert!(indices.is_empty());
}

#[test]
fn test_groups_are_strictly_ascending() {
    let indices = sample("python");
    let numbers: Vec<u32> = indices
        .grouped_by_day
        .iter()
        .map(|g| day_number(&g.day_order))
        .collect();
    assert_eq!(numbers, vec![2, 5, 10]);
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_sample_counts_sum_topics_and_skip_incomplete() {
    let indices = sample("python");

    assert_eq!(indices.tag_count(2), 3, "Variables + Operators share day 2");
    assert_eq!(indices.tag_count(5), 2, "untitled subtopic is not counted");
    assert_eq!(indices.tag_count(10), 2);
    assert_eq!(indices.tag_to_topic.len(), 7);
    assert_eq!(indices.topic_for("Day-2:3"), Some("Operators"));
    assert_eq!(indices.group("Day-2").map(|g| g.rows.len()), Some(2));
}

#[test]
fn test_same_day_inverse_consistency() {
    let indices = sample("python");
    for tag in sequence(&indices) {
        let n = neighbors(&tag.to_string(), &indices);
        if let Some(next) = n.next {
            if next.day == tag.day {
                assert_eq!(
                    neighbors(&next.to_string(), &indices).prev,
                    Some(tag),
                    "prev of {next} should be {tag}"
                );
            }
        }
    }
}

#[test]
fn test_sequence_boundaries() {
    let indices = sample("python");
    let first = first_tag(&indices).expect("has a first tag");
    let last = last_tag(&indices).expect("has a last tag");

    assert_eq!(first, Tag::new(2, 1));
    assert_eq!(last, Tag::new(10, 2));
    assert_eq!(neighbors(&first.to_string(), &indices).prev, None);
    assert_eq!(neighbors(&last.to_string(), &indices).next, None);
}

#[test]
fn test_full_sequence_crosses_missing_days() {
    let indices = sample("python");
    assert_eq!(
        tag_strings(&sequence(&indices)),
        vec!["Day-2:1", "Day-2:2", "Day-2:3", "Day-5:1", "Day-5:2", "Day-10:1", "Day-10:2"]
    );
}

#[test]
fn test_tag_without_day_marker_has_no_neighbors() {
    let indices = build_indices(&math_x(), "mathX");
    for raw in ["", "Intro", "Week-1:1", "1:2"] {
        let n = neighbors(raw, &indices);
        assert_eq!(n.next, None, "{raw}");
        assert_eq!(n.prev, None, "{raw}");
    }
}

#[test]
fn test_navigation_is_case_insensitive() {
    let indices = build_indices(&math_x(), "mathX");
    assert_eq!(neighbors("DAY-1:1", &indices).next, Some(Tag::new(1, 2)));
}

#[test]
fn test_subtopics_missing_fields_do_not_count() {
    let mut table = CurriculumTable::new();
    table.insert_day(
        "bio",
        "d1",
        DaySpec::new(
            "Cells",
            vec![
                SubtopicSpec::new("Membrane", "Day-1:1", true),
                SubtopicSpec {
                    title: Some("Nucleus".to_string()),
                    tag: None,
                    status: false,
                },
                SubtopicSpec {
                    title: None,
                    tag: Some("Day-1:3".to_string()),
                    status: false,
                },
            ],
        ),
    );

    let indices = build_indices(&table, "bio");
    assert_eq!(indices.tag_count(1), 1);
    assert_eq!(indices.tag_to_topic.len(), 1);
    assert_eq!(indices.topic_for("Day-1:3"), None);
}
