//! Integration smoke tests for `curriculum_tags`

use curriculum_tags::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_payload_parses() {
    let table = curriculum_tags::core::models::CurriculumTable::from_file(
        "samples/curriculum/tester_curriculum.json",
    )
    .expect("sample payload should parse");
    assert_eq!(table.subjects().collect::<Vec<_>>(), vec!["mathX", "python"]);
}
