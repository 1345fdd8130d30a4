use super::*;
use crate::error::DraftError;
use std::collections::BTreeMap;

#[test]
fn default_config_has_no_header() {
    let config = Config::default();
    assert_eq!(config.preamble, "default");
    assert!(config.header.is_none());
    assert!(!config.multiple_exercises);
    assert!(!config.unique_exercise_placeholders);
    assert!(config.draft_exercises.is_none());
    assert!(config.placeholders.is_empty());
    assert_eq!(config.templates, std::path::PathBuf::from("templates"));
}

#[test]
fn parses_kebab_case_keys() {
    let yaml = r#"
preamble: default
header: worksheet
multiple-exercises: true
unique-exercise-placeholders: true
draft-exercises:
  intervals:
    path: templates/exercises/intervals.tex
    count: 2
placeholders:
  course: Harmony I
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.header.as_deref(), Some("worksheet"));
    assert!(config.multiple_exercises);
    assert!(config.unique_exercise_placeholders);

    let exercises = config.exercise_selection().unwrap();
    assert_eq!(exercises["intervals"].count, 2);
    assert_eq!(
        config.placeholders.get("course"),
        Some(&"Harmony I".to_string())
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let yaml = r#"
header: worksheet
some-future-key: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.header.as_deref(), Some("worksheet"));
}

#[test]
fn null_header_parses_as_none() {
    let config = Config::from_yaml("header: null\n").unwrap();
    assert!(config.header.is_none());
}

#[test]
fn zero_count_fails_validation() {
    let yaml = r#"
header: worksheet
draft-exercises:
  intervals:
    path: templates/exercises/intervals.tex
    count: 0
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, DraftError::ConfigError(_)));
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn empty_preamble_fails_validation() {
    let err = Config::from_yaml("preamble: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("preamble"));
}

#[test]
fn empty_header_fails_validation() {
    let err = Config::from_yaml("header: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("header"));
}

#[test]
fn invalid_yaml_is_a_config_error() {
    let err = Config::from_yaml("header: [unclosed\n").unwrap_err();
    assert!(matches!(err, DraftError::ConfigError(_)));
}

#[test]
fn apply_exercise_selection_sets_once() {
    let mut config = Config::default();
    let mut selection = BTreeMap::new();
    selection.insert(
        "intervals".to_string(),
        ExerciseSelection::single("templates/exercises/intervals.tex"),
    );

    config.apply_exercise_selection(selection.clone()).unwrap();
    assert_eq!(config.exercise_selection(), Some(&selection));

    // A second application is rejected.
    let err = config.apply_exercise_selection(selection).unwrap_err();
    assert!(err.to_string().contains("already applied"));
}

#[test]
fn apply_exercise_selection_validates_counts() {
    let mut config = Config::default();
    let mut selection = BTreeMap::new();
    selection.insert(
        "intervals".to_string(),
        ExerciseSelection {
            path: "templates/exercises/intervals.tex".into(),
            count: 0,
        },
    );

    let err = config.apply_exercise_selection(selection).unwrap_err();
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn exercise_count_defaults_to_one_for_unknown_names() {
    let config = Config::default();
    assert_eq!(config.exercise_count("anything"), 1);
}

#[test]
fn exercise_count_reads_the_selection() {
    let yaml = r#"
draft-exercises:
  intervals:
    path: templates/exercises/intervals.tex
    count: 3
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.exercise_count("intervals"), 3);
    assert_eq!(config.exercise_count("chords"), 1);
}
