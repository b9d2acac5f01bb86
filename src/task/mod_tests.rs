use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::clock::ManualClock;
use crate::task::models::{Survey, UploadedFile};
use crate::task::store::{TaskStore, DEFAULT_PROCESSING_WINDOW_MS};
use crate::task::TaskError;

fn test_clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
}

fn test_store(clock: &ManualClock) -> TaskStore {
    TaskStore::with_default_window(Arc::new(clock.clone()))
}

fn sample_files(count: usize) -> Vec<UploadedFile> {
    (0..count)
        .map(|n| UploadedFile {
            id: Uuid::new_v4(),
            filename: format!("drawing_{n}.png"),
            size: 1024 * (n + 1),
        })
        .collect()
}

#[test]
fn test_create_with_three_files() {
    let clock = test_clock();
    let store = test_store(&clock);

    let id = store.create(sample_files(3)).unwrap();
    let task = store.get(id).unwrap();

    assert_eq!(task.id, id);
    assert_eq!(task.files.len(), 3);
    assert!(task.survey.is_none());
    assert_eq!(task.created_at, clock_now(&clock));
}

fn clock_now(clock: &ManualClock) -> chrono::DateTime<Utc> {
    use crate::clock::Clock;
    clock.now()
}

#[test]
fn test_create_rejects_wrong_file_count() {
    let clock = test_clock();
    let store = test_store(&clock);

    for count in [0, 1, 2, 4, 7] {
        let err = store.create(sample_files(count)).unwrap_err();
        assert_eq!(
            err,
            TaskError::InvalidUploadCount {
                expected: 3,
                actual: count
            }
        );
    }
}

#[test]
fn test_attach_survey_unknown_task() {
    let clock = test_clock();
    let store = test_store(&clock);

    let unknown = Uuid::new_v4();
    let err = store.attach_survey(unknown, Survey::default()).unwrap_err();
    assert_eq!(err, TaskError::TaskNotFound(unknown));
}

#[test]
fn test_attach_survey_last_write_wins() {
    let clock = test_clock();
    let store = test_store(&clock);
    let id = store.create(sample_files(3)).unwrap();

    let mut first = Survey::default();
    first.child_name = Some("Первый".to_string());
    store.attach_survey(id, first).unwrap();

    let mut second = Survey::default();
    second.child_name = Some("Второй".to_string());
    second.answers.insert("q1_1".to_string(), "Часто".to_string());
    store.attach_survey(id, second).unwrap();

    let task = store.get(id).unwrap();
    let survey = task.survey.unwrap();
    assert_eq!(survey.child_name.as_deref(), Some("Второй"));
    assert_eq!(survey.answers.get("q1_1").map(String::as_str), Some("Часто"));
    // Files are untouched by survey submission.
    assert_eq!(task.files.len(), 3);
}

#[test]
fn test_readiness_boundary() {
    let clock = test_clock();
    let store = test_store(&clock);
    let id = store.create(sample_files(3)).unwrap();

    assert!(!store.is_ready(id).unwrap());

    clock.advance(Duration::milliseconds(DEFAULT_PROCESSING_WINDOW_MS - 1));
    assert!(!store.is_ready(id).unwrap());

    clock.advance(Duration::milliseconds(1));
    assert!(store.is_ready(id).unwrap());

    clock.advance(Duration::seconds(3600));
    assert!(store.is_ready(id).unwrap());
}

#[test]
fn test_is_ready_unknown_task() {
    let clock = test_clock();
    let store = test_store(&clock);

    let unknown = Uuid::new_v4();
    assert_eq!(
        store.is_ready(unknown).unwrap_err(),
        TaskError::TaskNotFound(unknown)
    );
}

#[test]
fn test_get_ready_gates_on_window() {
    let clock = test_clock();
    let store = test_store(&clock);
    let id = store.create(sample_files(3)).unwrap();

    assert_eq!(store.get_ready(id).unwrap_err(), TaskError::NotReady(id));

    clock.advance(Duration::milliseconds(DEFAULT_PROCESSING_WINDOW_MS));
    let task = store.get_ready(id).unwrap();
    assert_eq!(task.id, id);
}

#[test]
fn test_get_ready_unknown_beats_not_ready() {
    let clock = test_clock();
    let store = test_store(&clock);

    // An unknown id fails with TaskNotFound regardless of elapsed time.
    let unknown = Uuid::new_v4();
    assert_eq!(
        store.get_ready(unknown).unwrap_err(),
        TaskError::TaskNotFound(unknown)
    );
    clock.advance(Duration::seconds(60));
    assert_eq!(
        store.get_ready(unknown).unwrap_err(),
        TaskError::TaskNotFound(unknown)
    );
}

#[test]
fn test_survey_deserializes_flat_answer_map() {
    let raw = r#"{
        "childName": "Алиса",
        "childDOB": "14.03.2019",
        "childGender": "male",
        "q1_1": "Часто",
        "q5_5": "Всегда"
    }"#;

    let survey: Survey = serde_json::from_str(raw).unwrap();
    assert_eq!(survey.child_name.as_deref(), Some("Алиса"));
    assert_eq!(survey.child_dob.as_deref(), Some("14.03.2019"));
    assert_eq!(survey.child_gender.as_deref(), Some("male"));
    assert_eq!(survey.answers.get("q1_1").map(String::as_str), Some("Часто"));
    assert_eq!(survey.answers.get("q5_5").map(String::as_str), Some("Всегда"));
    assert!(!survey.answers.contains_key("childName"));
}
