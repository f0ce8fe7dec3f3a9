use fittrack_core::{CsvWorkoutStore, StoreError, User, Workout, WorkoutStore};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_data_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn user_with_two_workouts() -> User {
    let mut user = User::new("Ana", 30, 62.5).unwrap();
    user.add_workout(Workout::new("2024-01-01", "Run", 30, 300).unwrap());
    user.add_workout(Workout::new("2024-01-02", "Swim", 45, 400).unwrap());
    user
}

#[test]
fn save_then_load_into_fresh_user_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "ana_workouts.csv");
    let store = CsvWorkoutStore::new();

    let user = user_with_two_workouts();
    store.save(&user, &path).unwrap();

    let mut reloaded = User::new("Ana", 30, 62.5).unwrap();
    let appended = store.load(&mut reloaded, &path).unwrap();

    assert_eq!(appended, 2);
    assert_eq!(reloaded.workouts(), user.workouts());
}

#[test]
fn save_writes_header_row_with_table_labels() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "ana_workouts.csv");
    let store = CsvWorkoutStore::new();

    store.save(&user_with_two_workouts(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Exercise Type,Duration (min),Calories Burned")
    );
    assert_eq!(lines.next(), Some("2024-01-01,Run,30,300"));
    assert_eq!(lines.next(), Some("2024-01-02,Swim,45,400"));
    assert_eq!(lines.next(), None);
}

#[test]
fn save_empty_log_produces_header_only_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "empty_workouts.csv");
    let store = CsvWorkoutStore::new();

    let user = User::new("Ana", 30, 62.5).unwrap();
    store.save(&user, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content.trim_end(),
        "Date,Exercise Type,Duration (min),Calories Burned"
    );

    let mut reloaded = User::new("Ana", 30, 62.5).unwrap();
    assert_eq!(store.load(&mut reloaded, &path).unwrap(), 0);
    assert!(reloaded.workouts().is_empty());
}

#[test]
fn save_overwrites_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "ana_workouts.csv");
    let store = CsvWorkoutStore::new();

    store.save(&user_with_two_workouts(), &path).unwrap();

    let mut shorter = User::new("Ana", 30, 62.5).unwrap();
    shorter.add_workout(Workout::new("2024-02-01", "Row", 20, 180).unwrap());
    store.save(&shorter, &path).unwrap();

    let mut reloaded = User::new("Ana", 30, 62.5).unwrap();
    assert_eq!(store.load(&mut reloaded, &path).unwrap(), 1);
    assert_eq!(reloaded.workouts()[0].exercise_type, "Row");
}

#[test]
fn load_appends_after_existing_workouts() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "ana_workouts.csv");
    let store = CsvWorkoutStore::new();

    store.save(&user_with_two_workouts(), &path).unwrap();

    let mut user = User::new("Ana", 30, 62.5).unwrap();
    user.add_workout(Workout::new("2023-12-31", "Hike", 90, 600).unwrap());
    store.load(&mut user, &path).unwrap();

    let dates: Vec<&str> = user.workouts().iter().map(|w| w.date.as_str()).collect();
    assert_eq!(dates, ["2023-12-31", "2024-01-01", "2024-01-02"]);
}

#[test]
fn round_trip_preserves_embedded_delimiters_via_quoting() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "quoted_workouts.csv");
    let store = CsvWorkoutStore::new();

    let mut user = User::new("Ana", 30, 62.5).unwrap();
    user.add_workout(Workout::new("2024-01-01", "Run, intervals", 30, 300).unwrap());
    store.save(&user, &path).unwrap();

    let mut reloaded = User::new("Ana", 30, 62.5).unwrap();
    store.load(&mut reloaded, &path).unwrap();
    assert_eq!(reloaded.workouts()[0].exercise_type, "Run, intervals");
}

#[test]
fn load_nonexistent_path_fails_with_io() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "missing.csv");
    let store = CsvWorkoutStore::new();

    let mut user = User::new("Ana", 30, 62.5).unwrap();
    let err = store.load(&mut user, &path).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)), "unexpected error: {err}");
    assert!(user.workouts().is_empty());
}

#[test]
fn load_non_integer_duration_fails_fast_with_parse() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "bad_duration.csv");
    let store = CsvWorkoutStore::new();

    std::fs::write(
        &path,
        "Date,Exercise Type,Duration (min),Calories Burned\n\
         2024-01-01,Run,30,300\n\
         2024-01-02,Swim,forty-five,400\n\
         2024-01-03,Bike,60,500\n",
    )
    .unwrap();

    let mut user = User::new("Ana", 30, 62.5).unwrap();
    user.add_workout(Workout::new("2023-12-31", "Hike", 90, 600).unwrap());
    let before = user.workouts().to_vec();

    let err = store.load(&mut user, &path).unwrap_err();
    assert!(
        matches!(err, StoreError::Parse { line: 3, .. }),
        "unexpected error: {err}"
    );
    // Fail-fast: not even the rows before the bad one are appended.
    assert_eq!(user.workouts(), before.as_slice());
}

#[test]
fn load_wrong_column_count_fails_with_parse() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "short_row.csv");
    let store = CsvWorkoutStore::new();

    std::fs::write(
        &path,
        "Date,Exercise Type,Duration (min),Calories Burned\n\
         2024-01-01,Run,30\n",
    )
    .unwrap();

    let mut user = User::new("Ana", 30, 62.5).unwrap();
    let err = store.load(&mut user, &path).unwrap_err();
    assert!(
        matches!(err, StoreError::Parse { .. }),
        "unexpected error: {err}"
    );
    assert!(user.workouts().is_empty());
}

#[test]
fn load_zero_calories_row_fails_with_invalid() {
    let dir = TempDir::new().unwrap();
    let path = temp_data_path(&dir, "zero_calories.csv");
    let store = CsvWorkoutStore::new();

    std::fs::write(
        &path,
        "Date,Exercise Type,Duration (min),Calories Burned\n\
         2024-01-01,Stretch,10,0\n",
    )
    .unwrap();

    let mut user = User::new("Ana", 30, 62.5).unwrap();
    let err = store.load(&mut user, &path).unwrap_err();
    assert!(
        matches!(err, StoreError::Invalid { line: 2, .. }),
        "unexpected error: {err}"
    );
    assert!(user.workouts().is_empty());
}
