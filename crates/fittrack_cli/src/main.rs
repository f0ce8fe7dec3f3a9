//! CLI smoke front-end.
//!
//! # Responsibility
//! - Exercise the full core capability interface (add, tabulate, save, load)
//!   from one minimal executable, standing in for the richer UI front-ends.
//! - Keep output deterministic for quick local sanity checks.

use fittrack_core::{
    core_version, default_log_level, init_logging, CsvWorkoutStore, TrackerService, User, Workout,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("fittrack_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    println!("fittrack_core version={}", core_version());

    let log_dir = std::env::temp_dir().join("fittrack-cli-logs");
    if let Err(message) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // Logging is best-effort for the smoke probe; the core works without it.
        eprintln!("logging unavailable: {message}");
    }

    let service = TrackerService::new(CsvWorkoutStore::new());
    let mut user = User::new("Ana", 30, 62.5).map_err(|err| err.to_string())?;
    service.add_workout(
        &mut user,
        Workout::new("2024-01-01", "Run", 30, 300).map_err(|err| err.to_string())?,
    );
    service.add_workout(
        &mut user,
        Workout::new("2024-01-02", "Swim", 45, 400).map_err(|err| err.to_string())?,
    );

    println!("workout history for {}:", user.name);
    for row in service.workout_table(&user) {
        println!(
            "  {} | {} | {} min | {} kcal",
            row.date, row.exercise_type, row.duration_min, row.calories_burned
        );
    }

    let path = std::env::temp_dir().join(user.default_data_filename());
    service
        .save_workouts(&user, &path)
        .map_err(|err| err.to_string())?;
    println!("saved {} workouts to {}", user.workouts().len(), path.display());

    let mut reloaded = User::new("Ana", 30, 62.5).map_err(|err| err.to_string())?;
    let appended = service
        .load_workouts(&mut reloaded, &path)
        .map_err(|err| err.to_string())?;
    println!("reloaded {appended} workouts");

    Ok(())
}
