/// A primary muscle group targeted by a workout (e.g. "Chest").
#[derive(PartialEq, Debug, Clone)]
pub struct MuscleGroup {
    pub id: i32,
    pub name: String,
}

/// A particular kind of workout (e.g. "Bench Press") and the muscle group it
/// trains.
#[derive(PartialEq, Debug, Clone)]
pub struct WorkoutType {
    pub id: i32,
    pub name: String,
    pub muscle_group_id: i32,
}

/// A log entry for a completed workout performed by a user. `datetime` is
/// stored as epoch seconds.
#[derive(PartialEq, Debug, Clone)]
pub struct WorkoutSession {
    pub id: i32,
    pub user_id: i32,
    pub workout_type_id: i32,
    pub datetime: i64,
}

/// Arbitrary key-value data point attached to a session (e.g. reps, weight).
#[derive(PartialEq, Debug, Clone)]
pub struct WorkoutDetail {
    pub id: i32,
    pub workout_session_id: i32,
    pub detail_name: String,
    pub detail_value: String,
}
