use welds::prelude::*;

#[derive(WeldsModel)]
#[welds(table = "workout_sessions")]
pub struct WorkoutSessionModel {
    #[welds(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub workout_type_id: i32,
    pub datetime: i64,
}
