use welds::prelude::*;

#[derive(WeldsModel)]
#[welds(table = "workout_details")]
pub struct WorkoutDetailModel {
    #[welds(primary_key)]
    pub id: i32,
    pub workout_session_id: i32,
    pub detail_name: String,
    pub detail_value: String,
}
