use welds::prelude::*;

#[derive(WeldsModel)]
#[welds(table = "workout_types")]
pub struct WorkoutTypeModel {
    #[welds(primary_key)]
    pub id: i32,
    pub name: String,
    pub muscle_group_id: i32,
}
