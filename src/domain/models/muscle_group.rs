use welds::prelude::*;

#[derive(WeldsModel)]
#[welds(table = "muscle_groups")]
pub struct MuscleGroupModel {
    #[welds(primary_key)]
    pub id: i32,
    pub name: String,
}
