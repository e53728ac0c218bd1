use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("workout_types")
        .id(|c| c("id", Type::Int))
        .column(|c| c("name", Type::String))
        .column(|c| c("muscle_group_id", Type::Int));
    Ok(MigrationStep::new("create_table_workout_types", m))
}
