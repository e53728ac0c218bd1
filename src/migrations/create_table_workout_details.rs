use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("workout_details")
        .id(|c| c("id", Type::Int))
        .column(|c| c("workout_session_id", Type::Int))
        .column(|c| c("detail_name", Type::String))
        .column(|c| c("detail_value", Type::String));
    Ok(MigrationStep::new("create_table_workout_details", m))
}
