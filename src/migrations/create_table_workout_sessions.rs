use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("workout_sessions")
        .id(|c| c("id", Type::Int))
        .column(|c| c("user_id", Type::Int))
        .column(|c| c("workout_type_id", Type::Int))
        .column(|c| c("datetime", Type::IntBig));
    Ok(MigrationStep::new("create_table_workout_sessions", m))
}
