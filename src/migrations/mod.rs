use welds::errors::Result;
use welds::migrations::prelude::*;

pub async fn up(client: &dyn welds::TransactStart) -> Result<()> {
    let list: Vec<MigrationFn> = vec![
        create_table_users::step,
        create_table_muscle_groups::step,
        create_table_workout_types::step,
        create_table_workout_sessions::step,
        create_table_workout_details::step,
    ];
    welds::migrations::up(client, list.as_slice()).await?;
    Ok(())
}

mod create_table_muscle_groups;
mod create_table_users;
mod create_table_workout_details;
mod create_table_workout_sessions;
mod create_table_workout_types;
