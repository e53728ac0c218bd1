use axum::async_trait;
use welds::connections::any::AnyClient;

use crate::domain::{WorkoutDetail, WorkoutDetailModel, WorkoutDetailStore, WorkoutStoreError};

pub struct SqlWorkoutDetailStore {
    client: AnyClient,
}

impl SqlWorkoutDetailStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    fn to_domain(model: &WorkoutDetailModel) -> WorkoutDetail {
        WorkoutDetail {
            id: model.id,
            workout_session_id: model.workout_session_id,
            detail_name: model.detail_name.clone(),
            detail_value: model.detail_value.clone(),
        }
    }
}

#[async_trait]
impl WorkoutDetailStore for SqlWorkoutDetailStore {
    async fn add(
        &mut self,
        workout_session_id: i32,
        detail_name: String,
        detail_value: String,
    ) -> Result<WorkoutDetail, WorkoutStoreError> {
        let mut model = WorkoutDetailModel::new();
        model.workout_session_id = workout_session_id;
        model.detail_name = detail_name;
        model.detail_value = detail_value;
        model
            .save(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(Self::to_domain(&model))
    }

    async fn list_by_session(
        &self,
        workout_session_id: i32,
    ) -> Result<Vec<WorkoutDetail>, WorkoutStoreError> {
        let models = WorkoutDetailModel::where_col(|d| d.workout_session_id.equal(workout_session_id))
            .run(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(models.iter().map(|m| Self::to_domain(m)).collect())
    }
}
