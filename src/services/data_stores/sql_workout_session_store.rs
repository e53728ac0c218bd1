use axum::async_trait;
use welds::connections::any::AnyClient;
use welds::prelude::DbState;

use crate::domain::{WorkoutSession, WorkoutSessionModel, WorkoutSessionStore, WorkoutStoreError};

pub struct SqlWorkoutSessionStore {
    client: AnyClient,
}

impl SqlWorkoutSessionStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    fn to_domain(model: &WorkoutSessionModel) -> WorkoutSession {
        WorkoutSession {
            id: model.id,
            user_id: model.user_id,
            workout_type_id: model.workout_type_id,
            datetime: model.datetime,
        }
    }

    async fn fetch(&self, id: i32) -> Result<DbState<WorkoutSessionModel>, WorkoutStoreError> {
        WorkoutSessionModel::find_by_id(&self.client, id)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?
            .ok_or(WorkoutStoreError::NotFound)
    }
}

#[async_trait]
impl WorkoutSessionStore for SqlWorkoutSessionStore {
    async fn add(
        &mut self,
        user_id: i32,
        workout_type_id: i32,
        datetime: i64,
    ) -> Result<WorkoutSession, WorkoutStoreError> {
        let mut model = WorkoutSessionModel::new();
        model.user_id = user_id;
        model.workout_type_id = workout_type_id;
        model.datetime = datetime;
        model
            .save(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(Self::to_domain(&model))
    }

    async fn get_by_id(&self, id: i32) -> Result<WorkoutSession, WorkoutStoreError> {
        let model = self.fetch(id).await?;
        Ok(Self::to_domain(&model))
    }

    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError> {
        let mut model = self.fetch(id).await?;
        model
            .delete(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WorkoutSession>, WorkoutStoreError> {
        let models = WorkoutSessionModel::where_col(|s| s.user_id.equal(user_id))
            .order_by_desc(|s| s.datetime)
            .limit(limit)
            .offset(offset)
            .run(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(models.iter().map(|m| Self::to_domain(m)).collect())
    }
}
