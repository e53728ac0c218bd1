use axum::async_trait;
use welds::connections::any::AnyClient;
use welds::prelude::DbState;

use crate::domain::{WorkoutStoreError, WorkoutType, WorkoutTypeModel, WorkoutTypeStore};

pub struct SqlWorkoutTypeStore {
    client: AnyClient,
}

impl SqlWorkoutTypeStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    fn to_domain(model: &WorkoutTypeModel) -> WorkoutType {
        WorkoutType {
            id: model.id,
            name: model.name.clone(),
            muscle_group_id: model.muscle_group_id,
        }
    }

    async fn fetch(&self, id: i32) -> Result<DbState<WorkoutTypeModel>, WorkoutStoreError> {
        WorkoutTypeModel::find_by_id(&self.client, id)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?
            .ok_or(WorkoutStoreError::NotFound)
    }
}

#[async_trait]
impl WorkoutTypeStore for SqlWorkoutTypeStore {
    async fn add(
        &mut self,
        name: String,
        muscle_group_id: i32,
    ) -> Result<WorkoutType, WorkoutStoreError> {
        let mut model = WorkoutTypeModel::new();
        model.name = name;
        model.muscle_group_id = muscle_group_id;
        model
            .save(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(Self::to_domain(&model))
    }

    async fn get_by_id(&self, id: i32) -> Result<WorkoutType, WorkoutStoreError> {
        let model = self.fetch(id).await?;
        Ok(Self::to_domain(&model))
    }

    async fn update(
        &mut self,
        id: i32,
        name: Option<String>,
        muscle_group_id: Option<i32>,
    ) -> Result<WorkoutType, WorkoutStoreError> {
        let mut model = self.fetch(id).await?;
        if let Some(name) = name {
            model.name = name;
        }
        if let Some(muscle_group_id) = muscle_group_id {
            model.muscle_group_id = muscle_group_id;
        }
        model
            .save(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
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

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<WorkoutType>, WorkoutStoreError> {
        let models = WorkoutTypeModel::all()
            .limit(limit)
            .offset(offset)
            .run(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(models.iter().map(|m| Self::to_domain(m)).collect())
    }
}
