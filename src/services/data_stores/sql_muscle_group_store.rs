use axum::async_trait;
use welds::connections::any::AnyClient;
use welds::prelude::DbState;

use crate::domain::{MuscleGroup, MuscleGroupModel, MuscleGroupStore, WorkoutStoreError};

pub struct SqlMuscleGroupStore {
    client: AnyClient,
}

impl SqlMuscleGroupStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    fn to_domain(model: &MuscleGroupModel) -> MuscleGroup {
        MuscleGroup {
            id: model.id,
            name: model.name.clone(),
        }
    }

    async fn fetch(&self, id: i32) -> Result<DbState<MuscleGroupModel>, WorkoutStoreError> {
        MuscleGroupModel::find_by_id(&self.client, id)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?
            .ok_or(WorkoutStoreError::NotFound)
    }
}

#[async_trait]
impl MuscleGroupStore for SqlMuscleGroupStore {
    async fn add(&mut self, name: String) -> Result<MuscleGroup, WorkoutStoreError> {
        let mut model = MuscleGroupModel::new();
        model.name = name;
        model
            .save(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(Self::to_domain(&model))
    }

    async fn get_by_id(&self, id: i32) -> Result<MuscleGroup, WorkoutStoreError> {
        let model = self.fetch(id).await?;
        Ok(Self::to_domain(&model))
    }

    async fn update(&mut self, id: i32, name: String) -> Result<MuscleGroup, WorkoutStoreError> {
        let mut model = self.fetch(id).await?;
        model.name = name;
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

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<MuscleGroup>, WorkoutStoreError> {
        let models = MuscleGroupModel::all()
            .limit(limit)
            .offset(offset)
            .run(&self.client)
            .await
            .map_err(|e| WorkoutStoreError::DatabaseError(e.to_string()))?;
        Ok(models.iter().map(|m| Self::to_domain(m)).collect())
    }
}
