use super::WorkoutStoreError;
use crate::domain::{MuscleGroup, WorkoutDetail, WorkoutSession, WorkoutType};

#[async_trait::async_trait]
pub trait MuscleGroupStore: Send + Sync {
    async fn add(&mut self, name: String) -> Result<MuscleGroup, WorkoutStoreError>;
    async fn get_by_id(&self, id: i32) -> Result<MuscleGroup, WorkoutStoreError>;
    async fn update(&mut self, id: i32, name: String) -> Result<MuscleGroup, WorkoutStoreError>;
    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<MuscleGroup>, WorkoutStoreError>;
}

#[async_trait::async_trait]
pub trait WorkoutTypeStore: Send + Sync {
    async fn add(&mut self, name: String, muscle_group_id: i32)
        -> Result<WorkoutType, WorkoutStoreError>;
    async fn get_by_id(&self, id: i32) -> Result<WorkoutType, WorkoutStoreError>;
    async fn update(
        &mut self,
        id: i32,
        name: Option<String>,
        muscle_group_id: Option<i32>,
    ) -> Result<WorkoutType, WorkoutStoreError>;
    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<WorkoutType>, WorkoutStoreError>;
}

#[async_trait::async_trait]
pub trait WorkoutSessionStore: Send + Sync {
    async fn add(
        &mut self,
        user_id: i32,
        workout_type_id: i32,
        datetime: i64,
    ) -> Result<WorkoutSession, WorkoutStoreError>;
    async fn get_by_id(&self, id: i32) -> Result<WorkoutSession, WorkoutStoreError>;
    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError>;

    /// Sessions for one user, newest first.
    async fn list_by_user(
        &self,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WorkoutSession>, WorkoutStoreError>;
}

#[async_trait::async_trait]
pub trait WorkoutDetailStore: Send + Sync {
    async fn add(
        &mut self,
        workout_session_id: i32,
        detail_name: String,
        detail_value: String,
    ) -> Result<WorkoutDetail, WorkoutStoreError>;
    async fn list_by_session(
        &self,
        workout_session_id: i32,
    ) -> Result<Vec<WorkoutDetail>, WorkoutStoreError>;
}
