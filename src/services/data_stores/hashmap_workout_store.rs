use std::collections::HashMap;

use axum::async_trait;

use crate::domain::{
    MuscleGroup, MuscleGroupStore, WorkoutDetail, WorkoutDetailStore, WorkoutSession,
    WorkoutSessionStore, WorkoutStoreError, WorkoutType, WorkoutTypeStore,
};

// In-memory counterparts of the SQL workout stores, for tests and local runs.

#[derive(Default)]
pub struct HashmapMuscleGroupStore {
    groups: HashMap<i32, MuscleGroup>,
    next_id: i32,
}

#[async_trait]
impl MuscleGroupStore for HashmapMuscleGroupStore {
    async fn add(&mut self, name: String) -> Result<MuscleGroup, WorkoutStoreError> {
        self.next_id += 1;
        let group = MuscleGroup {
            id: self.next_id,
            name,
        };
        self.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn get_by_id(&self, id: i32) -> Result<MuscleGroup, WorkoutStoreError> {
        self.groups.get(&id).cloned().ok_or(WorkoutStoreError::NotFound)
    }

    async fn update(&mut self, id: i32, name: String) -> Result<MuscleGroup, WorkoutStoreError> {
        let group = self.groups.get_mut(&id).ok_or(WorkoutStoreError::NotFound)?;
        group.name = name;
        Ok(group.clone())
    }

    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError> {
        self.groups.remove(&id).map(|_| ()).ok_or(WorkoutStoreError::NotFound)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<MuscleGroup>, WorkoutStoreError> {
        let mut groups: Vec<MuscleGroup> = self.groups.values().cloned().collect();
        groups.sort_by_key(|g| g.id);
        Ok(page(groups, limit, offset))
    }
}

#[derive(Default)]
pub struct HashmapWorkoutTypeStore {
    types: HashMap<i32, WorkoutType>,
    next_id: i32,
}

#[async_trait]
impl WorkoutTypeStore for HashmapWorkoutTypeStore {
    async fn add(
        &mut self,
        name: String,
        muscle_group_id: i32,
    ) -> Result<WorkoutType, WorkoutStoreError> {
        self.next_id += 1;
        let wt = WorkoutType {
            id: self.next_id,
            name,
            muscle_group_id,
        };
        self.types.insert(wt.id, wt.clone());
        Ok(wt)
    }

    async fn get_by_id(&self, id: i32) -> Result<WorkoutType, WorkoutStoreError> {
        self.types.get(&id).cloned().ok_or(WorkoutStoreError::NotFound)
    }

    async fn update(
        &mut self,
        id: i32,
        name: Option<String>,
        muscle_group_id: Option<i32>,
    ) -> Result<WorkoutType, WorkoutStoreError> {
        let wt = self.types.get_mut(&id).ok_or(WorkoutStoreError::NotFound)?;
        if let Some(name) = name {
            wt.name = name;
        }
        if let Some(muscle_group_id) = muscle_group_id {
            wt.muscle_group_id = muscle_group_id;
        }
        Ok(wt.clone())
    }

    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError> {
        self.types.remove(&id).map(|_| ()).ok_or(WorkoutStoreError::NotFound)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<WorkoutType>, WorkoutStoreError> {
        let mut types: Vec<WorkoutType> = self.types.values().cloned().collect();
        types.sort_by_key(|t| t.id);
        Ok(page(types, limit, offset))
    }
}

#[derive(Default)]
pub struct HashmapWorkoutSessionStore {
    sessions: HashMap<i32, WorkoutSession>,
    next_id: i32,
}

#[async_trait]
impl WorkoutSessionStore for HashmapWorkoutSessionStore {
    async fn add(
        &mut self,
        user_id: i32,
        workout_type_id: i32,
        datetime: i64,
    ) -> Result<WorkoutSession, WorkoutStoreError> {
        self.next_id += 1;
        let session = WorkoutSession {
            id: self.next_id,
            user_id,
            workout_type_id,
            datetime,
        };
        self.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_by_id(&self, id: i32) -> Result<WorkoutSession, WorkoutStoreError> {
        self.sessions.get(&id).cloned().ok_or(WorkoutStoreError::NotFound)
    }

    async fn delete(&mut self, id: i32) -> Result<(), WorkoutStoreError> {
        self.sessions.remove(&id).map(|_| ()).ok_or(WorkoutStoreError::NotFound)
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WorkoutSession>, WorkoutStoreError> {
        let mut sessions: Vec<WorkoutSession> = self
            .sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        // Newest first, like the SQL store.
        sessions.sort_by(|a, b| b.datetime.cmp(&a.datetime));
        Ok(page(sessions, limit, offset))
    }
}

#[derive(Default)]
pub struct HashmapWorkoutDetailStore {
    details: HashMap<i32, WorkoutDetail>,
    next_id: i32,
}

#[async_trait]
impl WorkoutDetailStore for HashmapWorkoutDetailStore {
    async fn add(
        &mut self,
        workout_session_id: i32,
        detail_name: String,
        detail_value: String,
    ) -> Result<WorkoutDetail, WorkoutStoreError> {
        self.next_id += 1;
        let detail = WorkoutDetail {
            id: self.next_id,
            workout_session_id,
            detail_name,
            detail_value,
        };
        self.details.insert(detail.id, detail.clone());
        Ok(detail)
    }

    async fn list_by_session(
        &self,
        workout_session_id: i32,
    ) -> Result<Vec<WorkoutDetail>, WorkoutStoreError> {
        let mut details: Vec<WorkoutDetail> = self
            .details
            .values()
            .filter(|d| d.workout_session_id == workout_session_id)
            .cloned()
            .collect();
        details.sort_by_key(|d| d.id);
        Ok(details)
    }
}

fn page<T>(items: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}
