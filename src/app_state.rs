use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    MuscleGroupStore, UserStore, WorkoutDetailStore, WorkoutSessionStore, WorkoutTypeStore,
};
use crate::services::{AuthService, Suggester, TokenService};

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type MuscleGroupStoreType = Arc<RwLock<dyn MuscleGroupStore>>;
pub type WorkoutTypeStoreType = Arc<RwLock<dyn WorkoutTypeStore>>;
pub type WorkoutSessionStoreType = Arc<RwLock<dyn WorkoutSessionStore>>;
pub type WorkoutDetailStoreType = Arc<RwLock<dyn WorkoutDetailStore>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub muscle_group_store: MuscleGroupStoreType,
    pub workout_type_store: WorkoutTypeStoreType,
    pub workout_session_store: WorkoutSessionStoreType,
    pub workout_detail_store: WorkoutDetailStoreType,
    // Stateless after construction, so no lock around these.
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub suggester: Arc<Suggester>,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        muscle_group_store: MuscleGroupStoreType,
        workout_type_store: WorkoutTypeStoreType,
        workout_session_store: WorkoutSessionStoreType,
        workout_detail_store: WorkoutDetailStoreType,
        token_service: Arc<TokenService>,
        suggester: Arc<Suggester>,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(user_store.clone(), token_service.clone()));
        Self {
            user_store,
            muscle_group_store,
            workout_type_store,
            workout_session_store,
            workout_detail_store,
            token_service,
            auth_service,
            suggester,
        }
    }
}
