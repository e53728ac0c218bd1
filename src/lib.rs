use axum::routing::{get, post};
use axum::Router;
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};
use welds::connections::any::AnyClient;

use app_state::AppState;
use routes::{
    login, logout, muscle_groups, refresh, signup, suggest, users, verify_token, workout_sessions,
    workout_types,
};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod migrations;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        // auth
        .route("/signup", post(signup::signup))
        .route("/login", post(login::login))
        .route("/refresh", post(refresh::refresh))
        .route("/verify-token", post(verify_token::verify_token))
        .route("/logout", post(logout::logout))
        // user administration
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // workout catalog
        .route(
            "/muscle-groups",
            post(muscle_groups::create_muscle_group).get(muscle_groups::list_muscle_groups),
        )
        .route(
            "/muscle-groups/:id",
            get(muscle_groups::get_muscle_group)
                .put(muscle_groups::update_muscle_group)
                .delete(muscle_groups::delete_muscle_group),
        )
        .route(
            "/workout-types",
            post(workout_types::create_workout_type).get(workout_types::list_workout_types),
        )
        .route(
            "/workout-types/:id",
            get(workout_types::get_workout_type)
                .put(workout_types::update_workout_type)
                .delete(workout_types::delete_workout_type),
        )
        // workout log
        .route(
            "/workout-sessions",
            post(workout_sessions::create_session).get(workout_sessions::list_sessions),
        )
        .route(
            "/workout-sessions/:id",
            get(workout_sessions::get_session).delete(workout_sessions::delete_session),
        )
        .route(
            "/workout-sessions/:id/details",
            post(workout_sessions::add_session_detail),
        )
        .route("/suggest-workout", get(suggest::suggest_workout))
        .with_state(app_state)
}

pub async fn get_db_pool(db_url: &str) -> welds::errors::Result<AnyClient> {
    Ok(welds::connections::connect(db_url).await?)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
