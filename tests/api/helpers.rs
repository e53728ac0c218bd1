use std::sync::Arc;

use reqwest::{Client, Response};
use serde::Serialize;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use fitness_backend::app_router;
use fitness_backend::app_state::AppState;
use fitness_backend::services::{
    HashmapMuscleGroupStore, HashmapUserStore, HashmapWorkoutDetailStore,
    HashmapWorkoutSessionStore, HashmapWorkoutTypeStore, Suggester, TokenService,
};

#[derive(Serialize)]
pub struct SignupBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RefreshBody {
    pub refresh_token: String,
}

#[derive(Serialize)]
pub struct VerifyTokenBody {
    pub token: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct TokenPairBody {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let token_service = Arc::new(TokenService::from_parts(
            "test-access-secret",
            "test-refresh-secret",
            60,
            3600,
        ));
        // No Ollama server runs in tests; only the no-history suggestion
        // path is exercised, which never reaches the client.
        let suggester = Arc::new(Suggester::new("http://127.0.0.1:1", "test-model"));

        let app_state = AppState::new(
            Arc::new(RwLock::new(HashmapUserStore::new())),
            Arc::new(RwLock::new(HashmapMuscleGroupStore::default())),
            Arc::new(RwLock::new(HashmapWorkoutTypeStore::default())),
            Arc::new(RwLock::new(HashmapWorkoutSessionStore::default())),
            Arc::new(RwLock::new(HashmapWorkoutDetailStore::default())),
            token_service,
            suggester,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));
        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn signup(&self, email: &str, password: &str) -> Response {
        self.post_json(
            "/signup",
            &SignupBody {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post_json(
            "/login",
            &LoginBody {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Response {
        self.post_json(
            "/refresh",
            &RefreshBody {
                refresh_token: refresh_token.to_string(),
            },
        )
        .await
    }

    pub async fn verify_token(&self, token: &str) -> Response {
        self.post_json(
            "/verify-token",
            &VerifyTokenBody {
                token: token.to_string(),
            },
        )
        .await
    }

    /// Signup with a random email and return the issued pair.
    pub async fn signup_random_user(&self) -> TokenPairBody {
        let response = self.signup(&get_random_email(), "Sup3r-secret!").await;
        assert_eq!(response.status().as_u16(), 201, "signup failed in helper");
        response.json().await.expect("signup response body")
    }

    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Response {
        self.http_client
            .delete(format!("{}{}", &self.address, path))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_json_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Response {
        self.http_client
            .put(format!("{}{}", &self.address, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> Self {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}
