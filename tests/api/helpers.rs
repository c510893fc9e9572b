use campaign_tracker::{
    app_state::{AppState, ProjectStoreType, UserStoreType},
    get_sqlite_pool, migrate,
    services::data_stores::{SqliteProjectStore, SqliteUserStore},
    utils::constants::test,
    Application,
};
use reqwest::Response;
use secrecy::Secret;
use serde_json::Value;
use sqlx::SqlitePool;
use std::{path::PathBuf, sync::Arc};
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db_path: PathBuf,
    pub http_client: reqwest::Client,
    pub pool: SqlitePool,
    pub project_store: ProjectStoreType,
    pub user_store: UserStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_path =
            std::env::temp_dir().join(format!("{}.db", Uuid::new_v4()));
        let pool = configure_sqlite(&db_path).await;

        let user_store =
            Arc::new(RwLock::new(SqliteUserStore::new(pool.clone())));
        let project_store =
            Arc::new(RwLock::new(SqliteProjectStore::new(pool.clone())));

        let app_state =
            AppState::new(user_store.clone(), project_store.clone());

        let app = Application::build(app_state, test::APP_ADDRESS, None)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            db_path,
            http_client,
            pool,
            project_store,
            user_store,
        }
    }

    pub async fn get_usuarios(&self) -> Response {
        self.http_client
            .get(format!("{}/usuarios", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_create<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/create", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_proyectos(&self) -> Response {
        self.http_client
            .get(format!("{}/proyectos", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_proyecto(&self, id: &str) -> Response {
        self.http_client
            .get(format!("{}/proyectos/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_proyectos<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/proyectos", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_proyecto<Body>(&self, id: &str, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/proyectos/{}", &self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_update_revenue<Body>(
        &self,
        id: &str,
        body: &Body,
    ) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/proyectos/update/{}", &self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_proyecto(&self, id: &str) -> Response {
        self.http_client
            .delete(format!("{}/proyectos/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_add_user<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/proyectos/addUser", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_member_projects(&self, user_id: &str) -> Response {
        self.http_client
            .get(format!("{}/proyectos/user/{}", &self.address, user_id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {
        self.pool.close().await;
        delete_database(&self.db_path);
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

async fn configure_sqlite(db_path: &PathBuf) -> SqlitePool {
    let url = Secret::new(format!("sqlite:{}", db_path.display()));

    let pool = get_sqlite_pool(&url)
        .await
        .expect("Failed to create SQLite connection pool!");

    migrate(&pool)
        .await
        .expect("Failed to migrate the database");

    pool
}

fn delete_database(db_path: &PathBuf) {
    let _ = std::fs::remove_file(db_path);
    for suffix in ["-wal", "-shm", "-journal"] {
        let mut sidecar = db_path.clone().into_os_string();
        sidecar.push(suffix);
        let _ = std::fs::remove_file(sidecar);
    }
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn signup(app: &TestApp, name: &str, email: &str, password: &str) -> i64 {
    let response = app
        .post_create(&serde_json::json!({
            "name": name,
            "email": email,
            "passwordSecret": password
        }))
        .await;

    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to create user: {email}"
    );

    get_json_response_body(response)
        .await
        .get("id")
        .expect("No ID in response")
        .as_i64()
        .expect("ID should be an integer")
}

/// Creates `count` users and returns their ids in creation order.
pub async fn signup_many(app: &TestApp, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(
            signup(app, &format!("User {i}"), &get_random_email(), "password")
                .await,
        );
    }
    ids
}

pub async fn add_new_project(app: &TestApp, body: &Value) -> i64 {
    let response = app.post_proyectos(body).await;

    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to add new project: {body}"
    );

    get_json_response_body(response)
        .await
        .get("id")
        .expect("No ID in response")
        .as_i64()
        .expect("ID should be an integer")
}

pub async fn get_member_ids(app: &TestApp, project_id: i64) -> String {
    let response = app.get_proyecto(&project_id.to_string()).await;
    assert_eq!(response.status().as_u16(), 200);

    get_json_response_body(response).await["proyecto"]["memberIds"]
        .as_str()
        .expect("memberIds should be a string")
        .to_owned()
}

pub fn sample_project(name: &str, member_ids: &str) -> Value {
    serde_json::json!({
        "name": name,
        "ownerHandle": "@craggy_island",
        "ticketInfo": "Lenten raffle, 40 tickets",
        "setterRate": 12.5,
        "salesGoal": 10000.0,
        "estimatedRevenue": 2500.0,
        "memberIds": member_ids
    })
}
