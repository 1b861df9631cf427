use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr,
};
use sea_orm_migration::MigratorTrait;
use social_profile::constant::DEFAULT_VIEWER_HEADER;
use social_profile::infra::state::AppState;
use social_profile::presentation::rest::{self, ArcAppState};

pub const VIEWER_HEADER: &str = DEFAULT_VIEWER_HEADER;

pub const ALICE: &str = "user_alice";
pub const BOB: &str = "user_bob";
pub const CAROL: &str = "user_carol";

/// Application backed by a fresh in-memory database
pub struct TestApp {
    pub server: TestServer,
    pub fixtures: TestFixtures,
}

impl TestApp {
    pub async fn new() -> Self {
        let conn = create_connection()
            .await
            .expect("Failed to create test database");

        let state = AppState::new(
            conn.clone(),
            HeaderName::from_static(VIEWER_HEADER),
        );
        let app = rest::router(ArcAppState::new(Arc::new(state)));

        let server = TestServer::new(app).expect("Failed to create server");

        Self {
            server,
            fixtures: TestFixtures { conn },
        }
    }

    pub async fn get(
        &self,
        path: &str,
        viewer: Option<&'static str>,
    ) -> TestResponse {
        let mut request = self.server.get(path);

        if let Some(viewer) = viewer {
            request = request.add_header(
                HeaderName::from_static(VIEWER_HEADER),
                HeaderValue::from_static(viewer),
            );
        }

        request.await
    }
}

/// A single connection, every connection to `sqlite::memory:` is its own
/// database
async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    let opt = ConnectOptions::new("sqlite::memory:")
        .sqlx_logging(false)
        .min_connections(1)
        .max_connections(1)
        .to_owned();

    let conn = Database::connect(opt).await?;

    migration::Migrator::up(&conn, None).await?;

    Ok(conn)
}

pub struct TestFixtures {
    conn: DatabaseConnection,
}

impl TestFixtures {
    pub async fn user(
        &self,
        id: &str,
        username: &str,
        name: Option<(&str, &str)>,
    ) -> entity::user::Model {
        entity::user::ActiveModel {
            id: Set(id.to_string()),
            username: Set(username.to_string()),
            name: Set(name.map(|(name, _)| name.to_string())),
            surname: Set(name.map(|(_, surname)| surname.to_string())),
            avatar: Set(None),
            cover: Set(None),
        }
        .insert(&self.conn)
        .await
        .expect("Failed to create user")
    }

    pub async fn post(&self, author: &str, content: &str) {
        entity::post::ActiveModel {
            author_id: Set(author.to_string()),
            content: Set(content.to_string()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .expect("Failed to create post");
    }

    pub async fn follow(&self, follower: &str, following: &str) {
        entity::follower::ActiveModel {
            follower_id: Set(follower.to_string()),
            following_id: Set(following.to_string()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .expect("Failed to create follower");
    }

    pub async fn block(&self, blocker: &str, blocked: &str) {
        entity::block::ActiveModel {
            blocker_id: Set(blocker.to_string()),
            blocked_id: Set(blocked.to_string()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await
        .expect("Failed to create block");
    }

    /// Every profile read fails afterwards
    pub async fn drop_post_table(&self) {
        self.conn
            .execute_unprepared("DROP TABLE post")
            .await
            .expect("Failed to drop post table");
    }

    /// alice: 2 posts, followed by carol, follows bob and carol
    pub async fn seed(&self) {
        self.user(ALICE, "alice", Some(("Alice", "Liddell"))).await;
        self.user(BOB, "bob", None).await;
        self.user(CAROL, "carol", Some(("Carol", "Danvers"))).await;

        self.post(ALICE, "hello").await;
        self.post(ALICE, "down the rabbit hole").await;
        self.post(BOB, "first").await;

        self.follow(CAROL, ALICE).await;
        self.follow(ALICE, BOB).await;
        self.follow(ALICE, CAROL).await;
        self.follow(BOB, CAROL).await;
    }
}
