use axum::http::HeaderName;
use sea_orm::DatabaseConnection;

use super::config::Config;
use super::database::get_connection;
use super::database::sea_orm::SeaOrmRepository;
use super::error::{Error, InternalError};

#[derive(Clone)]
pub struct AppState {
    pub sea_orm_repo: SeaOrmRepository,

    pub viewer_header: HeaderName,
}

impl AppState {
    pub async fn init(config: &Config) -> Result<Self, Error> {
        let viewer_header =
            HeaderName::try_from(config.identity.viewer_header.as_str())
                .map_err(|e| {
                    InternalError::Custom(
                        format!(
                            "Invalid viewer header {:?}: {e}",
                            config.identity.viewer_header
                        )
                        .into(),
                    )
                })?;

        let conn = get_connection(&config.database_url).await?;

        Ok(Self::new(conn, viewer_header))
    }

    pub fn new(conn: DatabaseConnection, viewer_header: HeaderName) -> Self {
        Self {
            sea_orm_repo: SeaOrmRepository::new(conn),
            viewer_header,
        }
    }
}
