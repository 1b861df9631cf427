use ::sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

pub mod sea_orm;

/// Connect and bring the schema up to date.
pub async fn get_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    let opt = ConnectOptions::new(url)
        .sqlx_logging(false)
        .min_connections(1)
        .to_owned();

    let conn = Database::connect(opt).await?;

    migration::Migrator::up(&conn, None)
        .await
        .inspect_err(|e| tracing::error!("Failed to run migration: {e}"))?;

    Ok(conn)
}
