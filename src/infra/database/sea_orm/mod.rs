use sea_orm::{DatabaseConnection, DbErr};

use crate::domain::repository::Connection;

mod block;
mod user;

/// `DatabaseConnection` is a wrapper of Arc<InnerPool>.
/// So don't wrap this type in Arc.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub conn: DatabaseConnection,
}

impl SeaOrmRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

impl Connection for SeaOrmRepository {
    type Conn = DatabaseConnection;
    type Error = DbErr;

    fn conn(&self) -> &Self::Conn {
        &self.conn
    }
}
