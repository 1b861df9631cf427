use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::SeaOrmRepository;
use crate::domain::block;
use crate::domain::repository::Connection;
use crate::domain::user::UserId;

impl block::Repository for SeaOrmRepository {
    async fn exists(
        &self,
        blocker: &UserId,
        blocked: &UserId,
    ) -> Result<bool, Self::Error> {
        use entity::block::Column;

        let count = entity::block::Entity::find()
            .filter(Column::BlockerId.eq(blocker.as_str()))
            .filter(Column::BlockedId.eq(blocked.as_str()))
            .count(self.conn())
            .await?;

        Ok(count > 0)
    }
}
