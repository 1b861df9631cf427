use entity::{follower, post, user};
use sea_orm::sea_query::{
    Expr, IntoColumnRef, IntoTableRef, Query, SimpleExpr, SubQueryStatement,
};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
};

use super::SeaOrmRepository;
use crate::domain::repository::Connection;
use crate::domain::user::{ProfileRepository, User, UserProfile, UserStats};

const POST_COUNT: &str = "post_count";
const FOLLOWER_COUNT: &str = "follower_count";
const FOLLOWING_COUNT: &str = "following_count";

#[derive(FromQueryResult)]
struct UserProfileRaw {
    id: String,
    username: String,
    name: Option<String>,
    surname: Option<String>,
    avatar: Option<String>,
    cover: Option<String>,

    post_count: i64,
    follower_count: i64,
    following_count: i64,
}

impl TryFrom<UserProfileRaw> for UserProfile {
    type Error = DbErr;

    fn try_from(raw: UserProfileRaw) -> Result<Self, Self::Error> {
        let count = |value: i64, column: &str| {
            u64::try_from(value).map_err(|_| {
                DbErr::Type(format!("Negative {column}: {value}"))
            })
        };

        Ok(Self {
            stats: UserStats {
                posts: count(raw.post_count, POST_COUNT)?,
                followers: count(raw.follower_count, FOLLOWER_COUNT)?,
                followings: count(raw.following_count, FOLLOWING_COUNT)?,
            },
            user: User {
                id: raw.id.into(),
                username: raw.username,
                name: raw.name,
                surname: raw.surname,
                avatar: raw.avatar,
                cover: raw.cover,
            },
        })
    }
}

/// `(SELECT COUNT(*) FROM table WHERE fk = user.id)`
fn count_by_user(
    table: impl IntoTableRef,
    fk: impl IntoColumnRef,
) -> SimpleExpr {
    let query = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(table)
        .and_where(Expr::col(fk).equals((user::Entity, user::Column::Id)))
        .to_owned();

    SimpleExpr::SubQuery(
        None,
        Box::new(SubQueryStatement::SelectStatement(query)),
    )
}

impl ProfileRepository for SeaOrmRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserProfile>, Self::Error> {
        use user::Column;

        user::Entity::find()
            .select_only()
            .columns([
                Column::Id,
                Column::Username,
                Column::Name,
                Column::Surname,
                Column::Avatar,
                Column::Cover,
            ])
            .column_as(
                count_by_user(
                    post::Entity,
                    (post::Entity, post::Column::AuthorId),
                ),
                POST_COUNT,
            )
            .column_as(
                count_by_user(
                    follower::Entity,
                    (follower::Entity, follower::Column::FollowingId),
                ),
                FOLLOWER_COUNT,
            )
            .column_as(
                count_by_user(
                    follower::Entity,
                    (follower::Entity, follower::Column::FollowerId),
                ),
                FOLLOWING_COUNT,
            )
            .filter(Column::Username.eq(username))
            .into_model::<UserProfileRaw>()
            .one(self.conn())
            .await?
            .map(UserProfile::try_from)
            .transpose()
    }
}
