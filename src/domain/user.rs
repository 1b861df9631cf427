use derive_more::{Display, From};
use serde::Serialize;
use utoipa::ToSchema;

use super::repository::Connection;

/// Identifier issued by the identity provider
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Display, From, Serialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    #[schema(value_type = String)]
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
    pub surname: Option<String>,
    /// Avatar url, `None` if the user never set one
    pub avatar: Option<String>,
    /// Cover url, `None` if the user never set one
    pub cover: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserStats {
    pub posts: u64,
    pub followers: u64,
    pub followings: u64,
}

/// A user together with the counts read alongside it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub user: User,
    pub stats: UserStats,
}

#[trait_variant::make(Send)]
pub trait ProfileRepository: Connection {
    /// Exact match on username, counts are computed in the same read.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserProfile>, Self::Error>;
}
