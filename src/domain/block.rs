use super::repository::Connection;
use super::user::UserId;

#[trait_variant::make(Send)]
pub trait Repository: Connection {
    /// Whether `blocker` has blocked `blocked`. Direction matters.
    async fn exists(
        &self,
        blocker: &UserId,
        blocked: &UserId,
    ) -> Result<bool, Self::Error>;
}
