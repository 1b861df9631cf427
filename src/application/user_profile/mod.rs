use crate::domain::profile::ProfileVisibility;
use crate::domain::user::{UserId, UserProfile};
use crate::domain::{block, user};
use crate::infra::error::Error;
use crate::utils::MapInto;

#[derive(Clone)]
pub struct Service<R> {
    repo: R,
}

impl<R> Service<R> {
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R> Service<R>
where
    R: user::ProfileRepository + block::Repository,
{
    pub async fn resolve(
        &self,
        username: &str,
    ) -> Result<Option<UserProfile>, Error> {
        self.repo.find_by_username(username).await.map_into()
    }

    /// Anonymous viewers are never blocked and cost no lookup.
    pub async fn is_blocked(
        &self,
        owner: &UserId,
        viewer: Option<&UserId>,
    ) -> Result<bool, Error> {
        let Some(viewer) = viewer else {
            return Ok(false);
        };

        block::Repository::exists(&self.repo, owner, viewer)
            .await
            .map_into()
    }

    pub async fn view(
        &self,
        username: &str,
        viewer: Option<&UserId>,
    ) -> Result<ProfileVisibility, Error> {
        let Some(profile) = self.resolve(username).await? else {
            tracing::debug!(username, "Profile hidden: no such user");
            return Ok(ProfileVisibility::Hidden);
        };

        if self.is_blocked(&profile.user.id, viewer).await? {
            tracing::debug!(username, "Profile hidden: viewer is blocked");
            return Ok(ProfileVisibility::Hidden);
        }

        Ok(ProfileVisibility::Visible(profile))
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use sea_orm::DbErr;

    use super::*;
    use crate::domain::repository::Connection;
    use crate::domain::user::{User, UserStats};

    #[derive(Default)]
    struct MemoryRepo {
        profiles: Vec<UserProfile>,
        blocks: Vec<(UserId, UserId)>,
        block_lookups: AtomicUsize,
        fail: bool,
    }

    impl MemoryRepo {
        fn check(&self) -> Result<(), Error> {
            if self.fail {
                Err(DbErr::Custom("connection refused".to_string()).into())
            } else {
                Ok(())
            }
        }
    }

    impl Connection for MemoryRepo {
        type Conn = ();
        type Error = Error;

        fn conn(&self) -> &Self::Conn {
            &()
        }
    }

    impl user::ProfileRepository for MemoryRepo {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<UserProfile>, Self::Error> {
            self.check()?;
            Ok(self
                .profiles
                .iter()
                .find(|p| p.user.username == username)
                .cloned())
        }
    }

    impl block::Repository for MemoryRepo {
        async fn exists(
            &self,
            blocker: &UserId,
            blocked: &UserId,
        ) -> Result<bool, Self::Error> {
            self.block_lookups.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            Ok(self
                .blocks
                .iter()
                .any(|(from, to)| from == blocker && to == blocked))
        }
    }

    fn profile(id: &str, username: &str) -> UserProfile {
        UserProfile {
            user: User {
                id: id.into(),
                username: username.to_string(),
                name: None,
                surname: None,
                avatar: None,
                cover: None,
            },
            stats: UserStats::default(),
        }
    }

    fn service(blocks: &[(&str, &str)]) -> Service<MemoryRepo> {
        Service::new(MemoryRepo {
            profiles: vec![
                profile("user_alice", "alice"),
                profile("user_bob", "bob"),
            ],
            blocks: blocks
                .iter()
                .map(|(from, to)| (UserId::from(*from), UserId::from(*to)))
                .collect(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn visible_when_no_block() {
        let service = service(&[]);
        let bob = UserId::from("user_bob");

        let visibility = service.view("alice", Some(&bob)).await.unwrap();

        assert_eq!(
            visibility,
            ProfileVisibility::Visible(profile("user_alice", "alice"))
        );
    }

    #[tokio::test]
    async fn hidden_when_owner_blocked_viewer() {
        let service = service(&[("user_alice", "user_bob")]);
        let bob = UserId::from("user_bob");

        let visibility = service.view("alice", Some(&bob)).await.unwrap();

        assert_eq!(visibility, ProfileVisibility::Hidden);
    }

    #[tokio::test]
    async fn block_direction_matters() {
        let service = service(&[("user_bob", "user_alice")]);
        let bob = UserId::from("user_bob");

        let visibility = service.view("alice", Some(&bob)).await.unwrap();

        assert!(matches!(visibility, ProfileVisibility::Visible(_)));
    }

    #[tokio::test]
    async fn hidden_when_user_missing() {
        let service = service(&[]);
        let bob = UserId::from("user_bob");

        assert_eq!(
            service.view("ghost", Some(&bob)).await.unwrap(),
            ProfileVisibility::Hidden
        );
        assert_eq!(
            service.view("ghost", None).await.unwrap(),
            ProfileVisibility::Hidden
        );
        assert_eq!(service.repo.block_lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn anonymous_viewer_skips_block_lookup() {
        let service = service(&[("user_alice", "user_bob")]);

        let visibility = service.view("alice", None).await.unwrap();

        assert!(matches!(visibility, ProfileVisibility::Visible(_)));
        assert_eq!(service.repo.block_lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn signed_in_viewer_costs_one_lookup() {
        let service = service(&[]);
        let bob = UserId::from("user_bob");

        service.view("alice", Some(&bob)).await.unwrap();

        assert_eq!(service.repo.block_lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn persistence_errors_propagate() {
        let service = Service::new(MemoryRepo {
            fail: true,
            ..Default::default()
        });

        assert!(service.view("alice", None).await.is_err());
        assert!(
            service
                .is_blocked(&"user_alice".into(), Some(&"user_bob".into()))
                .await
                .is_err()
        );
    }
}
