use serde::Serialize;
use utoipa::ToSchema;

use super::user::{User, UserProfile, UserStats};
use crate::constant::{DEFAULT_AVATAR_URL, DEFAULT_COVER_URL};

/// What a viewer gets to see for a requested username.
///
/// A missing user and a user who blocked the viewer both end up as
/// [`ProfileVisibility::Hidden`], which intentionally carries no reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileVisibility {
    Visible(UserProfile),
    Hidden,
}

impl ProfileVisibility {
    pub fn into_visible(self) -> Option<UserProfile> {
        match self {
            Self::Visible(profile) => Some(profile),
            Self::Hidden => None,
        }
    }
}

/// Display data of a visible profile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileView {
    /// `"{name} {surname}"`, or the username if either part is missing
    pub display_name: String,
    pub avatar_url: String,
    pub cover_url: String,
    pub stats: UserStats,
    /// Handed to the feed
    pub username: String,
    /// Handed to the side menu
    pub user: User,
}

impl From<UserProfile> for ProfileView {
    fn from(UserProfile { user, stats }: UserProfile) -> Self {
        Self {
            display_name: display_name(&user),
            avatar_url: or_default(user.avatar.as_deref(), DEFAULT_AVATAR_URL),
            cover_url: or_default(user.cover.as_deref(), DEFAULT_COVER_URL),
            stats,
            username: user.username.clone(),
            user,
        }
    }
}

fn display_name(user: &User) -> String {
    match (non_empty(user.name.as_deref()), non_empty(user.surname.as_deref()))
    {
        (Some(name), Some(surname)) => format!("{name} {surname}"),
        _ => user.username.clone(),
    }
}

fn or_default(url: Option<&str>, default: &str) -> String {
    non_empty(url).unwrap_or(default).to_owned()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
