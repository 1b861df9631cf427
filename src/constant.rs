pub const PUBLIC_DIR: &str = "public";

/// Served from [`PUBLIC_DIR`] when the user has no avatar
pub const DEFAULT_AVATAR_URL: &str = "/noAvatar.png";
/// Served from [`PUBLIC_DIR`] when the user has no cover
pub const DEFAULT_COVER_URL: &str = "/noCover.png";

pub const DEFAULT_VIEWER_HEADER: &str = "x-viewer-id";
pub const DEFAULT_PORT: u16 = 3000;
