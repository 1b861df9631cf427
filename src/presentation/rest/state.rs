use std::ops::Deref;
use std::sync::Arc;

use axum::extract::FromRef;

use super::extractor::ViewerHeader;
use crate::application::user_profile;
use crate::infra::database::sea_orm::SeaOrmRepository;
use crate::infra::state::AppState;

pub type UserProfileService = user_profile::Service<SeaOrmRepository>;

#[derive(Clone)]
pub struct ArcAppState(Arc<AppState>);

impl Deref for ArcAppState {
    type Target = AppState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArcAppState {
    pub const fn new(state: Arc<AppState>) -> Self {
        Self(state)
    }
}

impl FromRef<ArcAppState> for UserProfileService {
    fn from_ref(input: &ArcAppState) -> Self {
        Self::new(input.sea_orm_repo.clone())
    }
}

impl FromRef<ArcAppState> for ViewerHeader {
    fn from_ref(input: &ArcAppState) -> Self {
        Self(input.viewer_header.clone())
    }
}
