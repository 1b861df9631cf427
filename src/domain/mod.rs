pub mod block;
pub mod profile;
pub mod repository;
pub mod user;
