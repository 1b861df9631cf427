#![deny(unused_must_use)]
#![deny(clippy::clone_on_copy)]
#![warn(clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(clippy::allow_attributes)]
#![allow(
    // We won't release
    clippy::cargo_common_metadata,
    clippy::missing_docs_in_private_items,
    clippy::multiple_crate_versions,
    // Sometimes useful
    clippy::enum_glob_use,
    clippy::wildcard_imports,
    clippy::single_call_fn,
    // Sometimes annoying
    clippy::use_self,
)]

pub mod application;
pub mod constant;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod utils;
