//! Application services layer.

pub mod chrome;
pub mod error;
pub mod home;
pub mod pagination;
pub mod repos;
