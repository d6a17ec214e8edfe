//! Domain types shared by the repository, services and routes.

pub mod query;
pub mod record;
