//! Form definitions backing the grid routes.

pub mod export;
