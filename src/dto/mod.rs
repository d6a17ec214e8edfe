//! DTO modules that bridge services with the grid and export endpoints.

pub mod datatable;
pub mod export;
