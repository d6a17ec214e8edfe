pub mod errors;
pub mod export;
pub mod seed;
pub mod table;

pub use errors::{ServiceError, ServiceResult};
