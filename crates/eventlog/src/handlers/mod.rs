pub mod cache;
pub mod error;
pub mod events;
pub mod health;
pub mod organizations;

pub use error::AppError;
