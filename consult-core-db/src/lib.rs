pub mod models;
pub mod repository;
pub mod services;

pub use models::*;
pub use repository::*;
pub use services::*;

#[cfg(test)]
pub mod test_utils;
