pub mod repo_impl;
pub mod create_batch;
pub mod load;
pub mod update;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ConsultationRepositoryImpl;
