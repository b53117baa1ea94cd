pub mod load;
pub mod load_history;
pub mod create_batch;
pub mod update;
pub mod pagination;

// Re-exports
pub use load::*;
pub use load_history::*;
pub use create_batch::*;
pub use update::*;
pub use pagination::*;
