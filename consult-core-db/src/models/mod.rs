pub mod auditable;
pub mod identifiable;
pub mod consultation;

// Re-exports
pub use auditable::*;
pub use identifiable::*;
pub use consultation::*;
