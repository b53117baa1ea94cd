pub mod common_enums;
pub mod consultation;
pub mod consultation_history;

pub use common_enums::*;
pub use consultation::*;
pub use consultation_history::*;
