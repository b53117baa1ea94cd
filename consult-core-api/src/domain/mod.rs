pub mod change_set;
pub mod field_value;
pub mod outcome;
pub mod user;

pub use change_set::*;
pub use field_value::*;
pub use outcome::*;
pub use user::*;
