pub mod edit_controller;
pub mod history_reader;
pub mod history_writer;

pub use edit_controller::*;
pub use history_reader::*;
pub use history_writer::*;
