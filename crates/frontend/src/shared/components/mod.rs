pub mod duration_input;
pub mod ui;

pub use duration_input::DurationInput;
