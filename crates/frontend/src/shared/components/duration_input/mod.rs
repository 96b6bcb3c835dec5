//! Duration input: number field + unit select combined into one value ("5m")
//!
//! - view_model.rs: field state (decode once, encode on every edit) and ViewModel
//! - view.rs: Leptos component over `ui::Input` and `ui::Select`

mod view;
mod view_model;

pub use view::DurationInput;
pub use view_model::{DurationInputState, DurationInputViewModel, FieldPhase};
