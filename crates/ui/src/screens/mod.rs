//! The four screen templates.

pub mod bottom_button;
pub mod button_list;
pub mod large_button;
pub mod text_top_nav;

pub use bottom_button::{BottomButtonConfig, BottomButtonScreen};
pub use button_list::{list_button_bounds, ButtonListConfig, ButtonListScreen};
pub use large_button::{grid_button_bounds, GridButton, LargeButtonConfig, LargeButtonScreen};
pub use text_top_nav::{TextTopNavConfig, TextTopNavScreen};
