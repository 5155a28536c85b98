//! Dropdown selector widget
//!
//! - `model` - value holder and the notifications the widget emits
//! - `animation` - spring animation of expand progress, height and width
//! - `layout` - intrinsic measurement in cells
//! - `state` - per-instance animation, scroll, highlight and ripple state
//! - `widget` - rendering and tap regions

mod animation;
pub mod layout;
mod model;
mod state;
mod widget;

pub use animation::AnimationSpec;
pub use model::{DropdownEvent, DropdownOptions};
pub use state::DropdownState;
pub use widget::{Dropdown, DropdownStyle};
