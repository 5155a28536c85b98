//! Terminal UI: home screen, components, theme and mouse regions.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
