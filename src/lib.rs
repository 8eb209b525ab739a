//! prefscreen - declarative preferences screen for the terminal.
//!
//! This library provides:
//! - `model` - section/row value objects handed to the renderer
//! - `screen` - the `Screen` capability pushed onto the navigation stack
//! - `view` - flattened view model of a preferences list
//! - `layout` - JSON layout files describing a preferences screen
//! - `tui` - ratatui rendering, navigation stack, input and event loop

pub mod layout;
pub mod model;
pub mod screen;
pub mod tui;
pub mod view;
