//! Help line module
//!
//! The one-line key hint bar at the bottom of the screen.

pub mod help_line_render;
