//! charsheet - Procedural pixel-art sprite sheets for a fixed cast
//!
//! This library provides functionality to:
//! - Cut, tint and decorate character tiles from a reference sheet
//! - Draw the cast from filled rectangles on a logical grid
//! - Compose both into an idle sheet and an action sheet with JSON atlases
//!
//! Both sheets hold four characters across and three poses down.

pub mod atlas;
pub mod blend;
pub mod cast;
pub mod cli;
pub mod color;
pub mod config;
pub mod decorate;
pub mod draw;
pub mod figure;
pub mod logging;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod shapes;
pub mod spritesheet;
pub mod tiles;
