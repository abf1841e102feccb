//! Display snapshot to drawable primitives.
//!
//! The core produces the scene; any frontend just draws it in order.

pub mod operations;
pub mod types;

pub use operations::render;
pub use types::{Drawable, Palette, Point, Rgb, WidgetLayout, WidgetScene};
