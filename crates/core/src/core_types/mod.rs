//! Core types and utilities

pub mod comparison;
pub mod vec3;
pub mod view_side;

pub use comparison::{Comparison, ViewConfig};
pub use vec3::Vector3;
pub use view_side::ViewSide;
