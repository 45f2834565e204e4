//! Mage Math Core Library
//!
//! A small 3D vector library for game code. Its main query classifies a point
//! as left or right of a camera's view direction, using a right-handed frame
//! with +x forward, +y left and +z up.
//!
//! ## Contents
//! - [`Vector3`]: value type with dot/cross products, normalization, distance
//!   and exact or tolerance-based comparison
//! - [`ViewSide`]: result of [`Vector3::left_or_right_of_view`]
//! - [`destructible`]: the seam an engine actor layer implements so that
//!   blast and overlap reactions can be driven from this crate
//!
//! ## Usage
//! ```
//! use mage_math_core::{Vector3, ViewSide};
//!
//! let camera = Vector3::ZERO;
//! let facing = Vector3::FORWARD;
//! let point = Vector3::new(5.0, 5.0, 0.0);
//! assert_eq!(point.left_or_right_of_view(&camera, &facing), ViewSide::Left);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Engine collaborator seam
pub mod destructible;

// Re-export core types
pub use core_types::{Comparison, Vector3, ViewConfig, ViewSide};
pub use destructible::{DestructibleRock, DestructionListener, Overlap, RockBody};
pub use error::VectorError;
