//! Comparison policy and view-query configuration.

use serde::{Deserialize, Serialize};

use super::vec3::Vector3;

/// How two vectors are compared for equality.
///
/// `Exact` is the default and matches bitwise-exact component equality (with
/// the usual IEEE caveats: `0.0 == -0.0`, NaN never equal).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Comparison {
    /// Componentwise `==`.
    #[default]
    Exact,
    /// Componentwise absolute difference `<= epsilon`.
    Tolerance(f32),
}

/// Parameters for [`Vector3::left_or_right_of_view_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// World up axis the cross product is projected onto.
    pub up: Vector3,
    /// Comparison used by the parallel/antiparallel check.
    pub parallel: Comparison,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            up: Vector3::UP,
            parallel: Comparison::Exact,
        }
    }
}

impl ViewConfig {
    /// Default config with a tolerance on the parallel check.
    pub fn with_parallel_tolerance(epsilon: f32) -> Self {
        Self {
            parallel: Comparison::Tolerance(epsilon),
            ..Self::default()
        }
    }
}
