//! Left/right classification of a point relative to a view direction.

use serde::{Deserialize, Serialize};

/// Side of a viewer's forward direction a point lies on.
///
/// The discriminants are the integers handed to engine callers.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewSide {
    /// Left of the view direction (towards +y when facing +x).
    Left = -1,
    /// On the view axis, or undecidable for this view.
    Unknown = 0,
    /// Right of the view direction.
    Right = 1,
}

impl ViewSide {
    /// Classify by the sign of `(relative × orientation) · up`.
    ///
    /// Negative is left, positive is right. Exactly zero (either sign) and NaN
    /// are unknown.
    #[inline]
    pub fn from_sign(value: f32) -> Self {
        if value < 0.0 {
            ViewSide::Left
        } else if value > 0.0 {
            ViewSide::Right
        } else {
            ViewSide::Unknown
        }
    }

    /// `-1`, `0` or `1`.
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// False only for [`ViewSide::Unknown`].
    #[inline]
    pub fn is_known(self) -> bool {
        self != ViewSide::Unknown
    }
}

impl From<ViewSide> for i32 {
    fn from(side: ViewSide) -> Self {
        side.as_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sign() {
        assert_eq!(ViewSide::from_sign(-5.0), ViewSide::Left);
        assert_eq!(ViewSide::from_sign(5.0), ViewSide::Right);
        assert_eq!(ViewSide::from_sign(0.0), ViewSide::Unknown);
        assert_eq!(ViewSide::from_sign(-0.0), ViewSide::Unknown);
        assert_eq!(ViewSide::from_sign(f32::NAN), ViewSide::Unknown);
        // Smallest subnormal still classifies by sign
        assert_eq!(ViewSide::from_sign(f32::from_bits(1)), ViewSide::Right);
    }

    #[test]
    fn test_integer_values() {
        assert_eq!(ViewSide::Left.as_i32(), -1);
        assert_eq!(i32::from(ViewSide::Unknown), 0);
        assert_eq!(ViewSide::Right.as_i32(), 1);
        assert!(!ViewSide::Unknown.is_known());
    }
}
