//! Destructible rock reactions driven through engine-owned collaborators
//!
//! The engine actor layer owns meshes, physics bodies, VFX and timers. This
//! module only decides *what* to do on a blast, an overlap, a destroy or a
//! respawn, and tells the engine through two traits:
//! - [`RockBody`]: the rock's physical/visual presence in the world
//! - [`DestructionListener`]: whoever schedules destruction of nearby rocks
//!
//! Nothing here ticks, waits or owns lifecycle; delayed destruction belongs
//! to the listener.

pub mod rock;

pub use rock::DestructibleRock;

use crate::core_types::Vector3;

/// Engine-side body of a destructible rock.
pub trait RockBody {
    /// Current world location of the body.
    fn location(&self) -> Vector3;

    /// Current linear velocity of the body.
    fn linear_velocity(&self) -> Vector3;

    /// Apply an impulse (direction scaled by strength) at a world point.
    fn apply_impulse_at(&mut self, impulse: Vector3, point: Vector3);

    /// Turn physics simulation on or off.
    fn set_physics_enabled(&mut self, enabled: bool);

    /// Show or hide the mesh.
    fn set_visible(&mut self, visible: bool);

    /// Turn collision on or off.
    fn set_collision_enabled(&mut self, enabled: bool);

    /// Move the dissolve effect to `at` and start it.
    fn trigger_dissolve_effect(&mut self, at: Vector3);

    /// Move the body to `location` and zero its linear velocity.
    fn teleport_to(&mut self, location: Vector3);

    /// Park the (inactive) dissolve effect at `at` so it is in place for the
    /// next destroy.
    fn reset_dissolve_effect(&mut self, at: Vector3);
}

/// Receives destroy requests raised by a rock.
pub trait DestructionListener {
    /// A projectile hit a rock at `point`.
    fn notify_destroy_requested(&self, point: Vector3);
}

/// What overlapped a rock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlap {
    /// Another destructible rock.
    Rock,
    /// A player projectile at the given world location.
    Projectile {
        /// Projectile location at overlap time.
        location: Vector3,
    },
    /// Anything else.
    Other,
}
