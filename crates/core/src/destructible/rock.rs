//! Blast, overlap, destroy and respawn logic for a single rock.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::{DestructionListener, Overlap, RockBody};
use crate::core_types::Vector3;
use crate::error::VectorError;

/// Controller for one destructible rock.
///
/// Wraps the engine body, remembers where the rock respawns, and gates
/// destroy requests behind `can_trigger_destroy` (initially `true`).
pub struct DestructibleRock<B: RockBody> {
    body: B,
    home: Vector3,
    listener: Option<Rc<dyn DestructionListener>>,
    can_trigger_destroy: bool,
}

impl<B: RockBody> DestructibleRock<B> {
    /// Wrap `body`; its current location becomes the respawn point.
    pub fn new(body: B) -> Self {
        let home = body.location();
        Self {
            body,
            home,
            listener: None,
            can_trigger_destroy: true,
        }
    }

    /// Set (or clear) the listener that receives destroy requests.
    pub fn set_listener(&mut self, listener: Option<Rc<dyn DestructionListener>>) {
        self.listener = listener;
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn home(&self) -> Vector3 {
        self.home
    }

    pub fn can_trigger_destroy(&self) -> bool {
        self.can_trigger_destroy
    }

    pub fn set_can_trigger_destroy(&mut self, can_trigger_destroy: bool) {
        self.can_trigger_destroy = can_trigger_destroy;
    }

    pub fn set_physics(&mut self, enabled: bool) {
        self.body.set_physics_enabled(enabled);
    }

    /// React to something overlapping the rock.
    ///
    /// Only a projectile raises a destroy request, and only when a listener is
    /// attached and triggering is enabled. Returns whether a request was sent.
    pub fn handle_overlap(&mut self, overlap: Overlap) -> bool {
        let Overlap::Projectile { location } = overlap else {
            return false;
        };
        if !self.can_trigger_destroy {
            return false;
        }
        let Some(listener) = self.listener.as_ref() else {
            return false;
        };

        self.body.set_physics_enabled(true);
        listener.notify_destroy_requested(location);
        debug!(%location, "Rock requested destruction");
        true
    }

    /// Push the rock away from `point` with strength `intensity`.
    ///
    /// # Errors
    /// Returns [`VectorError::ZeroLength`] when `point` is the rock's own
    /// location (no direction to push in) and [`VectorError::NonFinite`] for
    /// non-finite positions. No impulse is applied in either case.
    pub fn add_blast_force_at_location(
        &mut self,
        point: Vector3,
        intensity: f32,
    ) -> Result<(), VectorError> {
        let mut direction = self.body.location() - point;
        direction.try_normalize()?;
        direction.scalar_multiply(intensity);
        self.body.apply_impulse_at(direction, point);
        Ok(())
    }

    /// Dissolve the rock: start the effect, hide it and drop its collision.
    ///
    /// The rock stays alive so it can be respawned cheaply.
    pub fn destroy(&mut self) {
        let at = self.body.location();
        self.body.trigger_dissolve_effect(at);
        self.body.set_visible(false);
        self.body.set_collision_enabled(false);
        debug!(%at, "Rock destroyed");
    }

    /// Put the rock back at its home location, at rest and visible.
    pub fn respawn(&mut self) {
        self.body.teleport_to(self.home);
        let at = self.body.location();
        self.body.reset_dissolve_effect(at);
        self.body.set_physics_enabled(false);
        self.body.set_visible(true);
        self.body.set_collision_enabled(true);
        self.can_trigger_destroy = true;
        debug!(home = %self.home, "Rock respawned");
    }

    pub fn velocity(&self) -> Vector3 {
        self.body.linear_velocity()
    }

    /// Speed of the rock.
    pub fn velocity_intensity(&self) -> f32 {
        self.body.linear_velocity().magnitude()
    }
}

impl<B: RockBody + fmt::Debug> fmt::Debug for DestructibleRock<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestructibleRock")
            .field("body", &self.body)
            .field("home", &self.home)
            .field("has_listener", &self.listener.is_some())
            .field("can_trigger_destroy", &self.can_trigger_destroy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct MockBody {
        location: Vector3,
        velocity: Vector3,
        physics: bool,
        visible: bool,
        collision: bool,
        impulses: Vec<(Vector3, Vector3)>,
        dissolves: Vec<Vector3>,
        dissolve_at: Option<Vector3>,
    }

    impl RockBody for MockBody {
        fn location(&self) -> Vector3 {
            self.location
        }
        fn linear_velocity(&self) -> Vector3 {
            self.velocity
        }
        fn apply_impulse_at(&mut self, impulse: Vector3, point: Vector3) {
            self.impulses.push((impulse, point));
        }
        fn set_physics_enabled(&mut self, enabled: bool) {
            self.physics = enabled;
        }
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
        fn set_collision_enabled(&mut self, enabled: bool) {
            self.collision = enabled;
        }
        fn trigger_dissolve_effect(&mut self, at: Vector3) {
            self.dissolve_at = Some(at);
            self.dissolves.push(at);
        }
        fn teleport_to(&mut self, location: Vector3) {
            self.location = location;
            self.velocity = Vector3::ZERO;
        }
        fn reset_dissolve_effect(&mut self, at: Vector3) {
            self.dissolve_at = Some(at);
        }
    }

    #[derive(Default)]
    struct RecordingListener {
        requests: RefCell<Vec<Vector3>>,
    }

    impl DestructionListener for RecordingListener {
        fn notify_destroy_requested(&self, point: Vector3) {
            self.requests.borrow_mut().push(point);
        }
    }

    fn rock_at(location: Vector3) -> DestructibleRock<MockBody> {
        DestructibleRock::new(MockBody {
            location,
            visible: true,
            collision: true,
            ..MockBody::default()
        })
    }

    #[test]
    fn test_projectile_overlap_notifies_listener() {
        let listener = Rc::new(RecordingListener::default());
        let mut rock = rock_at(Vector3::new(10.0, 0.0, 0.0));
        rock.set_listener(Some(listener.clone()));

        let hit = Vector3::new(9.0, 0.0, 1.0);
        assert!(rock.handle_overlap(Overlap::Projectile { location: hit }));
        assert!(rock.body().physics);
        assert_eq!(*listener.requests.borrow(), vec![hit]);
    }

    #[test]
    fn test_overlap_ignored_without_listener_or_trigger() {
        let mut rock = rock_at(Vector3::ZERO);
        let projectile = Overlap::Projectile {
            location: Vector3::FORWARD,
        };
        assert!(!rock.handle_overlap(projectile));
        assert!(!rock.body().physics);

        let listener = Rc::new(RecordingListener::default());
        rock.set_listener(Some(listener.clone()));
        rock.set_can_trigger_destroy(false);
        assert!(!rock.handle_overlap(projectile));
        assert!(!rock.handle_overlap(Overlap::Rock));
        assert!(!rock.handle_overlap(Overlap::Other));
        assert!(listener.requests.borrow().is_empty());
    }

    #[test]
    fn test_blast_pushes_away_from_point() {
        let mut rock = rock_at(Vector3::new(3.0, 4.0, 0.0));
        rock.add_blast_force_at_location(Vector3::ZERO, 10.0).unwrap();

        let (impulse, point) = rock.body().impulses[0];
        assert_eq!(point, Vector3::ZERO);
        assert!(impulse.approx_eq(&Vector3::new(6.0, 8.0, 0.0), 1e-5));
    }

    #[test]
    fn test_blast_at_own_location_is_rejected() {
        let location = Vector3::new(1.0, 1.0, 1.0);
        let mut rock = rock_at(location);
        assert_eq!(
            rock.add_blast_force_at_location(location, 10.0),
            Err(VectorError::ZeroLength)
        );
        assert!(rock.body().impulses.is_empty());
    }

    #[test]
    fn test_destroy_then_respawn() {
        let home = Vector3::new(2.0, 0.0, 0.0);
        let mut rock = rock_at(home);
        rock.set_physics(true);
        rock.set_can_trigger_destroy(false);
        rock.body_mut().location = Vector3::new(7.0, 1.0, 0.0);
        rock.body_mut().velocity = Vector3::new(3.0, 4.0, 0.0);
        assert!((rock.velocity_intensity() - 5.0).abs() < 1e-6);

        rock.destroy();
        assert_eq!(rock.body().dissolves, vec![Vector3::new(7.0, 1.0, 0.0)]);
        assert!(!rock.body().visible);
        assert!(!rock.body().collision);

        rock.respawn();
        assert_eq!(rock.body().location, home);
        assert_eq!(rock.velocity(), Vector3::ZERO);
        assert!(!rock.body().physics);
        assert!(rock.body().visible);
        assert!(rock.body().collision);
        assert!(rock.can_trigger_destroy());
        // Dissolve effect follows the rock back home
        assert_eq!(rock.body().dissolve_at, Some(home));
        assert_eq!(rock.body().dissolves.len(), 1);
    }
}
