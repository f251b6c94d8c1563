//! Waypoint patrol
//!
//! Drives one named actor around a closed loop of waypoints with
//! [`Transform::seek`].

use patas_math::Vec2;
use serde::{Serialize, Deserialize};
use crate::Transform;

/// Patrol speed in units per second
pub const DEFAULT_SPEED: f32 = 200.0;

/// Distance under which a waypoint counts as reached
pub const DEFAULT_ARRIVAL_RANGE: f32 = 10.0;

/// Name of the actor the patrol drives by default
pub const DEFAULT_SEEKER: &str = "Player";

/// The circuit loop
pub const DEFAULT_WAYPOINTS: [Vec2; 9] = [
    Vec2::new(720.0, 350.0),
    Vec2::new(720.0, 260.0),
    Vec2::new(125.0, 50.0),
    Vec2::new(70.0, 120.0),
    Vec2::new(70.0, 450.0),
    Vec2::new(400.0, 350.0),
    Vec2::new(550.0, 500.0),
    Vec2::new(650.0, 550.0),
    Vec2::new(720.0, 450.0),
];

/// Circular waypoint traversal for the actor named `seeker`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    seeker: String,
    waypoints: Vec<Vec2>,
    current: usize,
    speed: f32,
    arrival_range: f32,
}

impl Default for Patrol {
    fn default() -> Self {
        Self::new(DEFAULT_SEEKER, DEFAULT_WAYPOINTS.to_vec())
    }
}

impl Patrol {
    /// Create a patrol with the default speed and arrival range
    pub fn new(seeker: impl Into<String>, waypoints: Vec<Vec2>) -> Self {
        Self {
            seeker: seeker.into(),
            waypoints,
            current: 0,
            speed: DEFAULT_SPEED,
            arrival_range: DEFAULT_ARRIVAL_RANGE,
        }
    }

    /// Builder: set the speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Builder: set the arrival range
    pub fn with_arrival_range(mut self, range: f32) -> Self {
        self.arrival_range = range;
        self
    }

    /// Name of the actor this patrol moves
    pub fn seeker(&self) -> &str {
        &self.seeker
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Index of the waypoint being sought
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The waypoint being sought, or `None` for an empty path
    pub fn target(&self) -> Option<Vec2> {
        self.waypoints.get(self.current).copied()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn arrival_range(&self) -> f32 {
        self.arrival_range
    }

    /// Seek the current waypoint, then advance if it is now within range
    ///
    /// Returns true when the index advanced this step. A seeker exactly
    /// `arrival_range` away neither moves nor advances.
    pub fn step(&mut self, transform: &mut Transform, dt: f32) -> bool {
        let Some(target) = self.target() else {
            return false;
        };

        transform.seek(target, self.speed, dt, self.arrival_range);

        if (target - transform.position).magnitude() < self.arrival_range {
            self.current = (self.current + 1) % self.waypoints.len();
            log::trace!("Patrol '{}' heading to waypoint {}", self.seeker, self.current);
            true
        } else {
            false
        }
    }
}
