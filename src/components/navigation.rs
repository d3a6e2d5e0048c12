use bevy::prelude::*;

/// Distance at which the agent counts a waypoint as reached.
pub const ARRIVAL_RADIUS: f32 = 0.4;

/// Receives motion limits from a car each tick.
pub trait NavigationSink {
    fn set_motion_limits(&mut self, speed: f64, acceleration: f64);
    fn halt(&mut self);
    fn resume(&mut self);
}

/// Steering agent that moves a car toward its current destination.
///
/// The agent only steers in a straight line; it does not plan paths around obstacles.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct NavAgent {
    /// Speed the agent is allowed to reach.
    pub speed: f32,
    /// Rate at which the agent may change its velocity.
    pub acceleration: f32,
    pub destination: Option<Vec2>,
    pub stopped: bool,
    /// Current planar velocity.
    pub velocity: Vec2,
}

impl NavAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(&mut self, destination: Vec2) {
        self.destination = Some(destination);
    }

    /// Straight line distance left to the destination, zero without one.
    pub fn remaining_distance(&self, position: Vec2) -> f32 {
        self.destination
            .map(|destination| destination.distance(position))
            .unwrap_or(0.0)
    }

    pub fn has_arrived(&self, position: Vec2) -> bool {
        self.destination.is_some() && self.remaining_distance(position) < ARRIVAL_RADIUS
    }

    /// Moves `position` toward the destination for `dt` seconds and returns the new position.
    pub fn step(&mut self, position: Vec2, dt: f32) -> Vec2 {
        let Some(destination) = self.destination.filter(|_| !self.stopped) else {
            self.velocity = Vec2::ZERO;
            return position;
        };

        let offset = destination - position;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            self.velocity = Vec2::ZERO;
            return destination;
        }

        let current = self.velocity.length();
        let max_change = self.acceleration * dt;
        let speed = if self.speed > current {
            (current + max_change).min(self.speed)
        } else {
            (current - max_change).max(self.speed)
        };

        let direction = offset / distance;
        self.velocity = direction * speed;

        let travel = speed * dt;
        if travel >= distance {
            destination
        } else {
            position + direction * travel
        }
    }

    /// Heading about Z for the current velocity, sprites face +Y so a quarter turn is removed.
    pub fn heading(&self) -> Option<f32> {
        (self.velocity.length_squared() > 0.01)
            .then(|| self.velocity.y.atan2(self.velocity.x) - std::f32::consts::FRAC_PI_2)
    }
}

impl NavigationSink for NavAgent {
    fn set_motion_limits(&mut self, speed: f64, acceleration: f64) {
        self.speed = speed as f32;
        self.acceleration = acceleration as f32;
    }

    fn halt(&mut self) {
        self.stopped = true;
    }

    fn resume(&mut self) {
        self.stopped = false;
    }
}

/// Waypoints a car loops through.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct WaypointRoute {
    pub waypoints: Vec<Vec2>,
    pub current: usize,
}

impl WaypointRoute {
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self {
            waypoints,
            current: 0,
        }
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.current).copied()
    }

    /// Moves on to the next waypoint, wrapping back to the first after the last.
    pub fn advance(&mut self) -> Option<Vec2> {
        if self.waypoints.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.waypoints.len();
        self.current_waypoint()
    }
}
