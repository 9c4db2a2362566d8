//! Damped spring used for the drag bounce-back.
//!
//! RK4-integrated so the stiff presets stay stable at frame-sized steps.

use folio_model::DragFeel;

use crate::constants::drag as cfg;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Bounce-back spring for a drag feel.
    pub fn bounce(feel: &DragFeel) -> Self {
        Self::new(feel.bounce_stiffness, feel.bounce_damping, cfg::SPRING_MASS)
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32, target: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Within half a pixel of the target and nearly still.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < cfg::SETTLE_EPSILON_PX
            && self.velocity.abs() < cfg::SETTLE_VELOCITY_PX_S
    }

    /// Advance by `dt` seconds, splitting long frames into small steps.
    /// Snaps to the target once settled.
    pub fn advance(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 && !self.is_settled() {
            let step = remaining.min(cfg::MAX_SPRING_STEP_S);
            self.step(step);
            remaining -= step;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn step(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v =
            self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass.max(f32::EPSILON)
    }
}
