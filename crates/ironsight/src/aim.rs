//! Camera zoom, look rates and crosshair spread

use crate::config::AimConfig;
use ironsight_core::TimerSet;
use ironsight_math::{finterp_to, map_range_clamped, Vec2, Vec3};

const BASE_SPREAD: f32 = 0.5;
const IN_AIR_SPREAD: f32 = 2.25;
const AIM_SPREAD: f32 = 0.6;
const SHOOTING_SPREAD: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AimTimer {
    ShootWindow,
}

/// Turn and look-up rate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookRates {
    pub turn: f32,
    pub look_up: f32,
}

/// Per-frame aim feedback
#[derive(Debug, Clone)]
pub struct AimFeel {
    config: AimConfig,
    fov: f32,
    velocity_factor: f32,
    in_air_factor: f32,
    aim_factor: f32,
    shooting_factor: f32,
    firing_bullet: bool,
    timers: TimerSet<AimTimer>,
}

impl AimFeel {
    pub fn new(config: AimConfig) -> Self {
        Self {
            fov: config.default_fov,
            config,
            velocity_factor: 0.0,
            in_air_factor: 0.0,
            aim_factor: 0.0,
            shooting_factor: 0.0,
            firing_bullet: false,
            timers: TimerSet::new(),
        }
    }

    /// Current camera field of view
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Crosshair spread multiplier
    pub fn crosshair_spread(&self) -> f32 {
        BASE_SPREAD + self.velocity_factor + self.in_air_factor - self.aim_factor + self.shooting_factor
    }

    /// Whether the post-shot spread window is open
    pub fn is_firing_bullet(&self) -> bool {
        self.firing_bullet
    }

    /// Controller look rates for the aiming state
    pub fn look_rates(&self, aiming: bool) -> LookRates {
        if aiming {
            LookRates {
                turn: self.config.aiming_turn_rate,
                look_up: self.config.aiming_look_up_rate,
            }
        } else {
            LookRates {
                turn: self.config.hip_turn_rate,
                look_up: self.config.hip_look_up_rate,
            }
        }
    }

    /// Mouse sensitivity scale for the aiming state
    pub fn mouse_scale(&self, aiming: bool) -> LookRates {
        if aiming {
            LookRates {
                turn: self.config.mouse_aiming_turn_rate,
                look_up: self.config.mouse_aiming_look_up_rate,
            }
        } else {
            LookRates {
                turn: self.config.mouse_hip_turn_rate,
                look_up: self.config.mouse_hip_look_up_rate,
            }
        }
    }

    /// A shot went off: widen the crosshair for a short window
    pub fn start_bullet_fire(&mut self) {
        self.firing_bullet = true;
        self.timers
            .schedule(AimTimer::ShootWindow, self.config.shoot_time_duration);
    }

    /// Ease zoom and spread toward their targets
    pub fn update(&mut self, delta_time: f32, aiming: bool, velocity: Vec3, in_air: bool) {
        let target_fov = if aiming {
            self.config.zoomed_fov
        } else {
            self.config.default_fov
        };
        self.fov = finterp_to(self.fov, target_fov, delta_time, self.config.zoom_interp_speed);

        self.velocity_factor = map_range_clamped(
            Vec2::new(0.0, self.config.max_walk_speed),
            Vec2::new(0.0, 1.0),
            velocity.length_2d(),
        );

        self.in_air_factor = if in_air {
            finterp_to(self.in_air_factor, IN_AIR_SPREAD, delta_time, 2.25)
        } else {
            finterp_to(self.in_air_factor, 0.0, delta_time, 30.0)
        };

        let aim_target = if aiming { AIM_SPREAD } else { 0.0 };
        self.aim_factor = finterp_to(self.aim_factor, aim_target, delta_time, 30.0);

        let shooting_target = if self.firing_bullet { SHOOTING_SPREAD } else { 0.0 };
        self.shooting_factor = finterp_to(self.shooting_factor, shooting_target, delta_time, 60.0);

        for timer in self.timers.update(delta_time) {
            match timer {
                AimTimer::ShootWindow => self.firing_bullet = false,
            }
        }
    }
}

impl Default for AimFeel {
    fn default() -> Self {
        Self::new(AimConfig::default())
    }
}
