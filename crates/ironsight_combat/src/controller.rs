//! Player combat state machine
//!
//! The controller decides whether a fire, reload, aim or dead-eye request is
//! honored. It does not own the weapon or the ammo ledger; the character
//! passes them in on each call. Requests that fail a gate are dropped and the
//! call returns `false`. Effects the host must play (sounds, montages, time
//! dilation) are queued as [`CombatEvent`]s.

use crate::config::CombatConfig;
use crate::weapon::WeaponResource;
use ironsight_core::TimerSet;
use ironsight_inventory::AmmoLedger;
use serde::{Deserialize, Serialize};

/// Player combat state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatState {
    /// Free to fire or reload
    Unoccupied,
    /// Waiting for the auto-fire interval
    FireTimerInProgress,
    /// Reload montage playing
    Reloading,
    /// Slow-motion aiming
    DeadEye,
}

impl Default for CombatState {
    fn default() -> Self {
        Self::Unoccupied
    }
}

/// Effects the host should play
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// A round was fired. Trace, sound, muzzle flash and hip-fire montage.
    WeaponFired { ammo_left: u32 },
    /// Play the reload montage at this section
    ReloadStarted { section: String },
    /// Rounds moved from the ledger into the magazine
    ReloadFinished { transferred: u32 },
    /// Aiming flag changed
    AimingChanged { aiming: bool },
    /// Dead-eye toggled; apply the global time dilation
    DeadEyeChanged { active: bool, time_dilation: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CombatTimer {
    AutoFire,
    Reload,
}

/// Gates and sequences the player's combat requests
#[derive(Debug, Clone)]
pub struct CombatController {
    config: CombatConfig,
    state: CombatState,
    trigger_held: bool,
    aim_button_held: bool,
    aiming: bool,
    dead_eye: bool,
    time_dilation: f32,
    timers: TimerSet<CombatTimer>,
    events: Vec<CombatEvent>,
}

impl CombatController {
    pub fn new(config: CombatConfig) -> Self {
        Self {
            config,
            state: CombatState::Unoccupied,
            trigger_held: false,
            aim_button_held: false,
            aiming: false,
            dead_eye: false,
            time_dilation: 1.0,
            timers: TimerSet::new(),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    pub fn is_trigger_held(&self) -> bool {
        self.trigger_held
    }

    pub fn is_dead_eye(&self) -> bool {
        self.dead_eye
    }

    /// Global time dilation requested by dead-eye (1.0 when inactive)
    pub fn time_dilation(&self) -> f32 {
        self.time_dilation
    }

    /// Whether an equipped weapon has rounds in its magazine
    pub fn weapon_has_ammo(weapon: Option<&WeaponResource>) -> bool {
        weapon.map(WeaponResource::has_ammo).unwrap_or(false)
    }

    /// Whether the ledger holds rounds for the equipped weapon
    pub fn ammo_type_carried(weapon: Option<&WeaponResource>, ledger: &AmmoLedger) -> bool {
        weapon
            .map(|w| ledger.carries(w.ammo_type()))
            .unwrap_or(false)
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Trigger pressed: hold it and try to fire
    pub fn fire_pressed(&mut self, weapon: Option<&mut WeaponResource>) -> bool {
        self.trigger_held = true;
        self.fire(weapon)
    }

    /// Trigger released
    pub fn fire_released(&mut self) {
        self.trigger_held = false;
    }

    /// Fire one round.
    /// Requires Unoccupied and a loaded weapon.
    pub fn fire(&mut self, weapon: Option<&mut WeaponResource>) -> bool {
        if self.state != CombatState::Unoccupied {
            return false;
        }
        let Some(weapon) = weapon else {
            return false;
        };
        if !weapon.has_ammo() {
            return false;
        }

        weapon.decrease_ammo();
        self.state = CombatState::FireTimerInProgress;
        self.timers.schedule(CombatTimer::AutoFire, self.config.auto_fire_rate);
        self.events.push(CombatEvent::WeaponFired {
            ammo_left: weapon.ammo(),
        });
        true
    }

    /// Start a reload.
    /// Requires Unoccupied, a weapon that is not full and carried rounds.
    pub fn reload(&mut self, weapon: Option<&WeaponResource>, ledger: &AmmoLedger) -> bool {
        if self.state != CombatState::Unoccupied {
            return false;
        }
        let Some(weapon) = weapon else {
            return false;
        };
        if weapon.is_full() || !ledger.carries(weapon.ammo_type()) {
            log::debug!(
                "Reload dropped: magazine {}, carried {}",
                weapon.ammo_display(),
                ledger.count(weapon.ammo_type())
            );
            return false;
        }

        self.state = CombatState::Reloading;
        self.set_aiming(false);
        if let Some(duration) = self.config.reload_duration {
            self.timers.schedule(CombatTimer::Reload, duration);
        }
        self.events.push(CombatEvent::ReloadStarted {
            section: weapon.reload_section().to_string(),
        });
        true
    }

    /// Reload montage finished. Moves `min(empty space, carried)` rounds
    /// from the ledger into the magazine and returns how many moved.
    /// Ignored unless a reload is in progress.
    pub fn finish_reload(&mut self, weapon: Option<&mut WeaponResource>, ledger: &mut AmmoLedger) -> u32 {
        if self.state != CombatState::Reloading {
            return 0;
        }
        self.timers.cancel(CombatTimer::Reload);
        self.state = CombatState::Unoccupied;
        if self.aim_button_held {
            self.set_aiming(true);
        }

        let Some(weapon) = weapon else {
            return 0;
        };
        let wanted = weapon.empty_space().min(ledger.count(weapon.ammo_type()));
        let transferred = ledger.withdraw(weapon.ammo_type(), wanted);
        weapon.reload_ammo(transferred);

        log::debug!("Reloaded {} rounds, magazine {}", transferred, weapon.ammo_display());
        self.events.push(CombatEvent::ReloadFinished { transferred });
        transferred
    }

    /// Aim button pressed. Aiming does not start while reloading, but
    /// resumes when the reload ends if the button is still held.
    pub fn aiming_pressed(&mut self) {
        self.aim_button_held = true;
        if self.state != CombatState::Reloading {
            self.set_aiming(true);
        }
    }

    /// Aim button released
    pub fn aiming_released(&mut self) {
        self.aim_button_held = false;
        self.set_aiming(false);
    }

    fn set_aiming(&mut self, aiming: bool) {
        if self.aiming != aiming {
            self.aiming = aiming;
            self.events.push(CombatEvent::AimingChanged { aiming });
        }
    }

    /// Toggle dead-eye slow motion. Entering needs Unoccupied; leaving is
    /// always allowed. Returns whether the toggle happened.
    pub fn toggle_dead_eye(&mut self) -> bool {
        if self.dead_eye {
            self.dead_eye = false;
            self.time_dilation = 1.0;
            self.state = CombatState::Unoccupied;
        } else if self.state == CombatState::Unoccupied {
            self.dead_eye = true;
            self.time_dilation = self.config.dead_eye_time_dilation;
            self.state = CombatState::DeadEye;
        } else {
            return false;
        }

        log::debug!("Dead-eye {}", if self.dead_eye { "on" } else { "off" });
        self.events.push(CombatEvent::DeadEyeChanged {
            active: self.dead_eye,
            time_dilation: self.time_dilation,
        });
        true
    }

    /// Advance timers
    pub fn update(&mut self, delta_time: f32, mut weapon: Option<&mut WeaponResource>, ledger: &mut AmmoLedger) {
        for timer in self.timers.update(delta_time) {
            match timer {
                CombatTimer::AutoFire => self.auto_fire_reset(weapon.as_deref_mut(), ledger),
                CombatTimer::Reload => {
                    self.finish_reload(weapon.as_deref_mut(), ledger);
                }
            }
        }
    }

    fn auto_fire_reset(&mut self, weapon: Option<&mut WeaponResource>, ledger: &AmmoLedger) {
        if self.state != CombatState::FireTimerInProgress {
            return;
        }
        self.state = CombatState::Unoccupied;

        if Self::weapon_has_ammo(weapon.as_deref()) {
            if self.trigger_held {
                self.fire(weapon);
            }
        } else {
            self.reload(weapon.as_deref(), ledger);
        }
    }
}

impl Default for CombatController {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}
