//! Player health and death

use ironsight_combat::Health;
use ironsight_core::{ActorId, TimerSet};

/// Health and death notifications
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VitalsEvent {
    /// Damage landed
    Damaged { amount: f32, remaining: f32 },
    /// Health reached zero. Play the death montage.
    Died { instigator: Option<ActorId> },
    /// Death montage finished; input is now disabled
    DeathFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VitalsTimer {
    Death,
}

/// Player health, the death sequence and the input gate
#[derive(Debug, Clone)]
pub struct PlayerVitals {
    health: Health,
    input_enabled: bool,
    death_duration: Option<f32>,
    timers: TimerSet<VitalsTimer>,
    events: Vec<VitalsEvent>,
}

impl PlayerVitals {
    /// `death_duration` is how long the death montage runs before input is
    /// cut. `None` waits for [`PlayerVitals::finish_death`].
    pub fn new(max_health: f32, death_duration: Option<f32>) -> Self {
        Self {
            health: Health::new(max_health),
            input_enabled: true,
            death_duration,
            timers: TimerSet::new(),
            events: Vec::new(),
        }
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<VitalsEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply damage. Returns the damage taken; zero once dead.
    pub fn take_damage(&mut self, amount: f32, instigator: Option<ActorId>) -> f32 {
        let (dealt, died) = self.health.apply_damage(amount);
        if dealt > 0.0 {
            self.events.push(VitalsEvent::Damaged {
                amount: dealt,
                remaining: self.health.current(),
            });
        }
        if died {
            log::info!("Player died");
            self.events.push(VitalsEvent::Died { instigator });
            if let Some(duration) = self.death_duration {
                self.timers.schedule(VitalsTimer::Death, duration);
            }
        }
        dealt
    }

    /// Death montage ended: freeze the player
    pub fn finish_death(&mut self) {
        if !self.is_dead() || !self.input_enabled {
            return;
        }
        self.timers.cancel(VitalsTimer::Death);
        self.input_enabled = false;
        self.events.push(VitalsEvent::DeathFinished);
    }

    /// Advance timers
    pub fn update(&mut self, delta_time: f32) {
        for timer in self.timers.update(delta_time) {
            match timer {
                VitalsTimer::Death => self.finish_death(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dies_once() {
        let enemy = ActorId::new(3, 0);
        let mut vitals = PlayerVitals::new(30.0, None);

        assert_eq!(vitals.take_damage(20.0, Some(enemy)), 20.0);
        assert_eq!(vitals.take_damage(20.0, Some(enemy)), 10.0);
        assert_eq!(vitals.take_damage(20.0, Some(enemy)), 0.0);
        assert_eq!(vitals.health().current(), 0.0);

        let deaths: Vec<_> = vitals
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, VitalsEvent::Died { .. }))
            .collect();
        assert_eq!(deaths, vec![VitalsEvent::Died { instigator: Some(enemy) }]);
    }

    #[test]
    fn test_death_timer_disables_input() {
        let mut vitals = PlayerVitals::new(10.0, Some(1.5));
        vitals.take_damage(10.0, None);
        assert!(vitals.input_enabled());

        vitals.update(1.0);
        assert!(vitals.input_enabled());
        vitals.update(0.6);
        assert!(!vitals.input_enabled());
        assert!(vitals.drain_events().contains(&VitalsEvent::DeathFinished));
    }

    #[test]
    fn test_finish_death_needs_death() {
        let mut vitals = PlayerVitals::new(10.0, None);
        vitals.finish_death();
        assert!(vitals.input_enabled());
    }
}
