//! Random world events: blizzard, sunny spell, energy bar.
//!
//! At most one event is active. While one runs its countdown ticks down
//! and no new roll is made.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use summit_core::config::GameConfig;
use summit_core::enums::EventKind;
use summit_core::events::GameEvent;

use crate::timers::TimerQueue;
use crate::world::WorldState;

/// The event currently in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveEvent {
    pub kind: EventKind,
    pub remaining_frames: u32,
}

/// Count down the active event, or roll for a new one.
pub fn run(
    world: &mut WorldState,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    timers: &mut TimerQueue,
    tick: u64,
    events: &mut Vec<GameEvent>,
) {
    if let Some(active) = world.active_event.as_mut() {
        active.remaining_frames = active.remaining_frames.saturating_sub(1);
        if active.remaining_frames == 0 {
            clear(world, timers, events);
        }
        return;
    }

    if rng.gen::<f64>() >= config.event_chance {
        return;
    }
    let kind = pick(rng.gen::<f64>(), config);
    start(world, kind, config, timers, tick, events);
}

/// Map the second roll onto the weighted bands.
pub fn pick(roll: f64, config: &GameConfig) -> EventKind {
    if roll < config.blizzard_band {
        EventKind::Blizzard
    } else if roll < config.sunny_band {
        EventKind::Sunny
    } else {
        EventKind::EnergyBar
    }
}

/// Put `kind` into effect. Replaces nothing: callers only start an event
/// when the slot is empty.
pub fn start(
    world: &mut WorldState,
    kind: EventKind,
    config: &GameConfig,
    timers: &mut TimerQueue,
    tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let remaining_frames = match kind {
        EventKind::Blizzard => {
            world.player.climb_multiplier = config.blizzard_multiplier;
            world
                .notice
                .post(timers, "Blizzard! Climbing is harder.", tick);
            config.blizzard_frames
        }
        EventKind::Sunny => {
            world.player.climb_multiplier = config.sunny_multiplier;
            world
                .notice
                .post(timers, "Sunny Spell! Easier climbing!", tick);
            config.sunny_frames
        }
        EventKind::EnergyBar => {
            world.player.add_energy(config.energy_bar_amount);
            world.notice.post_timed(
                timers,
                format!("Found an energy bar! Energy +{}.", config.energy_bar_amount),
                tick,
                config.frames(config.notice_ms),
            );
            config.energy_bar_frames
        }
    };

    tracing::debug!(?kind, remaining_frames, "world event started");
    world.active_event = Some(ActiveEvent {
        kind,
        remaining_frames,
    });
    events.push(GameEvent::WorldEventStarted { kind });
}

/// End the active event, if any, and restore the neutral multiplier.
pub fn clear(world: &mut WorldState, timers: &mut TimerQueue, events: &mut Vec<GameEvent>) {
    let Some(active) = world.active_event.take() else {
        return;
    };
    if active.kind.is_weather() {
        world.player.climb_multiplier = 1.0;
    }
    world.notice.clear(timers);
    tracing::debug!(kind = ?active.kind, "world event ended");
    events.push(GameEvent::WorldEventEnded { kind: active.kind });
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use summit_core::level::Level;

    use super::*;

    fn setup() -> (WorldState, GameConfig, TimerQueue) {
        let config = GameConfig::default();
        (
            WorldState::new(&config, Level::default()),
            config,
            TimerQueue::new(),
        )
    }

    #[test]
    fn bands_split_forty_thirty_thirty() {
        let config = GameConfig::default();
        assert_eq!(pick(0.0, &config), EventKind::Blizzard);
        assert_eq!(pick(0.399, &config), EventKind::Blizzard);
        assert_eq!(pick(0.4, &config), EventKind::Sunny);
        assert_eq!(pick(0.699, &config), EventKind::Sunny);
        assert_eq!(pick(0.7, &config), EventKind::EnergyBar);
        assert_eq!(pick(0.999, &config), EventKind::EnergyBar);
    }

    #[test]
    fn blizzard_reverts_exactly_at_zero() {
        let (mut world, mut config, mut timers) = setup();
        config.blizzard_frames = 3;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();

        start(&mut world, EventKind::Blizzard, &config, &mut timers, 0, &mut events);
        assert_eq!(world.player.climb_multiplier, 0.6);

        run(&mut world, &mut rng, &config, &mut timers, 1, &mut events);
        run(&mut world, &mut rng, &config, &mut timers, 2, &mut events);
        assert_eq!(world.player.climb_multiplier, 0.6);
        assert_eq!(world.active_event.map(|e| e.remaining_frames), Some(1));

        run(&mut world, &mut rng, &config, &mut timers, 3, &mut events);
        assert_eq!(world.player.climb_multiplier, 1.0);
        assert!(world.active_event.is_none());
        assert!(world.notice.current().is_none());
        assert_eq!(
            events.last(),
            Some(&GameEvent::WorldEventEnded {
                kind: EventKind::Blizzard
            })
        );
    }

    #[test]
    fn energy_bar_clamps_and_keeps_multiplier() {
        let (mut world, config, mut timers) = setup();
        world.player.energy = 90.0;
        start(
            &mut world,
            EventKind::EnergyBar,
            &config,
            &mut timers,
            0,
            &mut Vec::new(),
        );
        assert_eq!(world.player.energy, 100.0);
        assert_eq!(world.player.climb_multiplier, 1.0);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn no_roll_while_active() {
        let (mut world, mut config, mut timers) = setup();
        config.event_chance = 1.0;
        config.sunny_frames = 1_000;
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut events = Vec::new();

        run(&mut world, &mut rng, &config, &mut timers, 0, &mut events);
        assert!(world.active_event.is_some());
        for tick in 1..200 {
            run(&mut world, &mut rng, &config, &mut timers, tick, &mut events);
        }
        let started = events
            .iter()
            .filter(|e| matches!(e, GameEvent::WorldEventStarted { .. }))
            .count();
        // Blizzard lasts 300, sunny 1000, energy bar 120: at most two starts
        // fit in 200 frames, and only after an energy bar.
        assert!(started <= 2, "too many events started: {started}");
    }

    #[test]
    fn zero_chance_never_fires() {
        let (mut world, mut config, mut timers) = setup();
        config.event_chance = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut events = Vec::new();
        for tick in 0..10_000 {
            run(&mut world, &mut rng, &config, &mut timers, tick, &mut events);
        }
        assert!(events.is_empty());
    }
}
