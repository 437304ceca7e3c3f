//! Headless Mist demo.
//!
//! Drives a tab selector and a multi-slot ripple manager through a scripted
//! click sequence on a wall-clock frame loop and logs what a painter would
//! draw each frame. Run with `RUST_LOG=debug` to see the animation engine's
//! own events.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use mist_anim::{AnimationManager, Direction, Point};
use mist_config::MistConfig;
use mist_controls::TabSelector;

/// Frame pacing of the simulated host loop (~60fps).
const FRAME: Duration = Duration::from_millis(16);

/// Scripted clicks: (time since start, position).
const CLICKS: &[(Duration, Point)] = &[
    (Duration::from_millis(100), Point { x: 120, y: 24 }),
    (Duration::from_millis(500), Point { x: 230, y: 10 }),
    (Duration::from_millis(620), Point { x: 40, y: 30 }),
];

/// Hard stop for the demo loop.
const RUN_LIMIT: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    env_logger::init();

    let config = MistConfig::load();
    log::info!(
        "animation: increment={} easing={} tick={}ms",
        config.animation.increment,
        config.animation.easing.as_str(),
        config.animation.tick_interval_ms
    );

    let mut tabs = TabSelector::from_config(&config);
    tabs.set_tabs(["Home", "Library", "Settings"]);

    // One ripple per click, each growing then fading on its own.
    let mut ripples: AnimationManager<usize> =
        AnimationManager::with_settings(false, config.animation.clone())
            .with_increment(0.08)
            .with_secondary_increment(0.04);
    ripples.on_finished(|m| log::info!("ripples settled ({} left)", m.slot_count()));

    let started = Instant::now();
    let mut last = started;
    let mut pending = CLICKS.iter().enumerate().peekable();

    loop {
        thread::sleep(FRAME);
        let now = Instant::now();
        let elapsed = now - last;
        last = now;
        let clock = now - started;

        while let Some((id, (at, point))) = pending.peek().copied() {
            if *at > clock {
                break;
            }
            pending.next();
            let hit = tabs.mouse_up(*point)?;
            ripples.start_new_animation(Direction::InOutIn, Some(*point), vec![id]);
            log::info!("click {} at ({}, {}) -> tab {:?}", id, point.x, point.y, hit);
        }

        tabs.advance(elapsed);
        ripples.advance(elapsed);

        if tabs.take_redraw() {
            let frame = tabs.frame()?;
            if let Some(indicator) = frame.indicator {
                log::info!(
                    "tabs p={:.3} indicator x={} w={} ripple={:?}",
                    tabs.progress()?,
                    indicator.x,
                    indicator.width,
                    frame.ripple.map(|r| r.diameter)
                );
            }
        }

        if ripples.is_animating() {
            for (index, slot) in ripples.slots().enumerate() {
                log::debug!(
                    "ripple {:?} at ({}, {}) {} p={:.3}",
                    slot.data,
                    slot.source.x,
                    slot.source.y,
                    slot.direction,
                    ripples.progress_at(index)?
                );
            }
        }

        let idle = pending.peek().is_none() && !tabs.is_animating() && !ripples.is_animating();
        if idle || clock > RUN_LIMIT {
            break;
        }
    }

    log::info!(
        "done: selected tab {:?}, {} ripple slots left",
        tabs.selected_index(),
        ripples.slot_count()
    );
    Ok(())
}
