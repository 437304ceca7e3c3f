//! Multi-slot animation manager.
//!
//! The `AnimationManager` tracks one or more animation slots, each with its
//! own linear progress, direction, source point and payload. Every tick it:
//! - advances each slot by the configured increment, clamped to `[0, 1]`
//! - stops the tick clock once the slots heading for a bound have all
//!   reached it, raising `Finished`
//! - (multi-slot only) retires slots that reached their terminal bound and
//!   turns `InOutIn` slots around into `InOutOut`
//! - raises `Progress` once
//!
//! A singular manager owns exactly one slot for its whole lifetime and
//! restarts it in place.
//!
//! # Usage
//!
//! ```
//! use mist_anim::{AnimationManager, Direction, EasingFunction};
//!
//! let mut manager: AnimationManager = AnimationManager::singular()
//!     .with_easing(EasingFunction::EaseInOut)
//!     .with_increment(0.25);
//!
//! manager.start(Direction::In);
//! while manager.is_animating() {
//!     manager.tick();
//! }
//! assert_eq!(manager.progress().unwrap(), 1.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::clock::TickClock;
use super::easing::EasingFunction;
use super::error::{AnimationError, Result};
use super::events::{AnimationEvent, ListenerId, Listeners};
use super::types::{AnimationSlot, Direction, MAX_PROGRESS, MIN_PROGRESS, Point};

/// Tunables for an `AnimationManager`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Progress added or removed per tick.
    pub increment: f64,
    /// Progress removed per tick while a slot is in its `InOutOut` phase.
    pub secondary_increment: f64,
    /// Curve applied when progress is read.
    pub easing: EasingFunction,
    /// Whether a new animation may replace one already running.
    pub interrupt_allowed: bool,
    /// Milliseconds between ticks when driven by `advance`.
    pub tick_interval_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            increment: 0.03,
            secondary_increment: 0.03,
            easing: EasingFunction::Linear,
            interrupt_allowed: true,
            tick_interval_ms: 5,
        }
    }
}

/// Tracks concurrent animation slots and advances them on a fixed tick.
///
/// `D` is the payload type attached to each slot at start time.
///
/// Thread safety: the manager is deliberately neither `Send` nor `Sync`;
/// listeners are plain closures and all calls must come from the thread
/// that drives the ticks.
#[derive(Debug)]
pub struct AnimationManager<D = ()> {
    slots: Vec<AnimationSlot<D>>,
    settings: AnimationSettings,
    singular: bool,
    clock: TickClock,
    listeners: Listeners<AnimationManager<D>>,
    ticks: u64,
}

impl<D> AnimationManager<D> {
    /// Create a manager with default settings.
    ///
    /// A singular manager starts with one idle slot (progress 0, direction
    /// `In`); a multi-slot manager starts empty.
    pub fn new(singular: bool) -> Self {
        Self::with_settings(singular, AnimationSettings::default())
    }

    /// Shorthand for `new(true)`.
    pub fn singular() -> Self {
        Self::new(true)
    }

    /// Shorthand for `new(false)`.
    pub fn multi() -> Self {
        Self::new(false)
    }

    pub fn with_settings(singular: bool, settings: AnimationSettings) -> Self {
        let mut slots = Vec::new();
        if singular {
            slots.push(AnimationSlot::new(Direction::In, Point::ORIGIN, Vec::new()));
        }

        let clock = TickClock::new(Duration::from_millis(settings.tick_interval_ms));
        let settings = AnimationSettings {
            tick_interval_ms: clock.interval().as_millis() as u64,
            ..settings
        };

        Self {
            slots,
            clock,
            settings,
            singular,
            listeners: Listeners::new(),
            ticks: 0,
        }
    }

    pub fn with_increment(mut self, increment: f64) -> Self {
        self.settings.increment = increment;
        self
    }

    pub fn with_secondary_increment(mut self, increment: f64) -> Self {
        self.settings.secondary_increment = increment;
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.settings.easing = easing;
        self
    }

    pub fn with_interrupt_allowed(mut self, allowed: bool) -> Self {
        self.settings.interrupt_allowed = allowed;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.clock.set_interval(interval);
        self.settings.tick_interval_ms = self.clock.interval().as_millis() as u64;
        self
    }

    pub fn set_increment(&mut self, increment: f64) {
        self.settings.increment = increment;
    }

    pub fn set_secondary_increment(&mut self, increment: f64) {
        self.settings.secondary_increment = increment;
    }

    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.settings.easing = easing;
    }

    pub fn set_interrupt_allowed(&mut self, allowed: bool) {
        self.settings.interrupt_allowed = allowed;
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Whether the tick clock is currently running.
    pub fn is_animating(&self) -> bool {
        self.clock.is_running()
    }

    /// Number of ticks processed since construction.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn tick_interval(&self) -> Duration {
        self.clock.interval()
    }

    // ========================================================================
    // Starting
    // ========================================================================

    /// Start an animation from the origin with no payload.
    pub fn start(&mut self, direction: Direction) {
        self.start_new_animation(direction, None, Vec::new());
    }

    /// Start a new animation.
    ///
    /// When nothing is running, or interruption is allowed, a singular
    /// manager overwrites the direction, source and payload of its slot
    /// (progress is left where it is; call `set_progress` first to rewind),
    /// while a multi-slot manager appends a fresh slot at the start of
    /// `direction`. Otherwise the request is dropped. Either way the tick
    /// clock is (re)started.
    pub fn start_new_animation(&mut self, direction: Direction, source: Option<Point>, data: Vec<D>) {
        if !self.is_animating() || self.settings.interrupt_allowed {
            let source = source.unwrap_or(Point::ORIGIN);
            if self.singular && !self.slots.is_empty() {
                let slot = &mut self.slots[0];
                slot.direction = direction;
                slot.source = source;
                slot.data = data;
            } else {
                self.slots.push(AnimationSlot::new(direction, source, data));
            }
            debug!(
                %direction,
                x = source.x,
                y = source.y,
                slots = self.slots.len(),
                "animation started"
            );
        } else {
            trace!(%direction, "animation running and not interruptible; start ignored");
        }

        self.clock.start();
    }

    // ========================================================================
    // Ticking
    // ========================================================================

    /// Feed elapsed wall time to the tick clock and run every tick that is
    /// due. Stops early if a tick stops the clock. Returns the number of
    /// ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.clock.accumulate(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if !self.clock.is_running() {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Advance every slot by one step.
    ///
    /// Normally invoked through `advance`; calling it directly processes the
    /// slots whether or not the clock is running.
    pub fn tick(&mut self) {
        self.ticks += 1;

        let mut index = 0;
        while index < self.slots.len() {
            self.update_progress(index);

            if !self.singular {
                let retire = {
                    let slot = &mut self.slots[index];
                    if slot.direction == Direction::InOutIn && slot.progress == MAX_PROGRESS {
                        slot.direction = Direction::InOutOut;
                        false
                    } else {
                        slot.at_terminal_bound()
                    }
                };

                if retire {
                    let slot = self.slots.remove(index);
                    debug!(
                        index,
                        direction = %slot.direction,
                        remaining = self.slots.len(),
                        "animation slot retired"
                    );
                    // The next slot shifted into `index`.
                    continue;
                }
            }

            index += 1;
        }

        trace!(tick = self.ticks, slots = self.slots.len(), "animation tick");
        self.emit(AnimationEvent::Progress);
    }

    fn update_progress(&mut self, index: usize) {
        let increment = self.settings.increment;
        let secondary = self.settings.secondary_increment;
        let slot = &mut self.slots[index];

        if slot.direction.is_increasing() {
            slot.progress += increment;
            if slot.progress >= MAX_PROGRESS {
                slot.progress = MAX_PROGRESS;
                if self.rising_slots_settled() {
                    self.halt();
                }
            } else if slot.progress < MIN_PROGRESS {
                slot.progress = MIN_PROGRESS;
            }
        } else {
            let step = if slot.direction == Direction::InOutOut {
                secondary
            } else {
                increment
            };
            slot.progress -= step;
            if slot.progress <= MIN_PROGRESS {
                slot.progress = MIN_PROGRESS;
                if self.falling_slots_settled() {
                    self.halt();
                }
            } else if slot.progress > MAX_PROGRESS {
                slot.progress = MAX_PROGRESS;
            }
        }
    }

    /// Checked when a slot tops out. `Out` slots are not consulted, and any
    /// `InOutIn` slot keeps the clock running.
    fn rising_slots_settled(&self) -> bool {
        self.slots.iter().all(|slot| match slot.direction {
            Direction::InOutIn => false,
            Direction::In => slot.progress == MAX_PROGRESS,
            Direction::Out | Direction::InOutOut => true,
        })
    }

    /// Checked when a slot bottoms out. `In` slots are not consulted, and any
    /// `InOutIn` slot keeps the clock running.
    fn falling_slots_settled(&self) -> bool {
        self.slots.iter().all(|slot| match slot.direction {
            Direction::InOutIn => false,
            Direction::Out | Direction::InOutOut => slot.progress == MIN_PROGRESS,
            Direction::In => true,
        })
    }

    fn halt(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        self.clock.stop();
        debug!(tick = self.ticks, slots = self.slots.len(), "animation finished");
        self.emit(AnimationEvent::Finished);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Eased progress of the only slot of a singular manager.
    ///
    /// Easing clamps its input, so a raw value stored out of range through
    /// `set_progress` reads back as the nearest bound even with `Linear`.
    /// Use `raw_progress_at` to see the stored value.
    pub fn progress(&self) -> Result<f64> {
        let slot = self.singular_slot()?;
        Ok(self.settings.easing.evaluate(slot.progress))
    }

    /// Eased progress of the slot at `index`.
    pub fn progress_at(&self, index: usize) -> Result<f64> {
        let slot = self.slot_at(index)?;
        Ok(self.settings.easing.evaluate(slot.progress))
    }

    /// Stored linear progress of the slot at `index`, without easing.
    pub fn raw_progress_at(&self, index: usize) -> Result<f64> {
        Ok(self.slot_at(index)?.progress)
    }

    /// Source point of the only slot of a singular manager.
    pub fn source(&self) -> Result<Point> {
        Ok(self.singular_slot()?.source)
    }

    pub fn source_at(&self, index: usize) -> Result<Point> {
        Ok(self.slot_at(index)?.source)
    }

    pub fn direction_at(&self, index: usize) -> Result<Direction> {
        Ok(self.slot_at(index)?.direction)
    }

    /// Payload attached when the slot at `index` was started.
    pub fn data_at(&self, index: usize) -> Result<&[D]> {
        Ok(&self.slot_at(index)?.data)
    }

    pub fn slot_at(&self, index: usize) -> Result<&AnimationSlot<D>> {
        self.slots.get(index).ok_or(AnimationError::IndexOutOfRange {
            index,
            count: self.slots.len(),
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> impl Iterator<Item = &AnimationSlot<D>> + '_ {
        self.slots.iter()
    }

    /// Overwrite the raw progress of a singular manager's slot.
    ///
    /// The value is stored as given; keeping it in `[0, 1]` is up to the
    /// caller. `progress()` still reports it clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f64) -> Result<()> {
        self.require_singular()?;
        let slot = self
            .slots
            .first_mut()
            .ok_or(AnimationError::InvalidState("singular manager has no slot"))?;
        slot.progress = progress;
        Ok(())
    }

    fn require_singular(&self) -> Result<()> {
        if self.singular {
            Ok(())
        } else {
            Err(AnimationError::InvalidOperationForMode(
                "animation manager is not singular",
            ))
        }
    }

    fn singular_slot(&self) -> Result<&AnimationSlot<D>> {
        self.require_singular()?;
        self.slots
            .first()
            .ok_or(AnimationError::InvalidState("singular manager has no slot"))
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Register a callback raised once per tick.
    pub fn on_progress<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&AnimationManager<D>) + 'static,
    {
        self.listeners.subscribe(AnimationEvent::Progress, callback)
    }

    /// Register a callback raised when the tick clock stops.
    pub fn on_finished<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&AnimationManager<D>) + 'static,
    {
        self.listeners.subscribe(AnimationEvent::Finished, callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn emit(&mut self, event: AnimationEvent) {
        if self.listeners.count_for(event) == 0 {
            return;
        }
        // Listeners get `&self`, so they cannot be borrowed from `self` while
        // they run.
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.emit(event, self);
        self.listeners = listeners;
    }
}

impl<D> Default for AnimationManager<D> {
    fn default() -> Self {
        Self::singular()
    }
}

static_assertions::assert_not_impl_any!(AnimationManager<()>: Send, Sync);
static_assertions::assert_impl_all!(AnimationSettings: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn counter<D: 'static>(manager: &mut AnimationManager<D>, event: AnimationEvent) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let callback = move |_: &AnimationManager<D>| c.set(c.get() + 1);
        match event {
            AnimationEvent::Progress => manager.on_progress(callback),
            AnimationEvent::Finished => manager.on_finished(callback),
        };
        count
    }

    #[test]
    fn test_defaults() {
        let manager: AnimationManager = AnimationManager::new(true);
        let settings = manager.settings();
        assert_eq!(settings.increment, 0.03);
        assert_eq!(settings.secondary_increment, 0.03);
        assert_eq!(settings.easing, EasingFunction::Linear);
        assert!(settings.interrupt_allowed);
        assert_eq!(manager.tick_interval(), Duration::from_millis(5));
        assert!(!manager.is_animating());
    }

    #[test]
    fn test_singular_starts_with_idle_slot() {
        let manager: AnimationManager = AnimationManager::singular();
        assert_eq!(manager.slot_count(), 1);
        assert_eq!(manager.progress().unwrap(), 0.0);
        assert_eq!(manager.direction_at(0).unwrap(), Direction::In);
        assert_eq!(manager.source().unwrap(), Point::ORIGIN);
        assert!(manager.data_at(0).unwrap().is_empty());
    }

    #[test]
    fn test_multi_starts_empty() {
        let manager: AnimationManager = AnimationManager::multi();
        assert_eq!(manager.slot_count(), 0);
        assert_eq!(
            manager.progress_at(0),
            Err(AnimationError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_start_runs_clock() {
        let mut manager: AnimationManager = AnimationManager::multi();
        manager.start(Direction::In);
        assert!(manager.is_animating());
        assert_eq!(manager.slot_count(), 1);
        assert_eq!(manager.raw_progress_at(0).unwrap(), 0.0);
    }

    #[test]
    fn test_new_slot_initial_progress() {
        let mut manager: AnimationManager = AnimationManager::multi();
        for direction in Direction::ALL {
            manager.start(direction);
        }
        let raw: Vec<f64> = manager.slots().map(|s| s.progress).collect();
        assert_eq!(raw, vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_singular_restart_keeps_progress() {
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(0.25);
        manager.start(Direction::In);
        manager.tick();
        assert_eq!(manager.raw_progress_at(0).unwrap(), 0.25);

        manager.start_new_animation(Direction::Out, Some(Point::new(4, 2)), Vec::new());
        assert_eq!(manager.raw_progress_at(0).unwrap(), 0.25);
        assert_eq!(manager.direction_at(0).unwrap(), Direction::Out);
        assert_eq!(manager.source().unwrap(), Point::new(4, 2));
    }

    #[test]
    fn test_singular_restart_replaces_payload() {
        let mut manager: AnimationManager<&str> = AnimationManager::singular();
        manager.start_new_animation(Direction::In, None, vec!["a", "b"]);
        manager.start_new_animation(Direction::In, None, vec!["c"]);
        assert_eq!(manager.data_at(0).unwrap(), &["c"]);
        assert_eq!(manager.slot_count(), 1);
    }

    #[test]
    fn test_uninterruptible_start_is_ignored_while_running() {
        let mut manager: AnimationManager = AnimationManager::multi().with_interrupt_allowed(false);
        manager.start(Direction::In);
        manager.start(Direction::Out);
        assert_eq!(manager.slot_count(), 1);
        assert_eq!(manager.direction_at(0).unwrap(), Direction::In);
        assert!(manager.is_animating());
    }

    #[test]
    fn test_uninterruptible_start_after_finish() {
        let mut manager: AnimationManager =
            AnimationManager::singular().with_interrupt_allowed(false).with_increment(1.0);
        manager.start(Direction::In);
        manager.tick();
        assert!(!manager.is_animating());

        manager.start(Direction::Out);
        assert_eq!(manager.direction_at(0).unwrap(), Direction::Out);
        assert!(manager.is_animating());
    }

    #[test]
    fn test_progress_is_eased() {
        let mut manager: AnimationManager = AnimationManager::singular()
            .with_increment(0.25)
            .with_easing(EasingFunction::EaseInOut);
        manager.start(Direction::In);
        manager.tick();

        assert_eq!(manager.raw_progress_at(0).unwrap(), 0.25);
        let eased = manager.progress().unwrap();
        assert_eq!(eased, EasingFunction::EaseInOut.evaluate(0.25));
        assert!(eased < 0.25);
    }

    #[test]
    fn test_in_out_uses_secondary_increment() {
        let mut manager: AnimationManager = AnimationManager::multi()
            .with_increment(0.5)
            .with_secondary_increment(0.25);
        manager.start(Direction::InOutIn);
        manager.tick();
        manager.tick();
        assert_eq!(manager.direction_at(0).unwrap(), Direction::InOutOut);
        assert_eq!(manager.raw_progress_at(0).unwrap(), 1.0);

        manager.tick();
        assert_eq!(manager.raw_progress_at(0).unwrap(), 0.75);
    }

    #[test]
    fn test_singular_in_out_never_turns_around() {
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(1.0);
        manager.start(Direction::InOutIn);
        for _ in 0..5 {
            manager.tick();
        }
        assert_eq!(manager.direction_at(0).unwrap(), Direction::InOutIn);
        assert_eq!(manager.raw_progress_at(0).unwrap(), 1.0);
        assert!(manager.is_animating());
    }

    #[test]
    fn test_finished_fires_before_progress() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(1.0);

        let log = Rc::clone(&order);
        manager.on_progress(move |m| log.borrow_mut().push(("progress", m.is_animating())));
        let log = Rc::clone(&order);
        manager.on_finished(move |m| log.borrow_mut().push(("finished", m.is_animating())));

        manager.start(Direction::In);
        manager.tick();

        assert_eq!(*order.borrow(), vec![("finished", false), ("progress", false)]);
    }

    #[test]
    fn test_progress_fires_every_tick() {
        let mut manager: AnimationManager = AnimationManager::singular();
        let progress = counter(&mut manager, AnimationEvent::Progress);
        // No slot changes direction or bound here, the notification still fires.
        manager.tick();
        manager.tick();
        assert_eq!(progress.get(), 2);
    }

    #[test]
    fn test_finished_only_on_running_to_stopped() {
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(1.0);
        let finished = counter(&mut manager, AnimationEvent::Finished);

        manager.start(Direction::In);
        manager.tick();
        manager.tick();
        manager.tick();
        assert_eq!(finished.get(), 1);

        manager.start(Direction::Out);
        manager.tick();
        assert_eq!(finished.get(), 2);
    }

    #[test]
    fn test_listener_sees_current_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(0.5);
        let log = Rc::clone(&seen);
        manager.on_progress(move |m| log.borrow_mut().push(m.progress().unwrap()));

        manager.start(Direction::In);
        manager.tick();
        manager.tick();
        assert_eq!(*seen.borrow(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut manager: AnimationManager = AnimationManager::singular();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let id = manager.on_progress(move |_| c.set(c.get() + 1));

        manager.tick();
        assert!(manager.unsubscribe(id));
        manager.tick();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_set_progress() {
        let mut manager: AnimationManager = AnimationManager::singular();
        manager.set_progress(0.75).unwrap();
        assert_eq!(manager.raw_progress_at(0).unwrap(), 0.75);

        // Not clamped on the way in; easing clamps on the way out.
        manager.set_progress(3.0).unwrap();
        assert_eq!(manager.raw_progress_at(0).unwrap(), 3.0);
        assert_eq!(manager.progress().unwrap(), 1.0);

        manager.set_progress(-2.0).unwrap();
        assert_eq!(manager.raw_progress_at(0).unwrap(), -2.0);
        assert_eq!(manager.progress().unwrap(), 0.0);
    }

    #[test]
    fn test_singular_only_operations_reject_multi() {
        let mut manager: AnimationManager = AnimationManager::multi();
        manager.start(Direction::In);
        let mode_error = AnimationError::InvalidOperationForMode("animation manager is not singular");
        assert_eq!(manager.set_progress(0.0), Err(mode_error.clone()));
        assert_eq!(manager.progress(), Err(mode_error.clone()));
        assert_eq!(manager.source(), Err(mode_error));
    }

    #[test]
    fn test_advance_runs_due_ticks() {
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(0.1);
        // Stopped clock: elapsed time is ignored.
        assert_eq!(manager.advance(Duration::from_millis(50)), 0);

        manager.start(Direction::In);
        assert_eq!(manager.advance(Duration::from_millis(12)), 2);
        assert!((manager.raw_progress_at(0).unwrap() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_advance_stops_when_finished() {
        let mut manager: AnimationManager = AnimationManager::singular().with_increment(0.5);
        manager.start(Direction::In);
        assert_eq!(manager.advance(Duration::from_millis(100)), 2);
        assert!(!manager.is_animating());
        assert_eq!(manager.tick_count(), 2);
    }

    #[test]
    fn test_custom_tick_interval() {
        let mut manager: AnimationManager = AnimationManager::singular()
            .with_increment(0.1)
            .with_tick_interval(Duration::from_millis(16));
        assert_eq!(manager.settings().tick_interval_ms, 16);
        manager.start(Direction::In);
        assert_eq!(manager.advance(Duration::from_millis(40)), 2);
    }

    #[test]
    fn test_zero_tick_interval_setting_is_raised() {
        let settings = AnimationSettings {
            tick_interval_ms: 0,
            ..AnimationSettings::default()
        };
        let manager: AnimationManager = AnimationManager::with_settings(true, settings);
        assert_eq!(manager.tick_interval(), Duration::from_millis(1));
        assert_eq!(manager.settings().tick_interval_ms, 1);
    }
}
