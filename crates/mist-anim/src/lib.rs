//! Tick-driven animation state for Mist controls.
//!
//! This crate provides:
//! - **Easing**: `Linear` and `EaseInOut` progress curves
//! - **AnimationManager**: one or many animation slots advanced on a fixed tick
//! - **Listeners**: synchronous progress and finished callbacks
//! - **TickClock**: turns host frame time into whole ticks
//!
//! The manager only produces dimensionless progress in `[0, 1]` plus the
//! direction, source point and payload of each slot. Painting is left to
//! the consumer.
//!
//! # Architecture
//!
//! ```text
//! AnimationManager<D>
//!   ├── slots: Vec<AnimationSlot<D>>   (progress, direction, source, data)
//!   ├── TickClock                      (start/stop, interval)
//!   └── Listeners                      (Progress, Finished)
//! ```

pub mod clock;
pub mod easing;
pub mod error;
pub mod events;
pub mod manager;
pub mod types;

pub use clock::{DEFAULT_TICK_INTERVAL, TickClock};
pub use easing::EasingFunction;
pub use error::{AnimationError, Result};
pub use events::{AnimationEvent, ListenerId, Listeners};
pub use manager::{AnimationManager, AnimationSettings};
pub use types::{AnimationSlot, Direction, MAX_PROGRESS, MIN_PROGRESS, Point, Rect};
