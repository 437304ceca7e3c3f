//! Animation notifications.
//!
//! Listeners are plain callbacks registered for one `AnimationEvent` kind.
//! They run synchronously, in registration order, on whatever thread drives
//! the manager's tick. Nothing is queued.
//!
//! # Usage
//!
//! ```
//! use mist_anim::{AnimationManager, Direction};
//!
//! let mut manager: AnimationManager = AnimationManager::singular();
//! let id = manager.on_progress(|m| {
//!     let _ = m.progress();
//! });
//! manager.start(Direction::In);
//! manager.tick();
//! assert!(manager.unsubscribe(id));
//! ```

use serde::{Deserialize, Serialize};

/// Notification raised by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationEvent {
    /// Raised once per tick, after every slot has been advanced.
    Progress,
    /// Raised when the tick clock goes from running to stopped.
    Finished,
}

/// Handle returned by `Listeners::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback<M> = Box<dyn FnMut(&M)>;

struct Listener<M> {
    id: ListenerId,
    event: AnimationEvent,
    callback: Callback<M>,
}

/// Ordered registry of callbacks receiving a shared reference to `M`.
pub struct Listeners<M> {
    entries: Vec<Listener<M>>,
    next_id: u64,
}

impl<M> Default for Listeners<M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<M> std::fmt::Debug for Listeners<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<M> Listeners<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `event`.
    pub fn subscribe<F>(&mut self, event: AnimationEvent, callback: F) -> ListenerId
    where
        F: FnMut(&M) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            event,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of listeners registered for one event kind.
    pub fn count_for(&self, event: AnimationEvent) -> usize {
        self.entries.iter().filter(|l| l.event == event).count()
    }

    /// Invoke every listener registered for `event`.
    pub fn emit(&mut self, event: AnimationEvent, source: &M) {
        for listener in self.entries.iter_mut().filter(|l| l.event == event) {
            (listener.callback)(source);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_only_matching_event() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<u32> = Listeners::new();

        let log = Rc::clone(&seen);
        listeners.subscribe(AnimationEvent::Progress, move |v| {
            log.borrow_mut().push(("progress", *v))
        });
        let log = Rc::clone(&seen);
        listeners.subscribe(AnimationEvent::Finished, move |v| {
            log.borrow_mut().push(("finished", *v))
        });

        listeners.emit(AnimationEvent::Progress, &7);
        listeners.emit(AnimationEvent::Finished, &8);

        assert_eq!(*seen.borrow(), vec![("progress", 7), ("finished", 8)]);
        assert_eq!(listeners.count_for(AnimationEvent::Progress), 1);
    }

    #[test]
    fn test_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<()> = Listeners::new();
        for n in 0..3 {
            let log = Rc::clone(&seen);
            listeners.subscribe(AnimationEvent::Progress, move |_| log.borrow_mut().push(n));
        }

        listeners.emit(AnimationEvent::Progress, &());
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut listeners: Listeners<()> = Listeners::new();
        let a = listeners.subscribe(AnimationEvent::Progress, |_| {});
        let b = listeners.subscribe(AnimationEvent::Finished, |_| {});
        assert_ne!(a, b);
        assert_eq!(listeners.len(), 2);

        assert!(listeners.unsubscribe(a));
        assert!(!listeners.unsubscribe(a));
        assert_eq!(listeners.len(), 1);

        listeners.clear();
        assert!(listeners.is_empty());
    }
}
