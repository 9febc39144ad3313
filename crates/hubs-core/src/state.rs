//! Reactive input state.
//!
//! Holds the three input values and derives the hub depth from them on
//! every read. Observers are notified synchronously after each commit and
//! receive the current value as soon as they subscribe.

use std::fmt;

use hubs_model::{InputField, StateSnapshot};

use crate::calc::compute_hub_depth;

/// Handle returned by [`ReactiveState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(f32)>;

pub struct ReactiveState {
    values: StateSnapshot,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for ReactiveState {
    fn default() -> Self {
        Self::from_snapshot(StateSnapshot::default())
    }
}

impl fmt::Debug for ReactiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveState")
            .field("values", &self.values)
            .field("hub_depth", &self.hub_depth())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ReactiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from persisted values. The hub depth is recomputed, never
    /// restored.
    pub fn from_snapshot(values: StateSnapshot) -> Self {
        Self {
            values,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn lift(&self) -> f32 {
        self.values.lift_value
    }

    pub fn slope(&self) -> f32 {
        self.values.slope_value
    }

    pub fn width(&self) -> f32 {
        self.values.width_value
    }

    pub fn value(&self, field: InputField) -> f32 {
        self.values.get(field)
    }

    pub fn set_lift(&mut self, value: f32) {
        self.set(InputField::Lift, value);
    }

    pub fn set_slope(&mut self, value: f32) {
        self.set(InputField::Slope, value);
    }

    pub fn set_width(&mut self, value: f32) {
        self.set(InputField::Width, value);
    }

    /// Commit a value unconditionally and notify observers.
    pub fn set(&mut self, field: InputField, value: f32) {
        self.values.set(field, value);
        tracing::debug!(%field, value, "input committed");
        self.notify();
    }

    /// Replace all three values at once, notifying observers a single time.
    pub fn restore(&mut self, values: StateSnapshot) {
        self.values = values;
        self.notify();
    }

    pub fn hub_depth(&self) -> f32 {
        compute_hub_depth(self.lift(), self.slope(), self.width())
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.values
    }

    /// Register an observer of the hub depth. It is called immediately with
    /// the current value and again after every commit.
    pub fn subscribe(&mut self, mut observer: impl FnMut(f32) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        observer(self.hub_depth());
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Detach an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let depth = self.hub_depth();
        for (_, observer) in &mut self.observers {
            observer(depth);
        }
    }
}
