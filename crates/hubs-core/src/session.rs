//! The boundary a UI shell drives.
//!
//! A [`HubsSession`] bundles the configuration, the reactive input state and
//! one validation gate per field. Slider events commit directly (clamped to
//! the field's range); text events pass through the field's gate.

use hubs_model::{CalculatorConfig, CanvasSize, DiagramPrimitive, InputField, StateSnapshot};

use crate::calc::{field_step_count, slider_value};
use crate::diagram::{DiagramInputs, compute_diagram};
use crate::format::{format_fixed, format_to_fraction};
use crate::input::{CommitDecision, TextEntryBuffer, ValidationGate};
use crate::state::{ReactiveState, SubscriptionId};

#[derive(Debug)]
pub struct HubsSession {
    config: CalculatorConfig,
    state: ReactiveState,
    gates: [ValidationGate; 3],
}

impl Default for HubsSession {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl HubsSession {
    /// A session whose inputs start at the configured defaults.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            gates: InputField::ALL.map(|field| ValidationGate::for_spec(field, config.spec(field))),
            state: ReactiveState::from_snapshot(config.defaults()),
            config,
        }
    }

    /// Restore previously persisted input values.
    pub fn with_snapshot(mut self, snapshot: StateSnapshot) -> Self {
        self.state.restore(snapshot);
        self
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn state(&self) -> &ReactiveState {
        &self.state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    pub fn set_lift(&mut self, value: f32) {
        self.state.set_lift(value);
    }

    pub fn set_slope(&mut self, value: f32) {
        self.state.set_slope(value);
    }

    pub fn set_width(&mut self, value: f32) {
        self.state.set_width(value);
    }

    /// Slider commit. The value is pinned into the field's range.
    pub fn slide(&mut self, field: InputField, value: f32) -> f32 {
        let clamped = self.config.spec(field).clamp(value);
        self.state.set(field, clamped);
        clamped
    }

    /// Slider commit by stop index, 0 being the range minimum.
    pub fn slide_to_step(&mut self, field: InputField, index: usize) -> f32 {
        let value = slider_value(self.config.spec(field), index);
        self.state.set(field, value);
        value
    }

    pub fn on_field_focus_gained(&mut self, field: InputField) -> &TextEntryBuffer {
        let current = self.state.value(field);
        self.gate_mut(field).on_focus_gained(current)
    }

    pub fn on_field_focus_lost(&mut self, field: InputField) {
        self.gate_mut(field).on_focus_lost();
    }

    pub fn on_text_changed(&mut self, field: InputField, raw: &str) -> CommitDecision {
        let decision = self.gate_mut(field).on_text_changed(raw);
        self.apply(field, decision)
    }

    pub fn on_keys_typed(&mut self, field: InputField, typed: &str) -> CommitDecision {
        let decision = self.gate_mut(field).on_keys_typed(typed);
        self.apply(field, decision)
    }

    pub fn on_lift_text_changed(&mut self, raw: &str) -> CommitDecision {
        self.on_text_changed(InputField::Lift, raw)
    }

    pub fn on_slope_text_changed(&mut self, raw: &str) -> CommitDecision {
        self.on_text_changed(InputField::Slope, raw)
    }

    pub fn on_width_text_changed(&mut self, raw: &str) -> CommitDecision {
        self.on_text_changed(InputField::Width, raw)
    }

    pub fn buffer(&self, field: InputField) -> Option<&TextEntryBuffer> {
        self.gate(field).buffer()
    }

    pub fn value(&self, field: InputField) -> f32 {
        self.state.value(field)
    }

    /// Slider label text, one decimal place.
    pub fn value_text(&self, field: InputField) -> String {
        format_fixed(self.value(field), 1)
    }

    pub fn hub_depth(&self) -> f32 {
        self.state.hub_depth()
    }

    pub fn hub_depth_text(&self) -> String {
        format_to_fraction(self.hub_depth())
    }

    pub fn step_count(&self, field: InputField) -> i32 {
        field_step_count(self.config.spec(field))
    }

    pub fn diagram(&self, canvas: CanvasSize) -> Vec<DiagramPrimitive> {
        let inputs = DiagramInputs::from_config(
            &self.config,
            self.state.lift(),
            self.state.width(),
            self.hub_depth(),
        );
        compute_diagram(&inputs, canvas)
    }

    pub fn subscribe(&mut self, observer: impl FnMut(f32) + 'static) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    fn apply(&mut self, field: InputField, decision: CommitDecision) -> CommitDecision {
        if let CommitDecision::Commit(value) = decision {
            self.state.set(field, value);
        }
        decision
    }

    fn gate(&self, field: InputField) -> &ValidationGate {
        &self.gates[gate_index(field)]
    }

    fn gate_mut(&mut self, field: InputField) -> &mut ValidationGate {
        &mut self.gates[gate_index(field)]
    }
}

fn gate_index(field: InputField) -> usize {
    match field {
        InputField::Lift => 0,
        InputField::Slope => 1,
        InputField::Width => 2,
    }
}
