//! Computation core of the hub depth calculator.
//!
//! The crate is UI-agnostic: a shell drives a [`HubsSession`] with slider
//! and text events and reads back values, the derived hub depth, display
//! strings and diagram primitives.
//!
//! - [`calc`]: the hub depth formula and slider step discretization
//! - [`format`]: fraction-of-an-inch and decimal display strings
//! - [`diagram`]: mapping of domain values onto canvas primitives
//! - [`input`]: the text entry buffer and its validation gate
//! - [`state`]: the three input cells and the derived value
//! - [`session`]: the boundary the shell calls into

pub mod calc;
pub mod diagram;
pub mod format;
pub mod input;
pub mod session;
pub mod state;

pub use calc::{
    HubDepthBreakdown, compute_hub_depth, compute_step_count, field_step_count, slider_positions,
    slider_value,
};
pub use diagram::{DiagramInputs, compute_diagram};
pub use format::{format_fixed, format_plain_decimal, format_to_fraction};
pub use input::{CommitDecision, RejectReason, TextEntryBuffer, ValidationGate};
pub use session::HubsSession;
pub use state::{ReactiveState, SubscriptionId};
