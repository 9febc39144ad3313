use hubs_core::CommitDecision;
use hubs_model::InputField;

/// What one text change did to a field.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryOutcome {
    pub field: InputField,
    /// Buffer content after the change.
    pub text: String,
    pub decision: CommitDecision,
    /// The field's value after the change.
    pub value: f32,
    pub hub_depth: f32,
}
