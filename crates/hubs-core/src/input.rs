//! Text entry for numeric fields.
//!
//! Every keystroke is accepted into the [`TextEntryBuffer`]; only the commit
//! decision is validated. Text that does not parse, is negative for a field
//! requiring positivity, or is not finite stays in the buffer for display and
//! never reaches the field's value. No error is surfaced to the user.

use std::ops::Range;

use hubs_model::{FieldSpec, InputField};

use crate::format::format_plain_decimal;

/// Transient editing state of a focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntryBuffer {
    text: String,
    selection: Range<usize>,
}

impl TextEntryBuffer {
    /// A buffer holding `text` with all of it selected.
    pub fn selected_all(text: String) -> Self {
        let selection = 0..text.len();
        Self { text, selection }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected byte span; empty when it is a plain cursor.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Replace the whole content, leaving the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.selection = self.text.len()..self.text.len();
    }

    /// Replace the selection with `typed`, leaving the cursor after it.
    pub fn type_str(&mut self, typed: &str) {
        let start = self.selection.start.min(self.text.len());
        let end = self.selection.end.clamp(start, self.text.len());
        self.text.replace_range(start..end, typed);
        let cursor = start + typed.len();
        self.selection = cursor..cursor;
    }
}

/// Why typed text was not committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Unparseable,
    Negative,
    NonFinite,
}

/// Outcome of a text change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitDecision {
    Commit(f32),
    Rejected(RejectReason),
}

impl CommitDecision {
    /// Decide whether `raw` may be committed.
    ///
    /// Parsing is locale-invariant (`.` decimal separator) and ignores
    /// surrounding whitespace.
    pub fn evaluate(raw: &str, must_be_positive: bool) -> Self {
        let Ok(value) = raw.trim().parse::<f32>() else {
            return CommitDecision::Rejected(RejectReason::Unparseable);
        };
        if !value.is_finite() {
            return CommitDecision::Rejected(RejectReason::NonFinite);
        }
        if must_be_positive && value < 0.0 {
            return CommitDecision::Rejected(RejectReason::Negative);
        }
        CommitDecision::Commit(value)
    }

    pub fn committed(self) -> Option<f32> {
        match self {
            CommitDecision::Commit(value) => Some(value),
            CommitDecision::Rejected(_) => None,
        }
    }
}

/// Per-field gate between raw text and the field's committed value.
#[derive(Debug, Clone)]
pub struct ValidationGate {
    field: InputField,
    must_be_positive: bool,
    buffer: Option<TextEntryBuffer>,
}

impl ValidationGate {
    pub fn new(field: InputField, must_be_positive: bool) -> Self {
        Self {
            field,
            must_be_positive,
            buffer: None,
        }
    }

    pub fn for_spec(field: InputField, spec: &FieldSpec) -> Self {
        Self::new(field, spec.must_be_positive)
    }

    pub fn field(&self) -> InputField {
        self.field
    }

    pub fn must_be_positive(&self) -> bool {
        self.must_be_positive
    }

    pub fn is_focused(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&TextEntryBuffer> {
        self.buffer.as_ref()
    }

    /// Seed the buffer with the field's current value, fully selected so the
    /// next keystroke replaces it.
    pub fn on_focus_gained(&mut self, current: f32) -> &TextEntryBuffer {
        self.buffer
            .insert(TextEntryBuffer::selected_all(format_plain_decimal(current)))
    }

    /// The field now shows `raw`; returns whether it should be committed.
    pub fn on_text_changed(&mut self, raw: &str) -> CommitDecision {
        match self.buffer.as_mut() {
            Some(buffer) => buffer.set_text(raw),
            None => {
                let mut buffer = TextEntryBuffer::selected_all(String::new());
                buffer.set_text(raw);
                self.buffer = Some(buffer);
            }
        }
        self.decide()
    }

    /// Apply keystrokes to the current selection, as a text field would.
    pub fn on_keys_typed(&mut self, typed: &str) -> CommitDecision {
        self.buffer
            .get_or_insert_with(|| TextEntryBuffer::selected_all(String::new()))
            .type_str(typed);
        self.decide()
    }

    pub fn on_focus_lost(&mut self) {
        self.buffer = None;
    }

    fn decide(&self) -> CommitDecision {
        let text = self.buffer.as_ref().map_or("", TextEntryBuffer::text);
        let decision = CommitDecision::evaluate(text, self.must_be_positive);
        match decision {
            CommitDecision::Commit(value) => {
                tracing::debug!(field = %self.field, value, "text entry committed");
            }
            CommitDecision::Rejected(reason) => {
                tracing::debug!(field = %self.field, text, ?reason, "text entry held back");
            }
        }
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_commits_plain_numbers() {
        assert_eq!(CommitDecision::evaluate("12.5", true), CommitDecision::Commit(12.5));
        assert_eq!(CommitDecision::evaluate(" 3 ", true), CommitDecision::Commit(3.0));
        assert_eq!(CommitDecision::evaluate("0", true), CommitDecision::Commit(0.0));
        assert_eq!(CommitDecision::evaluate(".5", true), CommitDecision::Commit(0.5));
    }

    #[test]
    fn evaluate_rejects_unparseable_text() {
        for raw in ["", "-", ".", "12,5", "abc", "1.2.3"] {
            assert_eq!(
                CommitDecision::evaluate(raw, false),
                CommitDecision::Rejected(RejectReason::Unparseable),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn evaluate_applies_positivity_only_when_required() {
        assert_eq!(
            CommitDecision::evaluate("-4", true),
            CommitDecision::Rejected(RejectReason::Negative)
        );
        assert_eq!(CommitDecision::evaluate("-4", false), CommitDecision::Commit(-4.0));
    }

    #[test]
    fn evaluate_rejects_non_finite_values() {
        for raw in ["NaN", "inf", "-infinity"] {
            assert_eq!(
                CommitDecision::evaluate(raw, false),
                CommitDecision::Rejected(RejectReason::NonFinite)
            );
        }
    }

    #[test]
    fn focus_gain_selects_whole_value() {
        let mut gate = ValidationGate::new(InputField::Lift, true);
        let buffer = gate.on_focus_gained(9.0);
        assert_eq!(buffer.text(), "9.0");
        assert_eq!(buffer.selection(), 0..3);
        assert!(gate.is_focused());
    }

    #[test]
    fn first_keystroke_replaces_selection() {
        let mut gate = ValidationGate::new(InputField::Width, true);
        gate.on_focus_gained(28.0);
        assert_eq!(gate.on_keys_typed("3"), CommitDecision::Commit(3.0));
        assert_eq!(gate.on_keys_typed("2"), CommitDecision::Commit(32.0));
        assert_eq!(
            gate.on_keys_typed("."),
            CommitDecision::Commit(32.0),
            "trailing dot still parses"
        );
        assert_eq!(gate.on_keys_typed("5"), CommitDecision::Commit(32.5));
        assert_eq!(gate.buffer().map(TextEntryBuffer::text), Some("32.5"));
    }

    #[test]
    fn rejected_text_stays_in_buffer() {
        let mut gate = ValidationGate::new(InputField::Slope, true);
        gate.on_focus_gained(2.0);
        assert_eq!(
            gate.on_text_changed("-"),
            CommitDecision::Rejected(RejectReason::Unparseable)
        );
        assert_eq!(gate.buffer().map(TextEntryBuffer::text), Some("-"));
        assert_eq!(
            gate.on_text_changed("-1"),
            CommitDecision::Rejected(RejectReason::Negative)
        );
        assert_eq!(gate.buffer().map(TextEntryBuffer::text), Some("-1"));
    }

    #[test]
    fn focus_loss_discards_buffer() {
        let mut gate = ValidationGate::new(InputField::Lift, true);
        gate.on_focus_gained(9.0);
        gate.on_text_changed("abc");
        gate.on_focus_lost();
        assert!(gate.buffer().is_none());
        assert_eq!(gate.on_focus_gained(9.0).text(), "9.0");
    }

    #[test]
    fn type_str_inserts_at_cursor() {
        let mut buffer = TextEntryBuffer::selected_all("12".to_string());
        buffer.type_str("4");
        assert_eq!(buffer.text(), "4");
        buffer.type_str("5");
        assert_eq!(buffer.text(), "45");
        assert_eq!(buffer.selection(), 2..2);
    }
}
