use crate::wire::WireElement;

/// One colored, timed, labeled interval placed on a single lane.
///
/// `start` and `end` are minutes since midnight. Neither ordering nor the
/// `0..1440` range is enforced: a segment with `start > end` wraps across
/// midnight and is a legal chart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub color: String,
    pub start: i32,
    pub end: i32,
    /// Zero-based lane index, converted from the one-based constructor input.
    pub lane: i32,
    pub text: String,
}

impl Element {
    /// Creates an element on lane `lane` (one-based, as lanes are numbered
    /// on the chart) with no label text.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        start: i32,
        end: i32,
        lane: i32,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            start,
            end,
            lane: lane - 1,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Maps this element to its wire representation. The id stays on the
    /// model side; the service keys elements by position, not id.
    #[must_use]
    pub fn to_wire(&self) -> WireElement {
        WireElement {
            color: self.color.clone(),
            start: self.start,
            end: self.end,
            lane: self.lane,
            text: self.text.clone(),
        }
    }
}
