//! Message composer state
//!
//! One text field. The draft is sent exactly as typed.

use crate::session::{InFlight, InFlightGuard};

#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
    flight: InFlight,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    pub fn is_submitting(&self) -> bool {
        self.flight.is_pending()
    }

    /// Arm the submit guard and snapshot the draft to send
    pub fn begin_submit(&self) -> Option<(InFlightGuard, String)> {
        self.flight
            .try_begin()
            .map(|guard| (guard, self.draft.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_sent_verbatim() {
        let mut composer = Composer::new();
        composer.set_draft("  siema  ");
        let (_guard, content) = composer.begin_submit().unwrap();
        assert_eq!(content, "  siema  ");
    }

    #[test]
    fn test_single_submit_in_flight() {
        let mut composer = Composer::new();
        composer.set_draft("");
        let first = composer.begin_submit();
        assert!(first.is_some());
        assert!(composer.is_submitting());
        assert!(composer.begin_submit().is_none());

        drop(first);
        assert!(!composer.is_submitting());
    }
}
