/// Where a form is in its simulated send.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    /// Starts sending. Returns false when a send is already running or done,
    /// so double clicks don't schedule a second completion.
    pub fn begin(&mut self) -> bool {
        if *self != SubmitPhase::Editing {
            return false;
        }
        *self = SubmitPhase::Submitting;
        true
    }

    pub fn complete(&mut self) {
        if *self == SubmitPhase::Submitting {
            *self = SubmitPhase::Submitted;
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn shows_form(self) -> bool {
        self != SubmitPhase::Submitted
    }

    pub fn shows_success(self) -> bool {
        self == SubmitPhase::Submitted
    }

    pub fn button_label(self, idle: &'static str, busy: &'static str) -> &'static str {
        if self.is_busy() {
            busy
        } else {
            idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_editing_submitting_submitted() {
        let mut phase = SubmitPhase::default();
        assert!(phase.shows_form());
        assert_eq!(phase.button_label("Submit Order", "Processing..."), "Submit Order");

        assert!(phase.begin());
        assert!(phase.is_busy());
        assert!(phase.shows_form());
        assert_eq!(phase.button_label("Submit Order", "Processing..."), "Processing...");

        assert!(!phase.begin());
        phase.complete();
        assert!(!phase.shows_form());
        assert!(phase.shows_success());
        assert_eq!(phase.button_label("Submit Order", "Processing..."), "Submit Order");
    }

    #[test]
    fn complete_without_begin_is_ignored() {
        let mut phase = SubmitPhase::Editing;
        phase.complete();
        assert_eq!(phase, SubmitPhase::Editing);
    }
}
