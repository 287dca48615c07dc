//! Idle -> Pending -> Results | Error lifecycle shared by both forms.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Single,
    Bulk,
}

impl SubmitMode {
    pub fn idle_label(&self) -> &'static str {
        match self {
            SubmitMode::Single => "Get Price Analysis",
            SubmitMode::Bulk => "Process Bulk Pricing",
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            SubmitMode::Single => "Analyzing...",
            SubmitMode::Bulk => "Processing...",
        }
    }

    pub fn default_error(&self) -> &'static str {
        match self {
            SubmitMode::Single => "An error occurred while fetching the price analysis.",
            SubmitMode::Bulk => "An error occurred while processing the bulk pricing.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionPhase<V> {
    Idle,
    Pending,
    Results(V),
    Error(String),
}

impl<V> Default for SubmissionPhase<V> {
    fn default() -> Self {
        SubmissionPhase::Idle
    }
}

/// How a request ended, as seen by the form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome<V> {
    Success(V),
    /// The page navigates to the login route; nothing is shown inline.
    Unauthorized,
    Failed(String),
}

impl<V> SubmissionPhase<V> {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionPhase::Pending)
    }

    /// Inputs and the submit button are locked while pending.
    pub fn inputs_locked(&self) -> bool {
        self.is_pending()
    }

    pub fn button_label(&self, mode: SubmitMode) -> &'static str {
        if self.is_pending() {
            mode.pending_label()
        } else {
            mode.idle_label()
        }
    }

    /// Enters `Pending`, hiding previous results or errors. Returns `false`
    /// and leaves the state alone if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = SubmissionPhase::Pending;
        true
    }

    /// Validation failures are reported without ever entering `Pending`.
    pub fn reject(&mut self, message: impl Into<String>) {
        if !self.is_pending() {
            *self = SubmissionPhase::Error(message.into());
        }
    }

    /// Settles a pending request. Every outcome leaves `Pending`.
    pub fn settle(&mut self, outcome: SubmissionOutcome<V>, mode: SubmitMode) {
        *self = match outcome {
            SubmissionOutcome::Success(view) => SubmissionPhase::Results(view),
            SubmissionOutcome::Unauthorized => SubmissionPhase::Idle,
            SubmissionOutcome::Failed(message) if message.trim().is_empty() => {
                SubmissionPhase::Error(mode.default_error().to_string())
            }
            SubmissionOutcome::Failed(message) => SubmissionPhase::Error(message),
        };
    }

    pub fn results(&self) -> Option<&V> {
        match self {
            SubmissionPhase::Results(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}
