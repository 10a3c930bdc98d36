// crates/distortion-app/src/surface.rs
// Status and result display seam

use leptos::prelude::*;

use crate::controller::SubmissionPhase;
use crate::render::ResultView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: StatusKind::Error }
    }
}

/// Visible page state the controller writes to
pub trait DisplaySurface {
    fn set_status(&self, status: Status);

    /// Replace the result region; `None` clears it
    fn set_result(&self, result: Option<ResultView>);

    /// Disable (true) or re-enable (false) the submit control
    fn set_busy(&self, busy: bool);

    fn is_busy(&self) -> bool;

    fn set_phase(&self, _phase: SubmissionPhase) {}
}

/// Reactive surface backing the classify page
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub status: RwSignal<Option<Status>>,
    pub result: RwSignal<Option<ResultView>>,
    pub busy: RwSignal<bool>,
    pub phase: RwSignal<SubmissionPhase>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(None),
            result: RwSignal::new(None),
            busy: RwSignal::new(false),
            phase: RwSignal::new(SubmissionPhase::Idle),
        }
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for SignalSurface {
    fn set_status(&self, status: Status) {
        self.status.set(Some(status));
    }

    fn set_result(&self, result: Option<ResultView>) {
        self.result.set(result);
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn is_busy(&self) -> bool {
        self.busy.get_untracked()
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        self.phase.set(phase);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Surface that records every write
    #[derive(Default)]
    pub struct RecordingSurface {
        pub statuses: RefCell<Vec<Status>>,
        pub results: RefCell<Vec<Option<ResultView>>>,
        pub busy: Cell<bool>,
        pub busy_history: RefCell<Vec<bool>>,
        pub phases: RefCell<Vec<SubmissionPhase>>,
    }

    impl RecordingSurface {
        pub fn last_status(&self) -> Option<Status> {
            self.statuses.borrow().last().cloned()
        }

        /// Current content of the result region
        pub fn current_result(&self) -> Option<ResultView> {
            self.results.borrow().last().cloned().flatten()
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn set_status(&self, status: Status) {
            self.statuses.borrow_mut().push(status);
        }

        fn set_result(&self, result: Option<ResultView>) {
            self.results.borrow_mut().push(result);
        }

        fn set_busy(&self, busy: bool) {
            self.busy.set(busy);
            self.busy_history.borrow_mut().push(busy);
        }

        fn is_busy(&self) -> bool {
            self.busy.get()
        }

        fn set_phase(&self, phase: SubmissionPhase) {
            self.phases.borrow_mut().push(phase);
        }
    }
}
