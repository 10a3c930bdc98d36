// crates/distortion-app/src/controller.rs
// Submission orchestration: validate, call, render, release

use crate::api::{ClassifyClient, HttpTransport};
use crate::error::ClassifyError;
use crate::render::ResultView;
use crate::surface::{DisplaySurface, Status};

pub const CALLING_API: &str = "Calling API...";
pub const SUCCESS: &str = "Success";

/// Idle → Validating → Submitting → (Succeeded | Failed) → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight
    Ignored,
    Succeeded,
    Failed(ClassifyError),
}

/// Keeps the form controls disabled until dropped
struct BusyGuard<'a, S: DisplaySurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: DisplaySurface + ?Sized> BusyGuard<'a, S> {
    fn acquire(surface: &'a S) -> Self {
        surface.set_busy(true);
        Self { surface }
    }
}

impl<S: DisplaySurface + ?Sized> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_busy(false);
    }
}

#[derive(Debug, Clone)]
pub struct FormController<T> {
    client: ClassifyClient<T>,
}

impl<T: HttpTransport> FormController<T> {
    pub fn new(client: ClassifyClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ClassifyClient<T> {
        &self.client
    }

    fn enter<S: DisplaySurface + ?Sized>(surface: &S, phase: SubmissionPhase) {
        log::debug!("submission phase: {:?}", phase);
        surface.set_phase(phase);
    }

    /// Run one submission against the surface.
    pub async fn submit<S: DisplaySurface + ?Sized>(
        &self,
        surface: &S,
        raw_text: &str,
        api_field: &str,
    ) -> SubmitOutcome {
        if surface.is_busy() {
            log::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Ignored;
        }

        Self::enter(surface, SubmissionPhase::Validating);
        let text = raw_text.trim();
        if text.is_empty() {
            let err = ClassifyError::Validation;
            surface.set_status(Status::error(err.user_message()));
            Self::enter(surface, SubmissionPhase::Failed);
            Self::enter(surface, SubmissionPhase::Idle);
            return SubmitOutcome::Failed(err);
        }

        Self::enter(surface, SubmissionPhase::Submitting);
        surface.set_status(Status::info(CALLING_API));
        surface.set_result(None);
        let guard = BusyGuard::acquire(surface);

        let outcome = match self.client.classify(text, api_field).await {
            Ok(resp) => {
                log::info!(
                    "classified {} chars: distortion={} count={}",
                    text.len(),
                    resp.has_cognitive_distortion,
                    resp.distortion_count
                );
                surface.set_status(Status::success(SUCCESS));
                surface.set_result(Some(ResultView::from_response(&resp)));
                Self::enter(surface, SubmissionPhase::Succeeded);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                log::info!("classification failed: {}", err);
                surface.set_status(Status::error(err.user_message()));
                Self::enter(surface, SubmissionPhase::Failed);
                SubmitOutcome::Failed(err)
            }
        };

        drop(guard);
        Self::enter(surface, SubmissionPhase::Idle);
        outcome
    }

    /// Call `GET /health` and report through the status region.
    /// Shares the busy flag with `submit`, so only one request is in flight.
    pub async fn check_health<S: DisplaySurface + ?Sized>(
        &self,
        surface: &S,
        api_field: &str,
    ) -> SubmitOutcome {
        if surface.is_busy() {
            log::debug!("health check ignored, request already in flight");
            return SubmitOutcome::Ignored;
        }

        surface.set_status(Status::info("Checking API..."));
        let _guard = BusyGuard::acquire(surface);
        match self.client.health(api_field).await {
            Ok(body) => {
                surface.set_status(Status::success(format!("API reachable: {}", body.trim())));
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                log::warn!("health check failed: {}", err);
                surface.set_status(Status::error(err.user_message()));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
