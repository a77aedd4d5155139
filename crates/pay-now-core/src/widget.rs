use thiserror::Error;

use crate::domain::{FormData, FormField, PendingSubmission, SessionId};
use crate::outcome::{FailureKind, Outcome};
use crate::ports::{Navigator, PaymentTransport};
use crate::state_machine::{transition, StateTransition, UiAction, UiState};
use crate::validation;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form is not valid")]
    FormInvalid,
    #[error("form is not open (state: {0})")]
    NotOpen(&'static str),
    #[error("{0} already has a submission in flight")]
    AlreadyInFlight(SessionId),
}

/// What [`PaymentWidget::settle`] did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Applied(UiState),
    /// The session the outcome belongs to was closed or replaced.
    Stale,
}

/// The "Pay Now" button with its modal form and result dialogs.
pub struct PaymentWidget<T, N>
where
    T: PaymentTransport,
    N: Navigator,
{
    pub transport: T,
    pub navigator: N,
    login_path: String,
    state: UiState,
    form: FormData,
    session: SessionId,
    in_flight: Option<SessionId>,
    history: Vec<StateTransition>,
}

impl<T, N> PaymentWidget<T, N>
where
    T: PaymentTransport,
    N: Navigator,
{
    pub fn new(transport: T, navigator: N) -> Self {
        Self {
            transport,
            navigator,
            login_path: LOGIN_PATH.to_owned(),
            state: UiState::Closed,
            form: FormData::default(),
            session: SessionId::default(),
            in_flight: None,
            history: Vec::new(),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Transitions applied since the last `open()` from `Closed`.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid(&self.form)
    }

    pub fn field_error(&self, field: FormField) -> Option<&'static str> {
        validation::field_error(&self.form, field)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.state == UiState::Open && self.in_flight.is_none() && self.is_valid()
    }

    pub fn open(&mut self) {
        match self.state {
            UiState::Closed => {
                self.session = self.session.next();
                self.form.reset();
                self.in_flight = None;
                self.history.clear();
                self.apply(UiAction::Open);
                tracing::debug!(session = %self.session, "payment form opened");
            }
            UiState::Open => {}
            UiState::Success | UiState::Failed(_) => {
                tracing::debug!(state = self.state.name(), "open ignored while a dialog is showing");
            }
        }
    }

    /// Cancels the form or dismisses whichever dialog is showing.
    pub fn close(&mut self) {
        self.form.reset();
        self.in_flight = None;
        if self.state != UiState::Closed {
            self.apply(UiAction::Close);
        }
    }

    /// Closes a result dialog. Anything else is handled like [`Self::close`].
    pub fn dismiss(&mut self) {
        if self.state.is_dialog() {
            self.form.reset();
            self.apply(UiAction::Dismiss);
        } else {
            self.close();
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Name-addressed variant of [`Self::set`]; unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        match FormField::from_name(name) {
            Some(field) => self.set(field, value),
            None => tracing::warn!(name, "ignoring unknown form field"),
        }
    }

    /// Checks the submit guard and hands back the request to send.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.state != UiState::Open {
            return Err(SubmitError::NotOpen(self.state.name()));
        }
        if let Some(session) = self.in_flight {
            return Err(SubmitError::AlreadyInFlight(session));
        }
        if !self.is_valid() {
            return Err(SubmitError::FormInvalid);
        }

        self.in_flight = Some(self.session);
        tracing::info!(
            session = %self.session,
            currency = %self.form.from,
            "submitting payment"
        );
        Ok(PendingSubmission {
            session: self.session,
            request: self.form.to_request(),
        })
    }

    pub fn settle(&mut self, session: SessionId, outcome: Outcome) -> Settlement {
        if self.in_flight != Some(session) || self.state != UiState::Open {
            tracing::warn!(
                %session,
                current = %self.session,
                status = outcome.status(),
                "dropping outcome for a closed session"
            );
            return Settlement::Stale;
        }
        self.in_flight = None;

        match outcome {
            Outcome::Success => {
                tracing::info!(%session, "payment accepted");
                self.form.reset();
                self.apply(UiAction::Succeed);
            }
            Outcome::Failed(failure) => {
                tracing::info!(
                    %session,
                    status = failure.status,
                    kind = ?failure.kind,
                    "payment rejected"
                );
                self.apply(UiAction::Fail(failure.display_message()));
                if failure.kind == FailureKind::Unauthorized {
                    tracing::info!(path = %self.login_path, "redirecting to login");
                    self.navigator.go_to(&self.login_path);
                }
            }
        }
        Settlement::Applied(self.state.clone())
    }

    /// Runs the whole submission inline on the transport.
    pub fn submit(&mut self) -> Result<Outcome, SubmitError> {
        let pending = self.begin_submit()?;
        let outcome = self.transport.send(&pending.request);
        self.settle(pending.session, outcome.clone());
        Ok(outcome)
    }

    fn apply(&mut self, action: UiAction) {
        match transition(&self.state, action) {
            Ok((next, record)) => {
                tracing::debug!(
                    from = record.from.name(),
                    to = record.to.name(),
                    reason = record.reason,
                    "ui transition"
                );
                self.state = next;
                self.history.push(record);
            }
            Err(e) => tracing::warn!(error = %e, "transition rejected"),
        }
    }
}
