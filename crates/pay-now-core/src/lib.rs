pub mod domain;
pub mod outcome;
pub mod ports;
pub mod state_machine;
pub mod validation;
pub mod widget;

pub use domain::{
    Currency, FormData, FormField, PaymentRequest, PendingSubmission, SessionId, UnknownCurrency,
};
pub use outcome::{Failure, FailureKind, Outcome, SERVER_ERROR_NOTICE};
pub use ports::{Navigator, PaymentTransport, PortError};
pub use state_machine::{transition, StateTransition, TransitionError, UiAction, UiState};
pub use validation::{field_error, is_email_shaped, is_valid};
pub use widget::{PaymentWidget, Settlement, SubmitError, LOGIN_PATH};
