use serde::{Deserialize, Serialize};

pub const SERVER_ERROR_NOTICE: &str = "Server Error: Please try again later";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    BadRequest,
    Unauthorized,
    ServerError,
}

impl FailureKind {
    pub fn status(&self) -> u16 {
        match self {
            FailureKind::BadRequest => 400,
            FailureKind::Unauthorized => 401,
            FailureKind::ServerError => 500,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            FailureKind::BadRequest => "Bad Request",
            FailureKind::Unauthorized => "Unauthorized",
            FailureKind::ServerError => "Server Error",
        }
    }

    /// Buckets an arbitrary status code. 401 is the only client error that
    /// gets its own kind; anything that is neither 2xx nor 4xx is a server error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => FailureKind::Unauthorized,
            400..=499 => FailureKind::BadRequest,
            _ => FailureKind::ServerError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub status: u16,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: kind.status(),
            message: message.into(),
        }
    }

    /// Text shown in the error dialog. Server errors always get the retry notice.
    pub fn display_message(&self) -> String {
        match self.kind {
            FailureKind::ServerError => SERVER_ERROR_NOTICE.to_owned(),
            FailureKind::BadRequest | FailureKind::Unauthorized => self.message.clone(),
        }
    }
}

impl From<FailureKind> for Failure {
    fn from(kind: FailureKind) -> Self {
        Failure::new(kind, kind.reason())
    }
}

/// Settled result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failed(Failure),
}

impl Outcome {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        if (200..300).contains(&status) {
            return Outcome::Success;
        }
        let kind = FailureKind::from_status(status);
        Outcome::Failed(Failure {
            kind,
            status,
            message: message.into(),
        })
    }

    pub fn failed(kind: FailureKind) -> Self {
        Outcome::Failed(kind.into())
    }

    pub fn status(&self) -> u16 {
        match self {
            Outcome::Success => 200,
            Outcome::Failed(failure) => failure.status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_buckets() {
        assert_eq!(Outcome::from_status(200, "OK"), Outcome::Success);
        assert_eq!(Outcome::from_status(201, "Created"), Outcome::Success);
        assert_eq!(
            Outcome::from_status(401, "Unauthorized"),
            Outcome::failed(FailureKind::Unauthorized)
        );
        let Outcome::Failed(f) = Outcome::from_status(422, "Unprocessable") else {
            panic!("422 must fail");
        };
        assert_eq!(f.kind, FailureKind::BadRequest);
        assert_eq!(f.status, 422);
        let Outcome::Failed(f) = Outcome::from_status(302, "Found") else {
            panic!("302 must fail");
        };
        assert_eq!(f.kind, FailureKind::ServerError);
    }

    #[test]
    fn server_error_display_is_fixed() {
        let f = Failure::new(FailureKind::ServerError, "upstream exploded");
        assert_eq!(f.display_message(), SERVER_ERROR_NOTICE);
        let f = Failure::new(FailureKind::BadRequest, "Bad Request");
        assert_eq!(f.display_message(), "Bad Request");
    }
}
