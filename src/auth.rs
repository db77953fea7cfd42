//! One login attempt, from validated credentials to an outcome.
//!
//! Kept free of signals and DOM types so the status mapping can be tested
//! against a mock [`AuthApi`]. The component owns the display state and the
//! navigate capability; this module only decides what happened.

use crate::api::{ApiError, AuthApi};
use crate::domain::{Credentials, ValidationErrors};

pub const MSG_LOGIN_REJECTED: &str = "Invalid email or password";
pub const MSG_NETWORK_ERROR: &str = "Network error. Please try again.";

/// Outcome of one submitted login request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAttempt {
    /// 2xx response: the caller should navigate to the admin landing route.
    Authenticated,
    /// Any non-2xx status. Wrong credentials and server faults are shown the
    /// same generic message on purpose.
    Denied,
    /// The request itself failed (network unreachable, fetch threw).
    Unreachable,
}

impl LoginAttempt {
    /// The message to display, if the attempt failed.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            LoginAttempt::Authenticated => None,
            LoginAttempt::Denied => Some(MSG_LOGIN_REJECTED),
            LoginAttempt::Unreachable => Some(MSG_NETWORK_ERROR),
        }
    }
}

/// Result of one submit: either validation failed locally, or a request was
/// issued and resolved. Field errors and the submission error are independent
/// pieces of display state; a `Rejected` outcome says nothing about any
/// submission error already on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed. No request was made.
    Rejected(ValidationErrors),
    /// Exactly one request was made and resolved.
    Completed(LoginAttempt),
}

/// The whole submit step for the raw field values: validate, and only if both
/// constraints hold, issue the login request.
pub async fn submit_login<A: AuthApi + ?Sized>(
    api: &A,
    email: &str,
    password: &str,
) -> SubmitOutcome {
    match Credentials::parse(email, password) {
        Ok(credentials) => SubmitOutcome::Completed(attempt_login(api, &credentials).await),
        Err(errors) => SubmitOutcome::Rejected(errors),
    }
}

/// Issues the login request and folds the transport result into an outcome.
pub async fn attempt_login<A: AuthApi + ?Sized>(
    api: &A,
    credentials: &Credentials,
) -> LoginAttempt {
    match api.login(credentials).await {
        Ok(()) => LoginAttempt::Authenticated,
        Err(ApiError::Rejected(_)) => LoginAttempt::Denied,
        Err(ApiError::Transport(_)) => LoginAttempt::Unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records every request it receives and replays a scripted response.
    struct MockAuthApi {
        response: Result<(), ApiError>,
        requests: RefCell<Vec<Credentials>>,
    }

    impl MockAuthApi {
        fn new(response: Result<(), ApiError>) -> Self {
            Self {
                response,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for MockAuthApi {
        async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
            self.requests.borrow_mut().push(credentials.clone());
            self.response.clone()
        }
    }

    fn valid_credentials() -> Credentials {
        Credentials::parse("a@b.com", "longenough1").unwrap()
    }

    #[tokio::test]
    async fn a_2xx_response_authenticates() {
        let api = MockAuthApi::new(Ok(()));
        let outcome = attempt_login(&api, &valid_credentials()).await;
        assert_eq!(outcome, LoginAttempt::Authenticated);
        assert_eq!(outcome.error_message(), None);
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn a_401_is_denied_with_the_generic_message() {
        let api = MockAuthApi::new(Err(ApiError::Rejected(401)));
        let outcome = attempt_login(&api, &valid_credentials()).await;
        assert_eq!(outcome, LoginAttempt::Denied);
        assert_eq!(outcome.error_message(), Some(MSG_LOGIN_REJECTED));
        assert_eq!(api.request_count(), 1);
    }

    #[tokio::test]
    async fn server_faults_read_the_same_as_bad_credentials() {
        let api = MockAuthApi::new(Err(ApiError::Rejected(500)));
        let outcome = attempt_login(&api, &valid_credentials()).await;
        assert_eq!(outcome.error_message(), Some(MSG_LOGIN_REJECTED));
    }

    #[tokio::test]
    async fn transport_failure_reports_a_network_error() {
        let api = MockAuthApi::new(Err(ApiError::Transport("connection refused".into())));
        let outcome = attempt_login(&api, &valid_credentials()).await;
        assert_eq!(outcome, LoginAttempt::Unreachable);
        assert_eq!(outcome.error_message(), Some(MSG_NETWORK_ERROR));
    }

    #[tokio::test]
    async fn an_invalid_email_never_reaches_the_network() {
        let api = MockAuthApi::new(Ok(()));
        let outcome = submit_login(&api, "not-an-email", "longenough1").await;
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.email, Some(crate::domain::MSG_INVALID_EMAIL));
                assert_eq!(errors.password, None);
            }
            other => panic!("expected a validation rejection, got {other:?}"),
        }
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn a_short_password_never_reaches_the_network() {
        let api = MockAuthApi::new(Ok(()));
        let outcome = submit_login(&api, "a@b.com", "short").await;
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.email, None);
                assert_eq!(errors.password, Some(crate::domain::MSG_PASSWORD_TOO_SHORT));
            }
            other => panic!("expected a validation rejection, got {other:?}"),
        }
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn valid_fields_submit_exactly_one_request() {
        let api = MockAuthApi::new(Ok(()));
        let outcome = submit_login(&api, "a@b.com", "longenough1").await;
        assert_eq!(
            outcome,
            SubmitOutcome::Completed(LoginAttempt::Authenticated)
        );
        assert_eq!(api.request_count(), 1);
        assert_eq!(api.requests.borrow()[0], valid_credentials());
    }

    #[tokio::test]
    async fn resubmitting_sends_an_identical_independent_request() {
        let api = MockAuthApi::new(Err(ApiError::Rejected(401)));
        let credentials = valid_credentials();
        attempt_login(&api, &credentials).await;
        attempt_login(&api, &credentials).await;

        let requests = api.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0], credentials);
    }
}
