use crate::api::{ApiError, UserResponse};

pub const SUBMIT_LABEL: &str = "Login";
pub const PENDING_LABEL: &str = "please wait";
pub const ERROR_MESSAGE: &str = "Something went wrong!";

/// Local state of the login form.
///
/// All mutation goes through the transition methods below; the two derived
/// flags are recomputed from the fields on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub is_submitting: bool,
    pub last_error: Option<ApiError>,
    pub fetched_name: Option<String>,
}

impl LoginFormState {
    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn submit_enabled(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty() && !self.is_submitting
    }

    pub fn error_visible(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Enters the submitting state. Returns `false` and leaves the state
    /// untouched when submit is not enabled.
    pub fn begin_submit(&mut self) -> bool {
        if !self.submit_enabled() {
            return false;
        }
        self.is_submitting = true;
        self.last_error = None;
        true
    }

    pub fn settle(&mut self, result: Result<UserResponse, ApiError>) {
        self.is_submitting = false;
        match result {
            Ok(user) => self.fetched_name = Some(user.name),
            Err(err) => self.last_error = Some(err),
        }
    }
}
