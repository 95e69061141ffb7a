//! Auth form model and the backend seam behind the modal's submit button.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::input::TextInput;

/// Which tab of the auth modal is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Fields shown for this mode, in focus order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            AuthMode::Login => &[Field::Email, Field::Password],
            AuthMode::Signup => &[Field::Name, Field::Email, Field::Password],
        }
    }
}

/// Form inputs of the auth modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "you@example.com",
            Field::Password => "••••••••",
        }
    }
}

/// Values handed to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Successful sign-in or sign-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub mode: AuthMode,
    pub display_name: String,
}

/// Why a submission did not produce a session. Rejections all collapse into
/// one generic toast; a cancelled submission is dropped quietly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    #[error("submission cancelled")]
    Cancelled,
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn submit(&self, mode: AuthMode, creds: &Credentials) -> Result<AuthSession, AuthError>;
}

/// Stand-in backend: waits a fixed delay, then accepts anything.
#[derive(Clone, Debug)]
pub struct SimulatedAuth {
    delay: Duration,
}

impl SimulatedAuth {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuth {
    async fn submit(&self, mode: AuthMode, creds: &Credentials) -> Result<AuthSession, AuthError> {
        tokio::time::sleep(self.delay).await;
        let display_name = creds.name.clone().unwrap_or_else(|| {
            creds
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string()
        });
        Ok(AuthSession { mode, display_name })
    }
}

/// Live form inside an open modal. Dropped on close, so nothing carries over
/// to the next open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    name: TextInput,
    email: TextInput,
    password: TextInput,
    focus: Field,
    /// Ticket of the in-flight submission.
    pending: Option<Uuid>,
    /// Inline validation message.
    error: Option<String>,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::masked(),
            focus: mode.fields()[0],
            pending: None,
            error: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch tabs; typed values are shared between the tabs.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            self.mode = mode;
            self.focus = mode.fields()[0];
            self.error = None;
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        let n = self.mode.fields().len();
        self.step_focus(n - 1);
    }

    fn step_focus(&mut self, by: usize) {
        let fields = self.mode.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + by) % fields.len()];
    }

    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        self.error = None;
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Uuid> {
        self.pending
    }

    /// Required-field check for the current mode.
    pub fn credentials(&self) -> Result<Credentials, AuthError> {
        let name = self.name.value().trim();
        let email = self.email.value().trim();
        let password = self.password.value();

        if self.mode == AuthMode::Signup && name.is_empty() {
            return Err(AuthError::Validation("Full name is required".into()));
        }
        if email.is_empty() {
            return Err(AuthError::Validation("Email is required".into()));
        }
        if !email.contains('@') {
            return Err(AuthError::Validation("Enter a valid email address".into()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("Password is required".into()));
        }

        Ok(Credentials {
            name: (self.mode == AuthMode::Signup).then(|| name.to_string()),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Validate and mark a submission in flight. The error message is kept
    /// on the form when validation fails.
    pub fn begin_submit(&mut self) -> Result<(Uuid, Credentials), AuthError> {
        match self.credentials() {
            Ok(creds) => {
                let ticket = Uuid::new_v4();
                self.pending = Some(ticket);
                self.error = None;
                Ok((ticket, creds))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Clear the pending ticket if it matches. A mismatch means the result
    /// belongs to an earlier submission.
    pub fn settle(&mut self, ticket: Uuid) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
