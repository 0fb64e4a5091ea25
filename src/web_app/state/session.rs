// web_app/state/session.rs - Session gate
//
// Holds whether an admin is logged in and the token proving it. Nothing is
// persisted; a reload starts logged out again.

use crate::web_app::api::AuthApi;
use crate::web_app::error::{AdminError, Result};
use crate::web_app::model::{AuthToken, LoginCredentials, LoginResponse};

/// Which top-level view to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    Login,
    Management,
}

/// An authenticated admin
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: AuthToken,
    pub user_id: Option<i64>,
    pub email: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.user_id,
            email: response.email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionGate {
    session: Option<Session>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn credential(&self) -> Option<&AuthToken> {
        self.session.as_ref().map(|session| &session.token)
    }

    pub fn view(&self) -> GateView {
        if self.is_authenticated() {
            GateView::Management
        } else {
            GateView::Login
        }
    }

    /// Record a successful login
    pub fn establish(&mut self, session: Session) {
        tracing::info!("Admin session established (user id {:?})", session.user_id);
        self.session = Some(session);
    }

    /// Exchange credentials for a token.
    ///
    /// On failure the gate is left unauthenticated and the error is returned
    /// for the login view to show; the admin retries by hand.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        credentials: &LoginCredentials,
    ) -> Result<&Session> {
        match api.login(credentials).await {
            Ok(response) => {
                self.establish(Session::from(response));
                self.session.as_ref().ok_or(AdminError::NotAuthenticated)
            }
            Err(e) => {
                self.session = None;
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("Admin logged out");
        }
    }
}
