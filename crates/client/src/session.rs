// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authenticated session against the Boa API.

use std::sync::Arc;

use boa_core::{Clock, SystemClock};
use boa_wire::{expect_member, expect_str, Method, Value};
use parking_lot::Mutex;
use url::Url;

use crate::cache::DatasetCache;
use crate::transport::{ByteRange, Credentials, HttpTransport, Transport, TransportError};
use crate::{ClientError, Endpoint};

/// Fault prefix the server uses when the account already has a session
const ALREADY_LOGGED_IN: &str = "Already logged in as ";

/// Logout fault that still leaves the session closed
const NOT_LOGGED_IN: &str = "User is not logged in.";

/// Mutable session state, guarded by a single lock
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) logged_in: bool,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) cache: DatasetCache,
}

struct ClientInner<T, C> {
    transport: T,
    clock: C,
    state: Mutex<SessionState>,
}

/// Handle to one API session.
///
/// Cloning is cheap and every clone shares credentials, the login flag and
/// the dataset cache. Each operation issues at most one remote call (the
/// `connect` handshake and a dataset-defaulted `query` issue two).
pub struct BoaClient<T: Transport = HttpTransport, C: Clock = SystemClock> {
    inner: Arc<ClientInner<T, C>>,
}

impl<T: Transport, C: Clock> Clone for BoaClient<T, C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Transport, C: Clock> std::fmt::Debug for BoaClient<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoaClient").field("logged_in", &self.is_logged_in()).finish()
    }
}

impl BoaClient {
    /// Client for the public endpoint (`https://boa.cs.iastate.edu/boa/?q=boa/api`).
    pub fn new() -> Result<Self, ClientError> {
        Self::with_endpoint(Endpoint::default())
    }

    pub fn with_endpoint(endpoint: Endpoint) -> Result<Self, ClientError> {
        Ok(Self::with_transport(HttpTransport::new(&endpoint)?, SystemClock))
    }
}

impl<T: Transport, C: Clock> BoaClient<T, C> {
    pub fn with_transport(transport: T, clock: C) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                clock,
                state: Mutex::new(SessionState::default()),
            }),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.state.lock().logged_in
    }

    /// Log in with a username and password.
    ///
    /// Does nothing when already logged in. If the server reports that the
    /// account already holds a session, reconnects to it instead.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        if self.is_logged_in() {
            return Ok(());
        }

        let params = vec![Value::from(username), Value::from(password)];
        let response = match self.inner.transport.call(Method::UserLogin, params, None).await {
            Ok(response) => response,
            Err(TransportError::Fault { message, .. }) if message.starts_with(ALREADY_LOGGED_IN) => {
                tracing::info!(username, "session already open, reconnecting");
                return self.connect(username, password).await;
            }
            Err(e) => return Err(auth_error(e)),
        };

        let (session_name, sessid) = session_cookie("user.login", &response)?;
        let token = expect_str("token", expect_member("user.login", &response, "token")?)?;
        self.install(Credentials::from_session(session_name, sessid, Some(token.to_string())));
        tracing::info!(username, "logged in");
        Ok(())
    }

    /// Attach to the account's existing server-side session.
    ///
    /// Fetches the session cookie, then a CSRF token issued for that
    /// cookie.
    pub async fn connect(&self, username: &str, password: &str) -> Result<(), ClientError> {
        let params = vec![Value::from(username), Value::from(password)];
        let session = self
            .inner
            .transport
            .call(Method::SystemConnect, params, None)
            .await
            .map_err(auth_error)?;
        let (session_name, sessid) = session_cookie("system.connect", &session)?;
        let cookie = Credentials::from_session(session_name, sessid, None);

        let response = self
            .inner
            .transport
            .call(Method::UserToken, vec![], Some(&cookie))
            .await
            .map_err(auth_error)?;
        let token = expect_str("token", expect_member("user.token", &response, "token")?)?;

        self.install(Credentials::new(cookie.cookie(), Some(token.to_string())));
        tracing::info!(username, "connected to existing session");
        Ok(())
    }

    /// Log out and drop the session.
    ///
    /// The cache is cleared and the client marked logged out before the
    /// logout call is made, so the client is closed even if the call fails.
    pub async fn close(&self) -> Result<(), ClientError> {
        let credentials = {
            let mut state = self.inner.state.lock();
            state.cache.clear();
            state.logged_in = false;
            state.credentials.take()
        };

        match self.inner.transport.call(Method::UserLogout, vec![], credentials.as_ref()).await {
            Ok(_) => {
                tracing::info!("logged out");
                Ok(())
            }
            Err(TransportError::Fault { message, .. }) if message == NOT_LOGGED_IN => {
                tracing::debug!("logout: session had already ended");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "logout failed");
                Err(ClientError::Remote(e))
            }
        }
    }

    /// Forget the cached dataset list so the next lookup refetches it
    pub fn reset_dataset_cache(&self) {
        self.inner.state.lock().cache.clear();
    }

    /// Issue a session-gated call.
    ///
    /// Fails with [`ClientError::NotLoggedIn`] before touching the
    /// transport when there is no session.
    pub(crate) async fn call(&self, method: Method, params: Vec<Value>) -> Result<Value, ClientError> {
        let credentials = {
            let state = self.inner.state.lock();
            if !state.logged_in {
                return Err(ClientError::NotLoggedIn);
            }
            state.credentials.clone()
        };
        Ok(self.inner.transport.call(method, params, credentials.as_ref()).await?)
    }

    /// Download a document the API handed out. Gated like [`call`](Self::call).
    pub(crate) async fn fetch(
        &self,
        url: &Url,
        range: Option<ByteRange>,
    ) -> Result<String, ClientError> {
        self.ensure_logged_in()?;
        Ok(self.inner.transport.fetch(url, range).await?)
    }

    pub(crate) fn ensure_logged_in(&self) -> Result<(), ClientError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(ClientError::NotLoggedIn)
        }
    }

    /// Run `f` with the session state locked. `f` must not block.
    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.inner.state.lock())
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.inner.clock.epoch_ms()
    }

    fn install(&self, credentials: Credentials) {
        let mut state = self.inner.state.lock();
        state.credentials = Some(credentials);
        state.logged_in = true;
    }
}

fn session_cookie<'a>(
    context: &'static str,
    response: &'a Value,
) -> Result<(&'a str, &'a str), ClientError> {
    let session_name = expect_str("session_name", expect_member(context, response, "session_name")?)?;
    let sessid = expect_str("sessid", expect_member(context, response, "sessid")?)?;
    Ok((session_name, sessid))
}

/// Map a failed `login`/`connect` call to a user-facing message.
///
/// Faults are matched on their text: a mention of `username` means bad
/// credentials, `response` means the host is not a Boa server, and
/// anything else with a colon keeps the part after the first colon. A
/// non-success HTTP status means the host answered but the path is wrong.
/// Connection and decoding failures pass through as [`ClientError::Remote`].
pub(crate) fn auth_error(error: TransportError) -> ClientError {
    let message = match &error {
        TransportError::Fault { message, .. } => fault_message(message),
        TransportError::Status { .. } => "Invalid path given to API".to_string(),
        TransportError::Http(_) | TransportError::Codec(_) => return ClientError::Remote(error),
    };
    ClientError::Auth { message, source: error }
}

fn fault_message(message: &str) -> String {
    if message.contains("username") {
        "Invalid username or password".to_string()
    } else if message.contains("response") {
        "Invalid domain given to API".to_string()
    } else if let Some((_, rest)) = message.split_once(':') {
        rest.trim_start().to_string()
    } else {
        message.to_string()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
