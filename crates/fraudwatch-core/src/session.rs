//! Admin session gate.
//!
//! The gate is a convenience lock, not access control: the PIN ships with the
//! code and the marker can be written by anyone who holds the client storage.
//! It must be replaced by server-verified credentials before real use.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

use fraudwatch_types::api::SessionState;

pub const ADMIN_PIN: &str = "1337";
pub const MARKER_KEY: &str = "admin_token";
pub const MARKER_VALUE: &str = "authenticated";

/// Durable key/value storage owned by the client (browser storage, cookies).
pub trait MarkerStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryMarkers {
    entries: HashMap<String, String>,
}

impl MarkerStore for MemoryMarkers {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Storage not read yet.
    Resolving,
    Anonymous,
    Authenticated,
}

/// What the caller may render for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// Neither admin content nor the login prompt.
    Pending,
    Login,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("password is blank")]
    Blank,
    #[error("password does not match")]
    Mismatch,
}

pub struct SessionGate<M> {
    markers: M,
    state: GateState,
}

impl<M: MarkerStore> SessionGate<M> {
    pub fn new(markers: M) -> Self {
        Self {
            markers,
            state: GateState::Resolving,
        }
    }

    /// Build a gate and read the marker immediately.
    pub fn resolved(markers: M) -> Self {
        let mut gate = Self::new(markers);
        gate.resolve();
        gate
    }

    pub fn resolve(&mut self) -> GateState {
        self.state = match self.markers.get(MARKER_KEY).as_deref() {
            Some(MARKER_VALUE) => GateState::Authenticated,
            _ => GateState::Anonymous,
        };
        self.state
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == GateState::Authenticated
    }

    pub fn view(&self) -> GateView {
        match self.state {
            GateState::Resolving => GateView::Pending,
            GateState::Anonymous => GateView::Login,
            GateState::Authenticated => GateView::Admin,
        }
    }

    /// Outward state once resolved. `None` while still resolving.
    pub fn session_state(&self) -> Option<SessionState> {
        match self.state {
            GateState::Resolving => None,
            GateState::Anonymous => Some(SessionState::Anonymous),
            GateState::Authenticated => Some(SessionState::Authenticated),
        }
    }

    pub fn login(&mut self, candidate: &str) -> Result<(), AuthError> {
        if candidate.trim().is_empty() {
            return Err(AuthError::Blank);
        }
        if candidate != ADMIN_PIN {
            warn!("Admin login rejected");
            return Err(AuthError::Mismatch);
        }

        self.markers.set(MARKER_KEY, MARKER_VALUE);
        self.state = GateState::Authenticated;
        info!("Admin session started");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.markers.remove(MARKER_KEY);
        if self.state == GateState::Authenticated {
            info!("Admin session ended");
        }
        self.state = GateState::Anonymous;
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }

    pub fn into_markers(self) -> M {
        self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate<MemoryMarkers> {
        SessionGate::resolved(MemoryMarkers::default())
    }

    #[test]
    fn starts_resolving_and_renders_nothing() {
        let gate = SessionGate::new(MemoryMarkers::default());
        assert_eq!(gate.state(), GateState::Resolving);
        assert_eq!(gate.view(), GateView::Pending);
        assert_eq!(gate.session_state(), None);
    }

    #[test]
    fn resolves_from_marker() {
        let mut markers = MemoryMarkers::default();
        markers.set(MARKER_KEY, MARKER_VALUE);
        assert_eq!(SessionGate::resolved(markers).view(), GateView::Admin);

        let mut markers = MemoryMarkers::default();
        markers.set(MARKER_KEY, "yes please");
        assert_eq!(SessionGate::resolved(markers).view(), GateView::Login);

        assert_eq!(gate().view(), GateView::Login);
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut gate = gate();
        gate.login(ADMIN_PIN).unwrap();
        assert!(gate.is_authenticated());
        assert_eq!(gate.markers().get(MARKER_KEY).as_deref(), Some(MARKER_VALUE));

        gate.logout();
        assert_eq!(gate.state(), GateState::Anonymous);
        assert_eq!(gate.markers().get(MARKER_KEY), None);
    }

    #[test]
    fn wrong_pin_leaves_state_alone() {
        let mut gate = gate();
        assert_eq!(gate.login("1234"), Err(AuthError::Mismatch));
        assert_eq!(gate.login(" 1337 "), Err(AuthError::Mismatch));
        assert_eq!(gate.state(), GateState::Anonymous);
        assert_eq!(gate.markers().get(MARKER_KEY), None);
    }

    #[test]
    fn blank_pin_is_refused_before_comparison() {
        let mut gate = gate();
        assert_eq!(gate.login("   "), Err(AuthError::Blank));
        assert_eq!(gate.state(), GateState::Anonymous);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut gate = gate();
        gate.logout();
        gate.logout();
        assert_eq!(gate.state(), GateState::Anonymous);
    }

    #[test]
    fn marker_survives_into_a_new_gate() {
        let mut first = gate();
        first.login(ADMIN_PIN).unwrap();

        let second = SessionGate::resolved(first.into_markers());
        assert!(second.is_authenticated());
    }
}
