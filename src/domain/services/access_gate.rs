#[cfg(test)]
#[path = "access_gate_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use super::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Permit,
    RedirectToLogin,
}

/// Guards the admin surface. The gate only asks whether a token is
/// present; role enforcement stays with the backend, which rejects
/// unauthorized mutations itself.
pub struct AccessGate {}

impl AccessGate {
    pub fn evaluate(session: &SessionStore) -> GateDecision {
        if session.is_authenticated() {
            return GateDecision::Permit;
        }

        return GateDecision::RedirectToLogin;
    }

    pub fn require_login(session: &SessionStore) -> Result<()> {
        if AccessGate::evaluate(session) == GateDecision::Permit {
            return Ok(());
        }

        bail!("You are not logged in. Run `folio login` to authenticate.")
    }
}
