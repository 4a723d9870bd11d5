//! Route guarding
//!
//! A small state machine that decides, per mount, whether protected content
//! may render. Protected children must never render before the guard
//! reaches `Authorized`: a premature render could flash restricted data
//! before the redirect lands. Until a decision is made the only output is
//! the loading indicator, regardless of what the authenticated flag says.

use crate::models::AuthSnapshot;

/// Guard lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Process started; not yet confirmed mounted in a renderable context
    Initializing,
    /// Mounted; waiting for the hydration flag
    Hydrating,
    /// Hydrated; evaluating the authenticated flag
    Deciding,
    /// Render protected children
    Authorized,
    /// Navigate to the login entry point; terminal for this mount
    Redirecting,
}

/// What the guard wants rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Loading indicator only
    Loading,
    /// Protected content may render
    RenderChildren,
    /// Navigate to login
    RedirectToLogin,
}

/// Per-mount route guard
///
/// One guard per mount: `Redirecting` is terminal, and a remount creates a
/// fresh guard. The guard neither retries nor times out the redirect.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    state: GuardState,
}

impl RouteGuard {
    /// Create a guard in `Initializing`
    pub fn new() -> Self {
        Self {
            state: GuardState::Initializing,
        }
    }

    /// Current state
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Confirm the guard is mounted in a renderable context
    pub fn mount(&mut self) -> GuardState {
        if self.state == GuardState::Initializing {
            self.state = GuardState::Hydrating;
        }
        self.state
    }

    /// Apply one transition against a session snapshot.
    ///
    /// Transition table:
    /// - `Hydrating` → `Deciding` once `snapshot.hydrated`
    /// - `Deciding` → `Authorized` when authenticated with an identity,
    ///   otherwise → `Redirecting`
    /// - `Initializing` holds until [`mount`](Self::mount);
    ///   `Authorized` and `Redirecting` hold for the mount's lifetime
    pub fn advance(&mut self, snapshot: &AuthSnapshot) -> GuardState {
        self.state = match self.state {
            GuardState::Initializing => GuardState::Initializing,
            GuardState::Hydrating => {
                if snapshot.hydrated {
                    GuardState::Deciding
                } else {
                    GuardState::Hydrating
                }
            }
            GuardState::Deciding => {
                if snapshot.authenticated && snapshot.has_identity {
                    GuardState::Authorized
                } else {
                    GuardState::Redirecting
                }
            }
            terminal @ (GuardState::Authorized | GuardState::Redirecting) => terminal,
        };
        self.state
    }

    /// Advance until the state stops changing, returning the settled state.
    /// Convenience for callers that evaluate once per snapshot rather than
    /// once per render tick.
    pub fn resolve(&mut self, snapshot: &AuthSnapshot) -> GuardState {
        loop {
            let before = self.state;
            let after = self.advance(snapshot);
            if after == before {
                return after;
            }
        }
    }

    /// Render decision for the current state
    pub fn outcome(&self) -> GuardOutcome {
        match self.state {
            GuardState::Authorized => GuardOutcome::RenderChildren,
            GuardState::Redirecting => GuardOutcome::RedirectToLogin,
            GuardState::Initializing | GuardState::Hydrating | GuardState::Deciding => {
                GuardOutcome::Loading
            }
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmdash_permissions::Role;

    fn snapshot(hydrated: bool, authenticated: bool, has_identity: bool) -> AuthSnapshot {
        AuthSnapshot {
            hydrated,
            loading: false,
            authenticated,
            has_identity,
            role: has_identity.then_some(Role::Sales),
        }
    }

    #[test]
    fn unmounted_guard_stays_initializing() {
        let mut guard = RouteGuard::new();
        guard.advance(&snapshot(true, true, true));
        assert_eq!(guard.state(), GuardState::Initializing);
        assert_eq!(guard.outcome(), GuardOutcome::Loading);
    }

    #[test]
    fn loading_until_hydrated_regardless_of_authenticated() {
        for authenticated in [false, true] {
            let mut guard = RouteGuard::new();
            guard.mount();
            guard.advance(&snapshot(false, authenticated, authenticated));
            assert_eq!(guard.state(), GuardState::Hydrating);
            assert_eq!(guard.outcome(), GuardOutcome::Loading);
        }
    }

    #[test]
    fn hydrated_and_authenticated_renders_children() {
        let mut guard = RouteGuard::new();
        guard.mount();

        assert_eq!(guard.advance(&snapshot(true, true, true)), GuardState::Deciding);
        // Decision still pending: nothing protected renders yet.
        assert_eq!(guard.outcome(), GuardOutcome::Loading);

        assert_eq!(guard.advance(&snapshot(true, true, true)), GuardState::Authorized);
        assert_eq!(guard.outcome(), GuardOutcome::RenderChildren);
    }

    #[test]
    fn hydrated_but_unauthenticated_redirects() {
        let mut guard = RouteGuard::new();
        guard.mount();
        guard.resolve(&snapshot(true, false, false));
        assert_eq!(guard.state(), GuardState::Redirecting);
        assert_eq!(guard.outcome(), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn authenticated_flag_without_identity_redirects() {
        let mut guard = RouteGuard::new();
        guard.mount();
        guard.resolve(&snapshot(true, true, false));
        assert_eq!(guard.state(), GuardState::Redirecting);
    }

    #[test]
    fn redirecting_is_terminal_for_the_mount() {
        let mut guard = RouteGuard::new();
        guard.mount();
        guard.resolve(&snapshot(true, false, false));
        assert_eq!(guard.state(), GuardState::Redirecting);

        // A late sign-in does not resurrect this mount.
        guard.resolve(&snapshot(true, true, true));
        assert_eq!(guard.state(), GuardState::Redirecting);
    }

    #[test]
    fn authorized_holds_for_the_mount() {
        let mut guard = RouteGuard::new();
        guard.mount();
        guard.resolve(&snapshot(true, true, true));
        assert_eq!(guard.state(), GuardState::Authorized);

        guard.resolve(&snapshot(true, false, false));
        assert_eq!(guard.state(), GuardState::Authorized);
    }

    #[test]
    fn hydration_mid_flight_moves_to_decision() {
        let mut guard = RouteGuard::new();
        guard.mount();
        guard.advance(&snapshot(false, false, false));
        assert_eq!(guard.state(), GuardState::Hydrating);

        guard.advance(&snapshot(true, false, false));
        assert_eq!(guard.state(), GuardState::Deciding);
    }
}
