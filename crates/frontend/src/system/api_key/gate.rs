//! API key gate state machine.
//!
//! ```text
//!   Pending ──query(true)──────────────▶ Unlocked (terminal)
//!      │                                     ▲
//!      └──query(false) / query(Err)──▶ Locked ┘ selection settled (any outcome)
//! ```
//!
//! `Pending` is optimistic: the key is assumed present until the host answers.

use super::host::{HostError, KeyHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GateStatus {
    #[default]
    Pending,
    Locked,
    Unlocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    QueryResolved(Result<bool, HostError>),
    SelectionStarted,
    /// Selection flow finished. The result is logged and otherwise ignored.
    SelectionSettled(Result<(), HostError>),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GateState {
    pub status: GateStatus,
    /// Selection flow is running; the action button is disabled.
    pub selecting: bool,
    /// Last host query failure shown on the gate screen.
    pub error: Option<String>,
}

impl GateState {
    /// Credential-presence flag: feature surfaces may render.
    pub fn is_open(&self) -> bool {
        matches!(self.status, GateStatus::Pending | GateStatus::Unlocked)
    }

    /// The selection action is offered only on the blocking screen.
    pub fn can_select(&self) -> bool {
        self.status == GateStatus::Locked && !self.selecting
    }

    pub fn apply(&self, event: GateEvent) -> GateState {
        if self.status == GateStatus::Unlocked {
            return self.clone();
        }

        match event {
            GateEvent::QueryResolved(Ok(true)) => GateState {
                status: GateStatus::Unlocked,
                selecting: false,
                error: None,
            },
            GateEvent::QueryResolved(Ok(false)) => GateState {
                status: GateStatus::Locked,
                selecting: self.selecting,
                error: None,
            },
            GateEvent::QueryResolved(Err(e)) => GateState {
                status: GateStatus::Locked,
                selecting: self.selecting,
                error: Some(e.to_string()),
            },
            GateEvent::SelectionStarted => GateState {
                status: self.status,
                selecting: true,
                error: self.error.clone(),
            },
            // Optimistic success: the host may report the new key late, so
            // settlement alone unlocks.
            GateEvent::SelectionSettled(_) => GateState {
                status: GateStatus::Unlocked,
                selecting: false,
                error: None,
            },
        }
    }
}

/// Mount-time query.
pub async fn check_api_key(host: &dyn KeyHost) -> GateEvent {
    let result = host.has_selected_api_key().await;
    match &result {
        Ok(true) => log::info!("api key gate: key selected ({})", host.name()),
        Ok(false) => log::info!("api key gate: no key selected, locking"),
        Err(e) => log::error!("api key gate: query failed: {}", e),
    }
    GateEvent::QueryResolved(result)
}

/// User-triggered selection flow.
pub async fn select_api_key(host: &dyn KeyHost) -> GateEvent {
    let result = host.open_select_key().await;
    if let Err(e) = &result {
        log::warn!("api key gate: selection flow failed, unlocking anyway: {}", e);
    } else {
        log::info!("api key gate: selection flow settled, unlocking");
    }
    GateEvent::SelectionSettled(result)
}

#[cfg(test)]
mod tests {
    use super::super::host::{HostFuture, NoHost, HAS_SELECTED_API_KEY, OPEN_SELECT_KEY};
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Host with canned answers that counts calls.
    struct ScriptedHost {
        query: Result<bool, HostError>,
        select: Result<(), HostError>,
        select_calls: Cell<u32>,
    }

    impl ScriptedHost {
        fn new(query: Result<bool, HostError>, select: Result<(), HostError>) -> Self {
            Self {
                query,
                select,
                select_calls: Cell::new(0),
            }
        }
    }

    impl KeyHost for ScriptedHost {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn has_selected_api_key(&self) -> HostFuture<'_, bool> {
            let result = self.query.clone();
            Box::pin(async move { result })
        }

        fn open_select_key(&self) -> HostFuture<'_, ()> {
            self.select_calls.set(self.select_calls.get() + 1);
            let result = self.select.clone();
            Box::pin(async move { result })
        }
    }

    fn run_mount(host: &dyn KeyHost) -> GateState {
        let event = block_on(check_api_key(host));
        GateState::default().apply(event)
    }

    fn run_selection(state: &GateState, host: &dyn KeyHost) -> GateState {
        let started = state.apply(GateEvent::SelectionStarted);
        assert!(started.selecting);
        assert!(!started.can_select());
        started.apply(block_on(select_api_key(host)))
    }

    fn rejected(method: &'static str) -> HostError {
        HostError::Rejected {
            method,
            message: "user cancelled".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_optimistic() {
        let state = GateState::default();
        assert_eq!(state.status, GateStatus::Pending);
        assert!(state.is_open());
        assert!(!state.can_select());
    }

    #[test]
    fn test_absent_host_never_blocks() {
        let state = run_mount(&NoHost);
        assert_eq!(state.status, GateStatus::Unlocked);
        assert!(state.is_open());
    }

    #[test]
    fn test_query_true_unlocks_immediately() {
        let host = ScriptedHost::new(Ok(true), Ok(()));
        let state = run_mount(&host);
        assert_eq!(state.status, GateStatus::Unlocked);
        assert!(state.is_open());
        assert_eq!(host.select_calls.get(), 0);
    }

    #[test]
    fn test_query_false_locks() {
        let host = ScriptedHost::new(Ok(false), Ok(()));
        let state = run_mount(&host);
        assert_eq!(state.status, GateStatus::Locked);
        assert!(!state.is_open());
        assert!(state.can_select());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_selection_unlocks_on_success() {
        let host = ScriptedHost::new(Ok(false), Ok(()));
        let locked = run_mount(&host);
        let state = run_selection(&locked, &host);
        assert_eq!(state.status, GateStatus::Unlocked);
        assert!(state.is_open());
        assert_eq!(host.select_calls.get(), 1);
    }

    #[test]
    fn test_selection_unlocks_even_when_cancelled() {
        let host = ScriptedHost::new(Ok(false), Err(rejected(OPEN_SELECT_KEY)));
        let locked = run_mount(&host);
        let state = run_selection(&locked, &host);
        assert_eq!(state.status, GateStatus::Unlocked);
        assert!(!state.selecting);
    }

    #[test]
    fn test_query_error_locks_and_reports() {
        let host = ScriptedHost::new(Err(rejected(HAS_SELECTED_API_KEY)), Ok(()));
        let state = run_mount(&host);
        assert_eq!(state.status, GateStatus::Locked);
        assert_eq!(
            state.error.as_deref(),
            Some("host call `hasSelectedApiKey` failed: user cancelled")
        );
        assert!(state.can_select());

        let state = run_selection(&state, &host);
        assert_eq!(state.status, GateStatus::Unlocked);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_unlocked_is_terminal() {
        let unlocked = GateState::default().apply(GateEvent::QueryResolved(Ok(true)));
        let events = [
            GateEvent::QueryResolved(Ok(false)),
            GateEvent::QueryResolved(Err(HostError::MissingMethod(HAS_SELECTED_API_KEY))),
            GateEvent::SelectionStarted,
            GateEvent::SelectionSettled(Err(rejected(OPEN_SELECT_KEY))),
        ];
        for event in events {
            assert_eq!(unlocked.apply(event), unlocked);
        }
    }
}
