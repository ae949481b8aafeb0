use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::gate::{check_api_key, select_api_key, GateEvent, GateState};
use super::host::KeyHost;

/// Gate state plus the host it talks to, provided by [`ApiKeyProvider`].
#[derive(Clone, Copy)]
pub struct ApiKeyContext {
    pub state: RwSignal<GateState>,
    host: StoredValue<Rc<dyn KeyHost>, LocalStorage>,
}

impl ApiKeyContext {
    pub fn new(host: Rc<dyn KeyHost>) -> Self {
        Self {
            state: RwSignal::new(GateState::default()),
            host: StoredValue::new_local(host),
        }
    }

    fn host(&self) -> Option<Rc<dyn KeyHost>> {
        self.host.try_with_value(Rc::clone)
    }

    /// Applies `event` unless the owning scope is already gone.
    fn dispatch(&self, event: GateEvent) {
        let applied = self.state.try_update(|state| {
            *state = state.apply(event);
            state.status
        });
        match applied {
            Some(status) => log::debug!("api key gate: status {:?}", status),
            None => log::debug!("api key gate: late host result ignored after teardown"),
        }
    }

    /// Issues the mount-time query. Called once by the provider.
    pub fn start_check(&self) {
        let Some(host) = self.host() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let event = check_api_key(host.as_ref()).await;
            this.dispatch(event);
        });
    }

    /// Runs the host selection flow; the gate unlocks once it settles.
    pub fn open_selector(&self) {
        let Some(host) = self.begin_selection() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let event = select_api_key(host.as_ref()).await;
            this.dispatch(event);
        });
    }

    /// Marks the selection as running and hands out the host, or `None` when
    /// the gate is not locked or a selection is already in flight.
    fn begin_selection(&self) -> Option<Rc<dyn KeyHost>> {
        if !self.state.try_with_untracked(GateState::can_select)? {
            return None;
        }
        let host = self.host()?;
        self.dispatch(GateEvent::SelectionStarted);
        Some(host)
    }
}

/// Owns the gate for its subtree and starts the credential query on mount.
#[component]
pub fn ApiKeyProvider(host: Rc<dyn KeyHost>, children: ChildrenFn) -> impl IntoView {
    let ctx = ApiKeyContext::new(host);
    provide_context(ctx);
    ctx.start_check();

    children()
}

/// Hook to access the gate
pub fn use_api_key() -> ApiKeyContext {
    use_context::<ApiKeyContext>().expect("ApiKeyProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::api_key::{GateStatus, HostError, NoHost};

    fn locked_context() -> ApiKeyContext {
        let ctx = ApiKeyContext::new(Rc::new(NoHost));
        ctx.dispatch(GateEvent::QueryResolved(Ok(false)));
        ctx
    }

    #[test]
    fn test_late_result_after_teardown_is_ignored() {
        let owner = Owner::new();
        let ctx = owner.with(locked_context);
        assert_eq!(ctx.state.get_untracked().status, GateStatus::Locked);

        owner.cleanup();

        ctx.dispatch(GateEvent::SelectionSettled(Err(HostError::MissingMethod("openSelectKey"))));
        assert!(ctx.state.try_get_untracked().is_none());
        assert!(ctx.host().is_none());
        assert!(ctx.begin_selection().is_none());
    }

    #[test]
    fn test_selection_only_from_locked_and_not_twice() {
        let owner = Owner::new();
        owner.with(|| {
            let pending = ApiKeyContext::new(Rc::new(NoHost));
            assert!(pending.begin_selection().is_none());
            assert!(!pending.state.get_untracked().selecting);

            let ctx = locked_context();
            assert!(ctx.begin_selection().is_some());
            assert!(ctx.state.get_untracked().selecting);
            assert!(ctx.begin_selection().is_none());

            ctx.dispatch(GateEvent::SelectionSettled(Ok(())));
            let state = ctx.state.get_untracked();
            assert_eq!(state.status, GateStatus::Unlocked);
            assert!(!state.selecting);
            assert!(ctx.begin_selection().is_none());
        });
    }
}
