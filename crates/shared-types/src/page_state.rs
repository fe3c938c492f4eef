use crate::{AccessGate, GateDecision, NavRequest, PageResolver, RedirectTarget, SessionSnapshot};

/// Render state of a role-gated page with a selectable sub-view.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<V> {
    /// Waiting for the session. Nothing but a loading indicator renders.
    Loading,
    /// The gate rejected the session; a redirect is in flight.
    Unauthorized(RedirectTarget),
    /// Access granted, but no view has resolved yet.
    Resolving,
    Ready(V),
}

/// Drives a gated page from two independent triggers: session changes and
/// `page` identifier changes. Either may fire first.
#[derive(Debug, Clone)]
pub struct AdminPage<V> {
    gate: AccessGate,
    state: PageState<V>,
    active: Option<V>,
}

impl<V: Clone> AdminPage<V> {
    pub fn new(gate: AccessGate) -> Self {
        Self {
            gate,
            state: PageState::Loading,
            active: None,
        }
    }

    pub fn state(&self) -> &PageState<V> {
        &self.state
    }

    /// The last view that resolved, whether or not it may render yet.
    pub fn active_view(&self) -> Option<&V> {
        self.active.as_ref()
    }

    /// Whether the sidebar and view may render.
    pub fn is_authorized(&self) -> bool {
        matches!(self.state, PageState::Resolving | PageState::Ready(_))
    }

    /// Run the gate. Only the first decisive result counts: once access is
    /// granted or refused, later session changes are ignored.
    pub fn on_session(&mut self, session: &SessionSnapshot) -> Option<NavRequest> {
        if !matches!(self.state, PageState::Loading) {
            return None;
        }

        match self.gate.evaluate(session) {
            GateDecision::Pending => None,
            GateDecision::Redirect(target) => {
                tracing::info!(
                    to = target.path(),
                    required = self.gate.required().code(),
                    "access denied, redirecting"
                );
                self.state = PageState::Unauthorized(target);
                Some(NavRequest::Replace(target))
            }
            GateDecision::Granted => {
                tracing::info!("access granted");
                self.state = match &self.active {
                    Some(view) => PageState::Ready(view.clone()),
                    None => PageState::Resolving,
                };
                None
            }
        }
    }

    /// Resolve a new `page` identifier. Unresolved identifiers leave the
    /// active view untouched.
    pub fn on_page(
        &mut self,
        resolver: &PageResolver<V>,
        requested: Option<&str>,
    ) -> Option<NavRequest> {
        let resolution = resolver.resolve(requested);
        let navigation = resolution.navigation();

        if let Some(view) = resolution.into_view() {
            if self.is_authorized() {
                self.state = PageState::Ready(view.clone());
            }
            self.active = Some(view);
        }

        navigation
    }
}
