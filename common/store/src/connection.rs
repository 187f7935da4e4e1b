use crate::{Store, Subscription};
use std::fmt;

/// Local mirror of a store's state, kept for a single consumer.
///
/// The snapshot is taken on construction. Once attached, every dispatch
/// triggers `on_change`, after which the consumer is expected to call
/// [`Connection::refresh`]. The subscription is released on [`detach`] or
/// when the connection is dropped.
///
/// [`detach`]: Connection::detach
pub struct Connection<S, A> {
    store: Store<S, A>,
    state: S,
    subscription: Option<Subscription>,
}

impl<S, A> Connection<S, A>
where
    S: Clone + PartialEq + 'static,
    A: fmt::Debug + 'static,
{
    pub fn new(store: Store<S, A>) -> Self {
        let state = store.state();
        Self {
            store,
            state,
            subscription: None,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn store(&self) -> &Store<S, A> {
        &self.store
    }

    /// Subscribes to the store. Returns `false` if already attached.
    pub fn attach<F>(&mut self, on_change: F) -> bool
    where
        F: Fn() + 'static,
    {
        if self.subscription.is_some() {
            return false;
        }
        self.subscription = Some(self.store.subscribe(on_change));
        true
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Replaces the local snapshot with the store's current state.
    /// Returns whether the snapshot changed.
    pub fn refresh(&mut self) -> bool {
        let state = self.store.state();
        let changed = state != self.state;
        self.state = state;
        changed
    }

    /// Releases the subscription. Returns `false` if nothing was attached.
    pub fn detach(&mut self) -> bool {
        self.subscription.take().is_some()
    }

    /// Dispatch handle bound to the underlying store.
    pub fn dispatcher(&self) -> impl Fn(A) + Clone + 'static {
        let store = self.store.clone();
        move |action| store.dispatch(action)
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Connection<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("state", &self.state)
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}
