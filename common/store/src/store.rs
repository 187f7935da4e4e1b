// Single-threaded store.
//
// Every clone of a `Store` points to the same state. Listeners are notified
// synchronously, in subscription order, before `dispatch` returns.

use crate::InitAction;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Reducer<S, A> = Box<dyn Fn(Option<&S>, &A) -> S>;
type Listener = Rc<dyn Fn()>;

struct Inner<S, A> {
    state: RefCell<S>,
    reducer: Reducer<S, A>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

trait Listeners {
    fn remove(&self, id: u64) -> bool;
}

impl<S, A> Listeners for Inner<S, A> {
    fn remove(&self, id: u64) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        before != listeners.len()
    }
}

#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

impl<S, A> Store<S, A>
where
    S: Clone + 'static,
    A: fmt::Debug + 'static,
{
    /// Creates a store whose initial state is computed by the reducer from the
    /// init action.
    pub fn new<R>(reducer: R) -> Self
    where
        R: Fn(Option<&S>, &A) -> S + 'static,
        A: InitAction,
    {
        let state = reducer(None, &A::init());
        Self::from_parts(Box::new(reducer), state)
    }

    /// Creates a store starting from a preloaded state.
    pub fn with_state<R>(reducer: R, state: S) -> Self
    where
        R: Fn(Option<&S>, &A) -> S + 'static,
    {
        Self::from_parts(Box::new(reducer), state)
    }

    fn from_parts(reducer: Reducer<S, A>, state: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                reducer,
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    pub fn state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    pub fn dispatch(&self, action: A) {
        let next = {
            let state = self.inner.state.borrow();
            (self.inner.reducer)(Some(&state), &action)
        };
        *self.inner.state.borrow_mut() = next;

        // snapshot, so listeners may (un)subscribe while being notified
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        tracing::debug!(?action, listeners = listeners.len(), "action dispatched");

        for listener in listeners {
            listener();
        }
    }

    /// Registers a listener called after every dispatch.
    ///
    /// The listener stays registered for as long as the returned
    /// [`Subscription`] lives.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        tracing::trace!(id, "listener subscribed");

        let inner: Rc<dyn Listeners> = self.inner.clone();
        Subscription {
            id,
            listeners: Rc::downgrade(&inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<S, A> PartialEq for Store<S, A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Keeps a store listener registered. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    listeners: Weak<dyn Listeners>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if listeners.remove(self.id) {
                tracing::trace!(id = self.id, "listener unsubscribed");
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
