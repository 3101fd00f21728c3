//! Lifecycle of a single asynchronous action.
//!
//! Each run is tagged with a [`Generation`]. Only the most recently started
//! run may publish its outcome; results of superseded runs (and of runs that
//! outlive their view) are dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Visible state of an async action.
///
/// At most one of `data` / `error` is set, and `loading` is false once the
/// action has settled.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncState<T, E> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<E>,
}

impl<T, E> AsyncState<T, E> {
    /// Nothing started yet.
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// A run is in flight. Previous data and error are cleared.
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn failure(error: E) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error),
        }
    }

    pub fn settled(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(error) => Self::failure(error),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }
}

impl<T, E> Default for AsyncState<T, E> {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Monotonic request counter shared between a view and its in-flight runs.
///
/// Single-threaded: clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGenerations(Rc<Cell<u64>>);

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding every earlier one.
    pub fn begin(&self) -> Generation {
        let next = self.0.get() + 1;
        self.0.set(next);
        Generation(next)
    }

    pub fn current(&self) -> Generation {
        Generation(self.0.get())
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.0.get() == generation.0
    }

    /// Supersedes all in-flight runs without starting a new one.
    /// Called when the owning view is torn down.
    pub fn invalidate(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Starts `action` as a new generation.
///
/// The generation is taken and `apply` receives the pending state right
/// away, before the returned future is first polled. The settled state is
/// applied only if no newer run has started (and the generations were not
/// invalidated) by the time `action` resolves. The outcome is returned to
/// the caller either way.
pub fn run_tracked<T, E, F, A>(
    generations: RequestGenerations,
    action: F,
    mut apply: A,
) -> impl Future<Output = Result<T, E>>
where
    F: Future<Output = Result<T, E>>,
    A: FnMut(AsyncState<T, E>),
    T: Clone,
    E: Clone,
{
    let generation = generations.begin();
    apply(AsyncState::pending());

    async move {
        let result = action.await;
        if generations.is_current(generation) {
            apply(AsyncState::settled(result.clone()));
        }
        result
    }
}

/// Remembers the last dependency value and reports whether a new one differs.
///
/// The first value always counts as a change (mount).
#[derive(Debug)]
pub struct DependencyGate<D> {
    last: Option<D>,
}

impl<D> Default for DependencyGate<D> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<D: PartialEq> DependencyGate<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changed(&mut self, next: D) -> bool {
        if self.last.as_ref() == Some(&next) {
            return false;
        }
        self.last = Some(next);
        true
    }
}
