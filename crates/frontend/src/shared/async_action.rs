//! Leptos hooks over [`contracts::shared::async_state`].
//!
//! ```rust,ignore
//! // Загрузка при монтировании
//! let file = use_async(move || fetch_registry_xml(url.clone()), || ());
//! let xml = move || file.state().with(|s| s.data.clone());
//!
//! // Ручной запуск
//! let reload = use_async_action(move || fetch_registry_xml(url.clone()));
//! reload.trigger();
//! ```

use contracts::shared::async_state::{run_tracked, AsyncState, DependencyGate, RequestGenerations};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;

type BoxedFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>>>>;
type BoxedAction<T, E> = Box<dyn Fn() -> BoxedFuture<T, E>>;

/// Handle returned by [`use_async_action`] and [`use_async`].
///
/// Copy: only arena handles inside, so it can be moved into any view closure.
pub struct AsyncAction<T: 'static, E: 'static> {
    state: RwSignal<AsyncState<T, E>>,
    action: StoredValue<BoxedAction<T, E>, LocalStorage>,
    generations: StoredValue<RequestGenerations, LocalStorage>,
}

impl<T: 'static, E: 'static> Clone for AsyncAction<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, E: 'static> Copy for AsyncAction<T, E> {}

impl<T, E> AsyncAction<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Current `{data, loading, error}`.
    pub fn state(&self) -> ReadSignal<AsyncState<T, E>> {
        self.state.read_only()
    }

    /// Starts a new run: the state turns pending at once, before the returned
    /// future is awaited. The settled state is written only if no newer run
    /// started by the time it resolves; the outcome is returned either way.
    ///
    /// `None` once the owning view has been disposed.
    pub fn perform(&self) -> Option<impl Future<Output = Result<T, E>> + 'static> {
        let state = self.state;
        let generations = self.generations.try_with_value(RequestGenerations::clone)?;
        // action не должен подписывать вызывающий Effect
        let action = untrack(|| self.action.try_with_value(|action| action()))?;

        Some(run_tracked(generations, action, move |next| {
            let _ = state.try_set(next);
        }))
    }

    /// Fire-and-forget [`perform`](Self::perform). Failures stay in
    /// `state().error`.
    pub fn trigger(&self) {
        if let Some(run) = self.perform() {
            spawn_local(async move {
                let _ = run.await;
            });
        }
    }
}

/// Tracks an async action started explicitly via `trigger`/`perform`.
/// Starts idle.
pub fn use_async_action<T, E, F, Fut>(action: F) -> AsyncAction<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    use_async_action_with(action, AsyncState::idle())
}

/// Same as [`use_async_action`] with an explicit initial state.
pub fn use_async_action_with<T, E, F, Fut>(
    action: F,
    initial: AsyncState<T, E>,
) -> AsyncAction<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let boxed: BoxedAction<T, E> = Box::new(move || -> BoxedFuture<T, E> { Box::pin(action()) });
    let generations = StoredValue::new_local(RequestGenerations::new());

    // после размонтирования поздние ответы не должны трогать состояние
    on_cleanup(move || {
        let _ = generations.try_with_value(RequestGenerations::invalidate);
    });

    AsyncAction {
        state: RwSignal::new(initial),
        action: StoredValue::new_local(boxed),
        generations,
    }
}

/// Runs `action` on mount and again whenever `dependencies()` yields a
/// different value. Starts in the pending state.
///
/// Reactive reads inside `dependencies` are tracked; pass `|| ()` to run
/// once on mount.
pub fn use_async<T, E, F, Fut, D>(
    action: F,
    dependencies: impl Fn() -> D + 'static,
) -> AsyncAction<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    D: PartialEq + 'static,
{
    let async_action = use_async_action_with(action, AsyncState::pending());
    let gate = StoredValue::new_local(DependencyGate::<D>::new());

    Effect::new(move |_| {
        let next = dependencies();
        let changed = gate.try_update_value(|gate| gate.changed(next)).unwrap_or(false);
        if changed {
            async_action.trigger();
        }
    });

    async_action
}
