use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt};
use futures::task::noop_waker_ref;

use super::{Element, OnComplete};

/// Default animation length
pub const DEFAULT_SPEED: Duration = Duration::from_millis(200);

/// Closest ancestor of `element` (not the element itself) matching `selector`
pub fn closest<E: Element>(element: &E, selector: &str) -> Option<E> {
    let mut cursor = element.parent();
    while let Some(parent) = cursor {
        if parent.matches(selector) {
            return Some(parent);
        }
        cursor = parent.parent();
    }
    None
}

/// Resolves once a scheduled animation (or a group of them) has finished.
///
/// A dropped callback also resolves the completion, so awaiting it never
/// hangs on an animation the document discarded.
#[must_use = "a completion does nothing unless awaited or polled"]
pub struct Completion {
    // None once resolved
    inner: Option<BoxFuture<'static, ()>>,
}

impl Completion {
    /// Already finished
    pub fn ready() -> Self {
        Self { inner: None }
    }

    /// A completion plus the callback that finishes it
    pub fn callback() -> (OnComplete, Self) {
        Self::callback_then(|| {})
    }

    /// Like [`Completion::callback`], running `then` before resolving
    pub fn callback_then<F>(then: F) -> (OnComplete, Self)
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = oneshot::channel::<()>();
        let on_complete: OnComplete = Box::new(move || {
            then();
            // receiver may be gone if nobody awaits
            let _ = tx.send(());
        });
        let completion = Self {
            inner: Some(rx.map(|_| ()).boxed()),
        };
        (on_complete, completion)
    }

    /// Resolves after every completion in `all` has
    pub fn all(all: Vec<Completion>) -> Self {
        if all.is_empty() {
            return Self::ready();
        }
        Self {
            inner: Some(future::join_all(all).map(|_| ()).boxed()),
        }
    }

    /// Poll once without a waker; `true` once finished
    pub fn is_complete(&mut self) -> bool {
        let mut cx = Context::from_waker(noop_waker_ref());
        Pin::new(self).poll(&mut cx).is_ready()
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(inner) = self.inner.as_mut() else {
            return Poll::Ready(());
        };
        match inner.as_mut().poll(cx) {
            Poll::Ready(()) => {
                self.inner = None;
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}
