//! Cooperative cancellation for in-flight generation calls

use tokio::sync::watch;

/// Create a connected cancel handle/token pair
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Caller-side handle that requests cancellation
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Request cancellation of every call holding a matching token
    pub fn cancel(&self) {
        // All tokens may be gone already; nothing to signal then
        let _ = self.tx.send(true);
    }
}

/// Token observed by a provider during a generation call
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once cancellation is requested
    ///
    /// Never resolves if the handle is dropped without cancelling, so a
    /// `select!` against this arm falls through to the request future.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Handle dropped without cancelling
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready};

    #[test]
    fn test_is_cancelled_transitions() {
        let (handle, token) = cancel_pair();
        assert!(!token.is_cancelled());

        handle.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancelled_pending_until_cancel() {
        let (handle, token) = cancel_pair();
        let mut fut = tokio_test::task::spawn(async move { token.cancelled().await });

        assert_pending!(fut.poll());
        handle.cancel();
        assert!(fut.is_woken());
        assert_ready!(fut.poll());
    }

    #[test]
    fn test_dropped_handle_never_resolves() {
        let (handle, token) = cancel_pair();
        let mut fut = tokio_test::task::spawn(async move { token.cancelled().await });

        assert_pending!(fut.poll());
        drop(handle);
        assert_pending!(fut.poll());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_across_tasks() {
        let (handle, token) = cancel_pair();
        let waiter = tokio::spawn(async move { token.cancelled().await });

        handle.cancel();
        waiter.await.expect("waiter task panicked");
    }
}
