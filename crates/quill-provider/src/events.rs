//! Configuration change signalling
//!
//! The host emits one event per settings write; adapters filter on their own
//! namespace and re-read credentials when it matches.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::provider::ModelProvider;

const CHANNEL_CAPACITY: usize = 64;

/// Notification that host configuration changed
#[derive(Debug, Clone)]
pub struct ConfigChangeEvent {
    changed: Vec<String>,
}

impl ConfigChangeEvent {
    /// Event covering the given settings keys or sections
    pub fn new(changed: Vec<String>) -> Self {
        Self { changed }
    }

    /// Event covering a single settings key or section
    pub fn single(key: impl Into<String>) -> Self {
        Self {
            changed: vec![key.into()],
        }
    }

    /// Whether any changed key falls within `namespace` or encloses it
    pub fn affects_configuration(&self, namespace: &str) -> bool {
        self.changed
            .iter()
            .any(|key| sections_overlap(key, namespace))
    }
}

/// Segment-aware overlap: `a.b` covers `a.b.c`, and `a` covers `a.b`
fn sections_overlap(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    long == short || (long.starts_with(short) && long[short.len()..].starts_with('.'))
}

/// Host-side sender of configuration change events
#[derive(Debug)]
pub struct ConfigSignal {
    tx: broadcast::Sender<ConfigChangeEvent>,
}

impl ConfigSignal {
    /// Create a signal with no subscribers yet
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe for change events
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChangeEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all current subscribers
    pub fn emit(&self, event: ConfigChangeEvent) {
        // Send only fails when nobody is subscribed
        let _ = self.tx.send(event);
    }
}

impl Default for ConfigSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for a running config listener; aborts the task on drop
#[derive(Debug)]
pub struct ConfigSubscription {
    handle: JoinHandle<()>,
}

impl Drop for ConfigSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Forward change events to a provider until the signal closes
///
/// The returned subscription must be held for as long as the provider should
/// react to settings changes; dropping it detaches the listener.
pub fn spawn_config_listener(
    provider: Arc<dyn ModelProvider>,
    mut rx: broadcast::Receiver<ConfigChangeEvent>,
) -> ConfigSubscription {
    let handle = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => provider.handle_config_change(&event),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    // Events were dropped; refresh unconditionally so no
                    // stale credential survives the gap
                    warn!(
                        provider = provider.identity().id,
                        missed, "config listener lagged"
                    );
                    provider.refresh_credentials();
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!(provider = provider.identity().id, "config signal closed");
                    break;
                }
            }
        }
    });
    ConfigSubscription { handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_namespace_matches() {
        let event = ConfigChangeEvent::single("quill.providers.googleai");
        assert!(event.affects_configuration("quill.providers.googleai"));
    }

    #[test]
    fn test_child_key_affects_section() {
        let event = ConfigChangeEvent::single("quill.providers.googleai.api_key");
        assert!(event.affects_configuration("quill.providers.googleai"));
    }

    #[test]
    fn test_parent_section_affects_namespace() {
        let event = ConfigChangeEvent::single("quill.providers");
        assert!(event.affects_configuration("quill.providers.googleai"));
    }

    #[test]
    fn test_sibling_prefix_does_not_match() {
        // "googleai2" shares a string prefix with "googleai" but is a
        // different section
        let event = ConfigChangeEvent::single("quill.providers.googleai2.api_key");
        assert!(!event.affects_configuration("quill.providers.googleai"));
    }

    #[test]
    fn test_unrelated_namespace_does_not_match() {
        let event = ConfigChangeEvent::single("quill.editor.theme");
        assert!(!event.affects_configuration("quill.providers.googleai"));
    }

    #[test]
    fn test_multi_key_event() {
        let event = ConfigChangeEvent::new(vec![
            "quill.editor.theme".to_string(),
            "quill.providers.googleai.api_key".to_string(),
        ]);
        assert!(event.affects_configuration("quill.providers.googleai"));
    }

    #[tokio::test]
    async fn test_signal_delivers_to_subscriber() {
        let signal = ConfigSignal::new();
        let mut rx = signal.subscribe();

        signal.emit(ConfigChangeEvent::single("quill.providers.googleai"));

        let event = rx.recv().await.expect("event delivered");
        assert!(event.affects_configuration("quill.providers.googleai"));
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_harmless() {
        let signal = ConfigSignal::new();
        signal.emit(ConfigChangeEvent::single("quill.providers.googleai"));
    }
}
