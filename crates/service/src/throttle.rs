use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use waitlist_core::Cooldown;

/// Per-client submit suppression after a successful signup.
///
/// Clients are opaque keys. The HTTP layer passes the peer IP, or the first
/// `X-Forwarded-For` hop when configured to trust it. Behind a reverse proxy
/// without that setting every visitor shares the proxy's key, and one signup
/// suppresses the whole site for the window.
///
/// Expired entries are pruned whenever the map is touched, so it only holds
/// clients still inside their window.
pub struct SubmitThrottle {
    window: Duration,
    clients: Mutex<HashMap<String, Cooldown>>,
}

impl SubmitThrottle {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, clients: Mutex::new(HashMap::new()) }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// `Err(remaining)` while `client` is cooling down.
    pub async fn check(&self, client: &str) -> Result<(), Duration> {
        let now = Instant::now().into_std();
        let mut clients = self.clients.lock().await;
        clients.retain(|_, cooldown| cooldown.is_active(now));
        match clients.get(client) {
            Some(cooldown) => Err(cooldown.remaining(now)),
            None => Ok(()),
        }
    }

    /// Start `client`'s window from now.
    pub async fn arm(&self, client: &str) {
        if self.window.is_zero() {
            return;
        }
        let now = Instant::now().into_std();
        let mut cooldown = Cooldown::new(self.window);
        cooldown.arm(now);
        self.clients.lock().await.insert(client.to_owned(), cooldown);
    }

    pub async fn tracked_clients(&self) -> usize {
        self.clients.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_unknown_client_passes() {
        let throttle = SubmitThrottle::new(Duration::from_secs(3));
        assert!(throttle.check("10.0.0.1").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_armed_client_is_held_until_window_elapses() {
        let throttle = SubmitThrottle::new(Duration::from_secs(3));
        throttle.arm("10.0.0.1").await;

        let remaining = throttle.check("10.0.0.1").await.unwrap_err();
        assert_eq!(remaining, Duration::from_secs(3));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(throttle.check("10.0.0.1").await.unwrap_err(), Duration::from_secs(2));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(throttle.check("10.0.0.1").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clients_are_independent() {
        let throttle = SubmitThrottle::new(Duration::from_secs(3));
        throttle.arm("10.0.0.1").await;
        assert!(throttle.check("10.0.0.2").await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entries_pruned() {
        let throttle = SubmitThrottle::new(Duration::from_secs(3));
        throttle.arm("a").await;
        throttle.arm("b").await;
        assert_eq!(throttle.tracked_clients().await, 2);

        tokio::time::advance(Duration::from_secs(4)).await;
        throttle.check("c").await.unwrap();
        assert_eq!(throttle.tracked_clients().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_window_never_throttles() {
        let throttle = SubmitThrottle::new(Duration::ZERO);
        throttle.arm("a").await;
        assert!(throttle.check("a").await.is_ok());
        assert_eq!(throttle.tracked_clients().await, 0);
    }
}
