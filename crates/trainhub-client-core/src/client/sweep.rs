use std::sync::{Mutex, Weak};
use std::time::Duration;

use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, instrument, warn};
use trainhub_time::Seconds;

use super::ClientInner;

const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

/// Periodically re-validates the session token and forces a logout once it
/// is no longer valid.
///
/// The task only holds a weak reference so it never keeps the client alive.
/// It stops when the returned guard is dropped, when the client is gone or
/// after it has forced a logout
#[instrument(skip(inner))]
pub(super) fn spawn_expiry_sweep(inner: Weak<Mutex<ClientInner>>, period: Seconds) -> DropGuard {
    let token = CancellationToken::new();
    let cancelled = token.clone();
    let mut period = Duration::from(period);
    if period < MIN_SWEEP_PERIOD {
        warn!(?period, "expiry sweep period too short, using minimum");
        period = MIN_SWEEP_PERIOD;
    }
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // First tick completes immediately
        interval.tick().await;
        loop {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    debug!("expiry sweep cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if !sweep_once(&inner) {
                        break;
                    }
                }
            }
        }
    });
    token.drop_guard()
}

/// Returns false if the sweep should stop
fn sweep_once(inner: &Weak<Mutex<ClientInner>>) -> bool {
    let Some(inner) = inner.upgrade() else {
        debug!("client dropped, stopping expiry sweep");
        return false;
    };
    let mut guard = inner.lock().expect("mutex poisoned");
    if guard.active_session().is_some() {
        return true;
    }
    info!("session expired, forcing logout");
    guard.clear();
    false
}
