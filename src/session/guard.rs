//! Single in-flight request guard
//!
//! One per form. A submit arms the flag before its request goes out and the
//! returned guard disarms it on drop, including when the future is cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "request pending" flag for one form
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the flag. Returns `None` when a request is already pending.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                pending: Arc::clone(&self.pending),
            })
    }

    /// Whether a request is currently pending
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Disarms its [`InFlight`] flag when dropped
#[derive(Debug)]
pub struct InFlightGuard {
    pending: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_refused() {
        let flight = InFlight::new();
        let guard = flight.try_begin();
        assert!(guard.is_some());
        assert!(flight.is_pending());
        assert!(flight.try_begin().is_none());
    }

    #[test]
    fn test_drop_releases() {
        let flight = InFlight::new();
        {
            let _guard = flight.try_begin().unwrap();
        }
        assert!(!flight.is_pending());
        assert!(flight.try_begin().is_some());
    }

    #[test]
    fn test_clones_share_flag() {
        let flight = InFlight::new();
        let other = flight.clone();
        let _guard = flight.try_begin().unwrap();
        assert!(other.is_pending());
        assert!(other.try_begin().is_none());
    }
}
