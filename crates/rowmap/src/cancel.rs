use crate::{Error, Result};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A shared flag that stops an in-flight materialization.
///
/// The flag is observed before each cursor advance, so a cancelled read
/// stops at a row boundary.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    pub fn new() -> Cancellation {
        Cancellation::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::cancelled())
        } else {
            Ok(())
        }
    }
}
