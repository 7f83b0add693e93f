//! Single-slot "latest sample" handoff between the input reader and the
//! frame tick. The writer overwrites, the reader takes; nothing queues.

use crate::protocol::RawSample;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Debug, Default)]
pub struct SampleSlot {
    inner: Arc<Mutex<Option<RawSample>>>,
}

impl SampleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<RawSample>> {
        // a panicked writer leaves at worst a stale sample behind
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace whatever is pending.
    pub fn publish(&self, sample: RawSample) {
        *self.lock() = Some(sample);
    }

    /// Read and clear.
    pub fn take(&self) -> Option<RawSample> {
        self.lock().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_sample_wins() {
        let slot = SampleSlot::new();
        slot.publish(RawSample::potentiometer(1));
        slot.publish(RawSample::potentiometer(2));
        assert_eq!(slot.take(), Some(RawSample::potentiometer(2)));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn clones_share_the_slot_across_threads() {
        let slot = SampleSlot::new();
        let writer = slot.clone();
        std::thread::spawn(move || writer.publish(RawSample::potentiometer(99)))
            .join()
            .unwrap();
        assert_eq!(slot.take(), Some(RawSample::potentiometer(99)));
    }
}
