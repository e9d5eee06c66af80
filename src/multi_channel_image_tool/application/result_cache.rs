use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::channel::Channel;
use crate::domain::channel_source::Fingerprint;
use crate::domain::pixel_buffer::PixelBuffer;

/// Remembers the last result of one logical slot together with the key it
/// was computed from.
#[derive(Debug)]
pub struct ResultCache<K> {
    entry: Option<(K, Arc<PixelBuffer>)>,
}

impl<K> Default for ResultCache<K> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq> ResultCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored buffer if `key` matches the stored key, otherwise
    /// runs `compute` and replaces the entry with its result.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> Arc<PixelBuffer>
    where
        F: FnOnce() -> PixelBuffer,
    {
        if let Some((stored, buffer)) = &self.entry {
            if *stored == key {
                return Arc::clone(buffer);
            }
        }
        let buffer = Arc::new(compute());
        self.entry = Some((key, Arc::clone(&buffer)));
        buffer
    }

    /// Same as [`get_or_compute`](Self::get_or_compute) but also reports
    /// whether the stored value was reused.
    pub fn get_or_compute_traced<F>(&mut self, key: K, compute: F) -> (Arc<PixelBuffer>, bool)
    where
        F: FnOnce() -> PixelBuffer,
    {
        let mut computed = false;
        let buffer = self.get_or_compute(key, || {
            computed = true;
            compute()
        });
        (buffer, !computed)
    }
}

/// Locks a slot, recovering the entry if a previous holder panicked.
pub fn lock_slot<K>(slot: &Mutex<ResultCache<K>>) -> MutexGuard<'_, ResultCache<K>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One independently locked cache per R, G, B, A slot.
#[derive(Debug, Default)]
pub struct SlotCaches {
    slots: [Mutex<ResultCache<Fingerprint>>; 4],
}

impl SlotCaches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, channel: Channel) -> &Mutex<ResultCache<Fingerprint>> {
        &self.slots[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    fn filled(width: u32) -> PixelBuffer {
        PixelBuffer::new(width, 1)
    }

    #[test]
    fn test_same_key_computes_once() {
        let calls = Cell::new(0);
        let mut cache = ResultCache::new();

        let first = cache.get_or_compute("key", || {
            calls.set(calls.get() + 1);
            filled(2)
        });
        let second = cache.get_or_compute("key", || {
            calls.set(calls.get() + 1);
            filled(3)
        });

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.width(), 2);
    }

    #[test]
    fn test_different_keys_compute_twice_without_stale_result() {
        let calls = Cell::new(0);
        let mut cache = ResultCache::new();

        cache.get_or_compute(1, || {
            calls.set(calls.get() + 1);
            filled(2)
        });
        let second = cache.get_or_compute(2, || {
            calls.set(calls.get() + 1);
            filled(5)
        });

        assert_eq!(calls.get(), 2);
        assert_eq!(second.width(), 5);

        let (again, hit) = cache.get_or_compute_traced(2, || filled(6));
        assert!(hit);
        assert!(Arc::ptr_eq(&again, &second));
    }

    #[test]
    fn test_returning_to_old_key_recomputes() {
        let mut cache = ResultCache::new();
        cache.get_or_compute('a', || filled(1));
        cache.get_or_compute('b', || filled(2));
        let (buffer, hit) = cache.get_or_compute_traced('a', || filled(3));
        assert!(!hit);
        assert_eq!(buffer.width(), 3);

        let (_, hit) = cache.get_or_compute_traced('a', || filled(4));
        assert!(hit);
    }

    #[test]
    fn test_slots_lock_independently() {
        let caches = Arc::new(SlotCaches::new());
        let held = lock_slot(caches.slot(Channel::R));

        let other = Arc::clone(&caches);
        let handle = thread::spawn(move || {
            let mut slot = lock_slot(other.slot(Channel::G));
            slot.get_or_compute(crate::domain::channel_source::ChannelSource::uniform(3).fingerprint(), || filled(4))
                .width()
        });

        assert_eq!(handle.join().unwrap(), 4);
        drop(held);
    }
}
