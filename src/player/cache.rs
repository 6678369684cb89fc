use std::collections::HashMap;

use crate::foundation::core::{FrameCount, FrameIndex};

struct Slot<T> {
    value: T,
    // Insertion order, breaks distance ties in favour of evicting older frames.
    seq: u64,
}

/// Bounded frame store with farthest-first eviction.
///
/// When over capacity the entry whose index is farthest from the current playback index is
/// dropped. This is not LRU: near the ends of a sweep the two policies retain different sets.
pub struct FrameCache<T> {
    capacity: usize,
    slots: HashMap<FrameIndex, Slot<T>>,
    next_seq: u64,
    evictions: u64,
}

impl<T> FrameCache<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            slots: HashMap::with_capacity(capacity + 1),
            next_seq: 0,
            evictions: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, index: FrameIndex) -> bool {
        self.slots.contains_key(&index)
    }

    pub fn get(&self, index: FrameIndex) -> Option<&T> {
        self.slots.get(&index).map(|s| &s.value)
    }

    /// Total number of entries evicted so far.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Cached indices in ascending order.
    pub fn indices(&self) -> Vec<FrameIndex> {
        let mut out: Vec<FrameIndex> = self.slots.keys().copied().collect();
        out.sort_unstable();
        out
    }

    /// Insert a frame and evict until the cache is back within capacity.
    ///
    /// Returns the evicted indices, which may include `index` itself when it is the farthest.
    pub fn insert(&mut self, index: FrameIndex, value: T, current: FrameIndex) -> Vec<FrameIndex> {
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(slot) = self.slots.get_mut(&index) {
            slot.value = value;
            return Vec::new();
        }
        self.slots.insert(index, Slot { value, seq });

        let mut evicted = Vec::new();
        while self.slots.len() > self.capacity {
            match self.evict_farthest(current) {
                Some(i) => evicted.push(i),
                None => break,
            }
        }
        evicted
    }

    pub fn evict_farthest(&mut self, current: FrameIndex) -> Option<FrameIndex> {
        let victim = self
            .slots
            .iter()
            .max_by(|(ia, a), (ib, b)| {
                ia.distance(current)
                    .cmp(&ib.distance(current))
                    .then(b.seq.cmp(&a.seq))
            })
            .map(|(i, _)| *i)?;
        self.slots.remove(&victim);
        self.evictions += 1;
        Some(victim)
    }

    /// Closest cached frame to `want`, searching outward (`want - d` before `want + d`).
    pub fn closest(&self, want: FrameIndex, count: FrameCount) -> Option<(FrameIndex, &T)> {
        if let Some(v) = self.get(want) {
            return Some((want, v));
        }
        let last = count.last().0;
        let reach = want.0.max(last.saturating_sub(want.0));
        for d in 1..=reach {
            if let Some(lo) = want.0.checked_sub(d)
                && let Some(v) = self.get(FrameIndex(lo))
            {
                return Some((FrameIndex(lo), v));
            }
            let hi = want.0.saturating_add(d);
            if hi <= last
                && let Some(v) = self.get(FrameIndex(hi))
            {
                return Some((FrameIndex(hi), v));
            }
        }
        None
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/cache.rs"]
mod tests;
