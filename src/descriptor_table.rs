//! Dense storage addressed by monotonically assigned integer descriptors.
//!
//! Descriptors are handed out in insertion order and never reused: removing a
//! value leaves a hole, and clearing the table moves the key offset past every
//! descriptor issued so far.

use std::fmt::Debug;

#[derive(Clone)]
pub struct DescriptorTable<T> {
    entries: Vec<Option<T>>,
    key_offset: usize,
    len: usize,
}

impl<T> DescriptorTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            key_offset: 0,
            len: 0,
        }
    }

    /// Gets the number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the descriptor the next insertion will return.
    pub fn next_descriptor(&self) -> usize {
        self.key_offset + self.entries.len()
    }

    /// Gets an exclusive upper bound on [`Self::slot_of`] for live descriptors.
    pub fn slot_bound(&self) -> usize {
        self.entries.len()
    }

    /// Maps a descriptor to its zero-based position in the current storage.
    pub fn slot_of(&self, descriptor: usize) -> Option<usize> {
        descriptor
            .checked_sub(self.key_offset)
            .filter(|slot| *slot < self.entries.len())
    }

    pub fn insert(&mut self, value: T) -> usize {
        let descriptor = self.next_descriptor();
        self.entries.push(Some(value));
        self.len += 1;
        descriptor
    }

    pub fn get(&self, descriptor: usize) -> Option<&T> {
        self.entries.get(self.slot_of(descriptor)?)?.as_ref()
    }

    pub fn get_mut(&mut self, descriptor: usize) -> Option<&mut T> {
        let slot = self.slot_of(descriptor)?;
        self.entries.get_mut(slot)?.as_mut()
    }

    pub fn remove(&mut self, descriptor: usize) -> Option<T> {
        let slot = self.slot_of(descriptor)?;
        let value = self.entries[slot].take()?;
        self.len -= 1;
        Some(value)
    }

    /// Removes every value.  Descriptors issued before the call never become
    /// valid again.
    pub fn clear(&mut self) {
        self.key_offset += self.entries.len();
        self.entries.clear();
        self.len = 0;
    }

    /// Iterates over live descriptors in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(descriptor, _)| descriptor)
    }

    /// Iterates over live entries in ascending descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.as_ref().map(|value| (slot + self.key_offset, value)))
    }
}

impl<T> Default for DescriptorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for DescriptorTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
