//! A generational arena.
//!
//! Values live in a vector of slots.  Removing a value frees its slot for
//! reuse and bumps the slot's generation, so every key handed out for the
//! previous occupant stops resolving.  A slot whose generation is exhausted
//! is retired instead of reused.

use std::fmt::Debug;

/// A key into an [`Arena`].  Stable across insertions and removals of other
/// values; invalidated when its own value is removed or the arena is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaKey {
    index: usize,
    generation: u32,
}

impl ArenaKey {
    /// The slot index.  Unique among live keys and smaller than
    /// [`Arena::slot_bound`].
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<usize> },
    /// Generation exhausted; never handed out again.
    Retired,
}

#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
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

    /// Gets an exclusive upper bound on the slot index of every live key.
    pub fn slot_bound(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a value, reusing a vacant slot when one is available.
    pub fn insert(&mut self, value: T) -> ArenaKey {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index];
                let (generation, next_free) = match *slot {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => (generation, next_free),
                    Slot::Occupied { .. } | Slot::Retired => {
                        unreachable!("free list points at a slot that is not vacant")
                    }
                };
                self.free_head = next_free;
                *slot = Slot::Occupied { generation, value };
                ArenaKey { index, generation }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    value,
                });
                ArenaKey {
                    index,
                    generation: 0,
                }
            }
        }
    }

    pub fn contains(&self, key: ArenaKey) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: ArenaKey) -> Option<&T> {
        match self.slots.get(key.index) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: ArenaKey) -> Option<&mut T> {
        match self.slots.get_mut(key.index) {
            Some(Slot::Occupied { generation, value }) if *generation == key.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    /// Removes the value for `key`, returning it if the key was live.
    pub fn remove(&mut self, key: ArenaKey) -> Option<T> {
        let slot = self.slots.get_mut(key.index)?;
        if !matches!(slot, Slot::Occupied { generation, .. } if *generation == key.generation) {
            return None;
        }
        let freed = match key.generation.checked_add(1) {
            Some(generation) => Slot::Vacant {
                generation,
                next_free: self.free_head,
            },
            None => Slot::Retired,
        };
        let reusable = matches!(freed, Slot::Vacant { .. });
        let Slot::Occupied { value, .. } = std::mem::replace(slot, freed) else {
            unreachable!("slot checked as occupied")
        };
        if reusable {
            self.free_head = Some(key.index);
        }
        self.len -= 1;
        Some(value)
    }

    /// Removes every value.  Slots are kept for reuse, with their generations
    /// bumped so that no previously issued key resolves again.
    pub fn clear(&mut self) {
        let mut next_free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.checked_add(1),
                Slot::Vacant { generation, .. } => Some(*generation),
                Slot::Retired => None,
            };
            *slot = match generation {
                Some(generation) => Slot::Vacant {
                    generation,
                    next_free,
                },
                None => Slot::Retired,
            };
            if generation.is_some() {
                next_free = Some(index);
            }
        }
        self.free_head = next_free;
        self.len = 0;
    }

    /// Iterates over live keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = ArenaKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ArenaKey, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied { generation, value } => Some((
                    ArenaKey {
                        index,
                        generation: *generation,
                    },
                    value,
                )),
                Slot::Vacant { .. } | Slot::Retired => None,
            })
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Arena<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
