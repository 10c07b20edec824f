//! Slot+generation table owning the backing arrays of C-side records.
//!
//! A C `FixArray` record holds only a `u64` handle into this table, never a
//! pointer to memory. Records that were copied and freed through another
//! copy carry stale generations and resolve to `None` instead of freed
//! memory. Handle `0` is never issued, so a zeroed record is always empty.

/// The reserved "no block" handle.
pub(crate) const NULL_HANDLE: u64 = 0;

/// Generation assigned to a slot on first use. Never zero.
const FIRST_GENERATION: u32 = 1;

/// Upper 32 bits = slot index, lower 32 bits = generation.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// Maps non-zero `u64` handles to owned values, reusing freed slots.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
}

impl<T> HandleTable<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store `value` and return its handle. The handle is never [`NULL_HANDLE`].
    pub fn insert(&mut self, value: T) -> u64 {
        if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            encode(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: FIRST_GENERATION,
                data: Some(value),
            });
            encode(slot_idx, FIRST_GENERATION)
        }
    }

    pub fn get(&self, handle: u64) -> Option<&T> {
        let slot = self.live_slot(handle)?;
        self.slots[slot].data.as_ref()
    }

    pub fn get_mut(&mut self, handle: u64) -> Option<&mut T> {
        let slot = self.live_slot(handle)?;
        self.slots[slot].data.as_mut()
    }

    /// Take the value out, invalidating `handle`.
    ///
    /// Returns `None` for stale, unknown, or null handles, so removing twice
    /// is harmless. A slot whose generation would wrap to zero is retired
    /// instead of recycled.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let slot_idx = self.live_slot(handle)?;
        let slot = &mut self.slots[slot_idx];
        let value = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(slot_idx as u32);
        }
        Some(value)
    }

    /// Number of values currently stored.
    #[cfg(test)]
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_list.len() - self.retired()
    }

    #[cfg(test)]
    fn retired(&self) -> usize {
        self.slots.iter().filter(|s| s.generation == 0).count()
    }

    fn live_slot(&self, handle: u64) -> Option<usize> {
        if handle == NULL_HANDLE {
            return None;
        }
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get(slot_idx as usize)?;
        (slot.generation == generation && slot.data.is_some()).then_some(slot_idx as usize)
    }
}
