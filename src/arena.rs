//! Slot-indexed pool of box buffers.
//!
//! The branch-and-bound loop creates and destroys boxes every iteration.
//! [`BoxArena`] keeps released buffers on a free list and hands them out
//! again, so the hot loop stops allocating once the frontier has reached
//! its working size.
//!
//! A [`Slot`] is a move-only handle: it is owned by exactly one holder
//! (a frontier entry, or the engine while it processes the box) and is
//! consumed by [`BoxArena::release`]. A slot can therefore never sit in
//! the frontier and on the free list at the same time.

use crate::region::{PBox, Region, Storage};

/// Handle to an arena buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct Slot(usize);

impl Slot {
    /// Position of the buffer inside the arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Free-list pool of [`PBox`] buffers.
#[derive(Debug)]
pub struct BoxArena<S: Storage, const D: usize> {
    slots: Vec<PBox<S, D>>,
    free: Vec<usize>,
}

impl<S: Storage, const D: usize> Default for BoxArena<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage, const D: usize> BoxArena<S, D> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `region` in a recycled buffer if one is free, otherwise in a
    /// fresh one.
    pub fn checkout(&mut self, region: &Region<D>) -> Slot {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(PBox::default());
                self.slots.len() - 1
            }
        };
        self.slots[index].store(region);
        Slot(index)
    }

    /// Returns the buffer behind `slot` to the free list.
    pub fn release(&mut self, slot: Slot) {
        debug_assert!(slot.0 < self.slots.len());
        self.free.push(slot.0);
    }

    /// Compact box behind `slot`.
    pub fn get(&self, slot: &Slot) -> &PBox<S, D> {
        &self.slots[slot.0]
    }

    /// Box behind `slot`, widened to working precision.
    pub fn load(&self, slot: &Slot) -> Region<D> {
        self.slots[slot.0].load()
    }

    /// Total number of buffers ever allocated (in use plus free).
    ///
    /// Buffers are never shrunk, so this is the peak number of boxes held
    /// at once.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of buffers waiting on the free list.
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Number of buffers currently checked out.
    pub fn in_use(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Bytes held by one buffer (two corners of `D` storage values).
    pub fn box_size() -> usize {
        std::mem::size_of::<PBox<S, D>>()
    }
}
