//! Fixed-size buffers carved out of one externally owned memory block.

/// Hands out consecutive, non-overlapping chunks of a sample block.
#[derive(Debug, Default)]
pub struct Arena<'a> {
    free: &'a mut [f32],
    used: usize,
}

impl<'a> Arena<'a> {
    pub fn new(memory: &'a mut [f32]) -> Self {
        Self {
            free: memory,
            used: 0,
        }
    }

    /// Samples still available.
    pub fn remaining(&self) -> usize {
        self.free.len()
    }

    /// Samples handed out so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Takes the next `SIZE` samples, cleared to zero.
    ///
    /// Returns `None` and leaves the arena untouched if the block is exhausted.
    pub fn allocate<const SIZE: usize>(&mut self) -> Option<&'a mut [f32; SIZE]> {
        if self.free.len() < SIZE {
            return None;
        }

        let free = core::mem::take(&mut self.free);
        let (head, tail) = free.split_at_mut(SIZE);
        self.free = tail;
        self.used += SIZE;
        head.fill(0.0);

        head.try_into().ok()
    }
}
