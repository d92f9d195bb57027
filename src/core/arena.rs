//! NodeArena - bump-allocated, bulk-clearable storage for per-step data.
//!
//! Allocated once, reused every sub-step. Nothing is freed individually:
//! `clear()` drops the length back to zero and keeps the memory around.
//! Handles are plain `i32` indices so they can double as intrusive list
//! links, with `NIL` meaning "no link".

/// Handle value meaning "no element".
pub const NIL: i32 = -1;

pub struct NodeArena<T> {
    data: Vec<T>,
    count: usize,
    grow_count: usize,
}

impl<T: Copy + Default> NodeArena<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity.max(1)], // Single allocation at startup
            count: 0,
            grow_count: 0,
        }
    }

    #[inline(always)]
    fn grow(&mut self) {
        let old_capacity = self.data.len();
        let new_capacity = old_capacity.saturating_mul(2).max(old_capacity.saturating_add(1));
        assert!(
            new_capacity <= i32::MAX as usize,
            "NodeArena exhausted: cannot address more than i32::MAX nodes"
        );
        self.data.resize(new_capacity, T::default());
        self.grow_count += 1;
    }

    /// Append a value and return its handle. Grows when full; never fails.
    #[inline(always)]
    pub fn append(&mut self, value: T) -> i32 {
        if self.count >= self.data.len() {
            self.grow();
        }
        let handle = self.count;
        self.data[handle] = value;
        self.count += 1;
        handle as i32
    }

    /// Reset counter - memory stays allocated
    #[inline(always)]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline(always)]
    fn slot(&self, handle: i32) -> usize {
        assert!(handle >= 0, "NodeArena: dereferenced a NIL handle");
        let idx = handle as usize;
        assert!(
            idx < self.count,
            "NodeArena: handle {} out of range (len {})",
            handle,
            self.count
        );
        idx
    }

    #[inline(always)]
    pub fn get(&self, handle: i32) -> &T {
        &self.data[self.slot(handle)]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, handle: i32) -> &mut T {
        let idx = self.slot(handle);
        &mut self.data[idx]
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.count]
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of reallocations since creation.
    #[inline(always)]
    pub fn grow_count(&self) -> usize {
        self.grow_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_sequential_handles_and_grows() {
        let mut arena: NodeArena<u32> = NodeArena::new(2);
        assert_eq!(arena.append(10), 0);
        assert_eq!(arena.append(11), 1);
        assert_eq!(arena.append(12), 2);

        assert_eq!(arena.len(), 3);
        assert!(arena.capacity() >= 3);
        assert_eq!(arena.grow_count(), 1);
        assert_eq!(*arena.get(2), 12);
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut arena: NodeArena<u32> = NodeArena::new(4);
        for i in 0..10 {
            arena.append(i);
        }
        let cap = arena.capacity();
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), cap);
        assert_eq!(arena.append(7), 0);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut arena: NodeArena<u32> = NodeArena::new(1);
        let h = arena.append(1);
        *arena.get_mut(h) = 5;
        assert_eq!(arena.as_slice(), &[5]);
    }

    #[test]
    #[should_panic(expected = "NIL")]
    fn nil_handle_panics() {
        let arena: NodeArena<u32> = NodeArena::new(1);
        let _ = arena.get(NIL);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn stale_handle_after_clear_panics() {
        let mut arena: NodeArena<u32> = NodeArena::new(1);
        let h = arena.append(3);
        arena.clear();
        let _ = arena.get(h);
    }
}
