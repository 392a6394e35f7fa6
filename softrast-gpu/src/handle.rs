// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed resource handles and the index-stable pool behind every resource
//! table.
//!
//! Handles are plain `u16` indices with `u16::MAX` as the invalid sentinel.
//! Freed slots are recycled through a free list, so a stale handle may alias
//! a newer resource; validity is the caller's contract, as everywhere else
//! in the engine.

use std::ops::{Index, IndexMut};

use softrast_common::{RawHandle, INVALID_HANDLE};

macro_rules! define_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub RawHandle);

        impl $name {
            pub const INVALID: Self = Self(INVALID_HANDLE);

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != INVALID_HANDLE
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

define_handle!(
    /// Raw byte buffer registered in the heap.
    BufferHandle
);
define_handle!(
    /// 2D texture.
    TextureHandle
);
define_handle!(
    /// Color target plus optional depth target.
    FrameBufferHandle
);
define_handle!(
    /// Vertex buffer (buffer + layout).
    VertexBufferHandle
);
define_handle!(
    /// Index buffer.
    IndexBufferHandle
);
define_handle!(
    /// Vertex or fragment shader descriptor.
    ShaderHandle
);
define_handle!(
    /// Vertex + fragment shader pair.
    ProgramHandle
);
define_handle!(
    /// Named global vec4 slot.
    UniformHandle
);

/// Render pass index.
pub type ViewId = u16;

/// Index-stable object pool: a growable array with a free list.
///
/// Slots keep their index for the lifetime of the pool; removing recycles
/// the slot for a later insert.
#[derive(Debug)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
    free: Vec<RawHandle>,
    len: usize,
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> RawHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index as usize] = Some(value);
            index
        } else {
            debug_assert!(self.slots.len() < INVALID_HANDLE as usize);
            self.slots.push(Some(value));
            (self.slots.len() - 1) as RawHandle
        }
    }

    pub fn get(&self, index: RawHandle) -> Option<&T> {
        self.slots.get(index as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: RawHandle) -> Option<&mut T> {
        self.slots.get_mut(index as usize).and_then(Option::as_mut)
    }

    /// Remove and return the value at `index`. Panics on a vacant slot.
    pub fn remove(&mut self, index: RawHandle) -> T {
        let slot = match self.slots.get_mut(index as usize) {
            Some(slot) => slot.take(),
            None => None,
        };
        match slot {
            Some(value) => {
                self.free.push(index);
                self.len -= 1;
                value
            }
            None => panic!("pool slot {index} is vacant"),
        }
    }

    /// Mutable access to two distinct slots at once.
    pub fn get2_mut(&mut self, a: RawHandle, b: RawHandle) -> (&mut T, &mut T) {
        assert_ne!(a, b, "aliasing pool access");
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let lo_slot = match head[lo as usize].as_mut() {
            Some(value) => value,
            None => panic!("pool slot {lo} is vacant"),
        };
        let hi_slot = match tail[0].as_mut() {
            Some(value) => value,
            None => panic!("pool slot {hi} is vacant"),
        };
        if a < b {
            (lo_slot, hi_slot)
        } else {
            (hi_slot, lo_slot)
        }
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<RawHandle> for Pool<T> {
    type Output = T;

    fn index(&self, index: RawHandle) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("pool slot {index} is vacant"),
        }
    }
}

impl<T> IndexMut<RawHandle> for Pool<T> {
    fn index_mut(&mut self, index: RawHandle) -> &mut T {
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("pool slot {index} is vacant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut pool = Pool::new();
        let a = pool.insert(10u32);
        let b = pool.insert(20u32);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[a], 10);
        assert_eq!(pool[b], 20);
    }

    #[test]
    fn test_remove_recycles_slot() {
        let mut pool = Pool::new();
        let a = pool.insert(1u32);
        let _b = pool.insert(2u32);
        assert_eq!(pool.remove(a), 1);
        assert!(pool.get(a).is_none());

        let c = pool.insert(3u32);
        assert_eq!(c, a);
        assert_eq!(pool[c], 3);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_empty_after_removals() {
        let mut pool = Pool::new();
        let a = pool.insert(1u32);
        let b = pool.insert(2u32);
        pool.remove(a);
        pool.remove(b);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_get2_mut_disjoint() {
        let mut pool = Pool::new();
        let a = pool.insert(1u32);
        let b = pool.insert(2u32);
        let (x, y) = pool.get2_mut(b, a);
        *x += 10;
        *y += 100;
        assert_eq!(pool[a], 101);
        assert_eq!(pool[b], 12);
    }

    #[test]
    #[should_panic]
    fn test_vacant_index_panics() {
        let mut pool = Pool::new();
        let a = pool.insert(5u32);
        pool.remove(a);
        let _ = pool[a];
    }

    #[test]
    fn test_invalid_handle_sentinel() {
        assert!(!TextureHandle::INVALID.is_valid());
        assert!(TextureHandle(0).is_valid());
        assert_eq!(VertexBufferHandle::default(), VertexBufferHandle::INVALID);
    }
}
