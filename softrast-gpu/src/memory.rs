// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Buffer memory: a paged arena with chunk tracking, and the buffer table
//! mapping handles to either arena-owned chunks or externally produced
//! byte vectors ("refs").
//!
//! Arena chunks are recycled first-fit on free; pages grow on demand and
//! are never released. Allocation zeroes the handed-out range, so reused
//! chunks never leak stale bytes.

use log::trace;
use softrast_common::align_up;

use crate::handle::{BufferHandle, Pool};

/// Default arena page capacity in bytes.
const PAGE_SIZE: u32 = 1 << 20;

#[derive(Debug, Clone, Copy)]
struct Chunk {
    /// Raw span start inside the page, including alignment padding.
    offset: u32,
    /// Raw span size, including alignment padding.
    size: u32,
    /// Usable range handed to the caller.
    data_offset: u32,
    data_len: u32,
    free: bool,
}

#[derive(Debug)]
struct Page {
    bytes: Vec<u8>,
    chunks: Vec<Chunk>,
    cursor: u32,
}

impl Page {
    fn with_capacity(capacity: u32) -> Self {
        Self {
            bytes: vec![0; capacity as usize],
            chunks: Vec::new(),
            cursor: 0,
        }
    }

    fn capacity(&self) -> u32 {
        self.bytes.len() as u32
    }
}

/// Location of an arena chunk: page index + chunk index within the page.
/// Chunk entries are never removed, so the id stays valid until freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkId {
    page: u32,
    chunk: u32,
}

/// Paged arena allocator backing arena-owned buffers.
#[derive(Debug, Default)]
pub struct PagedArena {
    pages: Vec<Page>,
}

impl PagedArena {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Allocate `size` zeroed bytes with the given power-of-two alignment.
    pub fn alloc(&mut self, size: u32, alignment: u32) -> ChunkId {
        debug_assert!(size > 0);
        debug_assert!(alignment.is_power_of_two());

        // Recycle a freed chunk first.
        for (page_index, page) in self.pages.iter_mut().enumerate() {
            for (chunk_index, chunk) in page.chunks.iter_mut().enumerate() {
                if !chunk.free {
                    continue;
                }
                let data_offset = align_up(chunk.offset, alignment);
                let padding = data_offset - chunk.offset;
                if padding + size > chunk.size {
                    continue;
                }
                chunk.free = false;
                chunk.data_offset = data_offset;
                chunk.data_len = size;
                let range = data_offset as usize..(data_offset + size) as usize;
                page.bytes[range].fill(0);
                return ChunkId {
                    page: page_index as u32,
                    chunk: chunk_index as u32,
                };
            }
        }

        // Bump-allocate from a page with room at the end.
        for page_index in 0..self.pages.len() {
            if let Some(id) = self.try_bump(page_index, size, alignment) {
                return id;
            }
        }

        let capacity = PAGE_SIZE.max(size + alignment);
        trace!("arena: new page of {capacity} bytes");
        self.pages.push(Page::with_capacity(capacity));
        let page_index = self.pages.len() - 1;
        match self.try_bump(page_index, size, alignment) {
            Some(id) => id,
            None => unreachable!("fresh arena page cannot be full"),
        }
    }

    fn try_bump(&mut self, page_index: usize, size: u32, alignment: u32) -> Option<ChunkId> {
        let page = &mut self.pages[page_index];
        let data_offset = align_up(page.cursor, alignment);
        let end = data_offset.checked_add(size)?;
        if end > page.capacity() {
            return None;
        }
        page.chunks.push(Chunk {
            offset: page.cursor,
            size: end - page.cursor,
            data_offset,
            data_len: size,
            free: false,
        });
        page.cursor = end;
        Some(ChunkId {
            page: page_index as u32,
            chunk: (page.chunks.len() - 1) as u32,
        })
    }

    /// Return a chunk to the free list. The bytes stay in place until the
    /// chunk is recycled.
    pub fn free(&mut self, id: ChunkId) {
        let chunk = &mut self.pages[id.page as usize].chunks[id.chunk as usize];
        debug_assert!(!chunk.free, "double free of arena chunk");
        chunk.free = true;
    }

    pub fn bytes(&self, id: ChunkId) -> &[u8] {
        let page = &self.pages[id.page as usize];
        let chunk = &page.chunks[id.chunk as usize];
        debug_assert!(!chunk.free);
        &page.bytes[chunk.data_offset as usize..(chunk.data_offset + chunk.data_len) as usize]
    }

    pub fn bytes_mut(&mut self, id: ChunkId) -> &mut [u8] {
        let page = &mut self.pages[id.page as usize];
        let chunk = &page.chunks[id.chunk as usize];
        debug_assert!(!chunk.free);
        &mut page.bytes[chunk.data_offset as usize..(chunk.data_offset + chunk.data_len) as usize]
    }
}

/// Backing storage of one buffer.
#[derive(Debug)]
pub enum BufferMemory {
    /// Owned by the arena; freed back to it.
    Arena(ChunkId),
    /// Externally produced bytes moved into the table; the arena is not
    /// involved, freeing just drops the vector.
    Ref(Vec<u8>),
}

#[derive(Debug)]
pub struct Buffer {
    memory: BufferMemory,
}

/// Handle-addressed buffer storage over the paged arena.
#[derive(Debug, Default)]
pub struct BufferTable {
    pool: Pool<Buffer>,
    arena: PagedArena,
}

impl BufferTable {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(),
            arena: PagedArena::new(),
        }
    }

    /// Allocate a zeroed arena-owned buffer.
    pub fn alloc(&mut self, size: u32) -> BufferHandle {
        self.alloc_aligned(size, 1)
    }

    pub fn alloc_aligned(&mut self, size: u32, alignment: u32) -> BufferHandle {
        let chunk = self.arena.alloc(size, alignment);
        BufferHandle(self.pool.insert(Buffer {
            memory: BufferMemory::Arena(chunk),
        }))
    }

    /// Register externally produced bytes as a buffer.
    pub fn make_ref(&mut self, bytes: Vec<u8>) -> BufferHandle {
        BufferHandle(self.pool.insert(Buffer {
            memory: BufferMemory::Ref(bytes),
        }))
    }

    pub fn free(&mut self, handle: BufferHandle) {
        let buffer = self.pool.remove(handle.0);
        match buffer.memory {
            BufferMemory::Arena(chunk) => self.arena.free(chunk),
            BufferMemory::Ref(_) => {}
        }
    }

    pub fn bytes(&self, handle: BufferHandle) -> &[u8] {
        match &self.pool[handle.0].memory {
            BufferMemory::Arena(chunk) => self.arena.bytes(*chunk),
            BufferMemory::Ref(bytes) => bytes,
        }
    }

    pub fn bytes_mut(&mut self, handle: BufferHandle) -> &mut [u8] {
        match &mut self.pool[handle.0].memory {
            BufferMemory::Arena(chunk) => self.arena.bytes_mut(*chunk),
            BufferMemory::Ref(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}
