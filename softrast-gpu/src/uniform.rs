// SPDX-FileCopyrightText: 2025 softrast contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global uniform table.
//!
//! Uniforms are named vec4 slots shared across shaders. Creating a name
//! that already exists returns the existing handle and bumps its usage
//! count; the slot is released once every creation has been matched by a
//! destroy.

use std::collections::HashMap;

use glam::Vec4;
use softrast_common::RawHandle;

use crate::handle::{Pool, UniformHandle};
use crate::shader::UniformType;

#[derive(Debug)]
struct UniformEntry {
    name: String,
    ty: UniformType,
    value: RawHandle,
    usage: u32,
}

#[derive(Debug, Default)]
pub struct UniformStore {
    entries: Pool<UniformEntry>,
    by_name: HashMap<String, RawHandle>,
    values: Pool<Vec4>,
}

impl UniformStore {
    pub fn new() -> Self {
        Self {
            entries: Pool::new(),
            by_name: HashMap::new(),
            values: Pool::new(),
        }
    }

    /// Create or reuse the uniform named `name`.
    pub fn create(&mut self, name: &str, ty: UniformType) -> UniformHandle {
        if let Some(&index) = self.by_name.get(name) {
            let entry = &mut self.entries[index];
            debug_assert_eq!(entry.ty, ty);
            entry.usage += 1;
            return UniformHandle(index);
        }
        let value = self.values.insert(Vec4::ZERO);
        let index = self.entries.insert(UniformEntry {
            name: name.to_owned(),
            ty,
            value,
            usage: 1,
        });
        self.by_name.insert(name.to_owned(), index);
        UniformHandle(index)
    }

    /// Drop one usage; the slot goes away when the count reaches zero.
    pub fn destroy(&mut self, handle: UniformHandle) {
        let entry = &mut self.entries[handle.0];
        debug_assert!(entry.usage > 0);
        entry.usage -= 1;
        if entry.usage == 0 {
            let entry = self.entries.remove(handle.0);
            self.by_name.remove(&entry.name);
            self.values.remove(entry.value);
        }
    }

    pub fn set(&mut self, handle: UniformHandle, value: Vec4) {
        let slot = self.entries[handle.0].value;
        self.values[slot] = value;
    }

    pub fn value(&self, handle: UniformHandle) -> Vec4 {
        self.values[self.entries[handle.0].value]
    }

    /// Current value of a named uniform, if it exists.
    pub fn value_by_name(&self, name: &str) -> Option<Vec4> {
        let index = *self.by_name.get(name)?;
        Some(self.values[self.entries[index].value])
    }

    pub fn usage_count(&self, handle: UniformHandle) -> u32 {
        self.entries[handle.0].usage
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.by_name.is_empty()
    }
}
