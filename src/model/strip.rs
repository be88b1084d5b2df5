// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::ItemId;
use super::item::{FolderGroup, Item};

/// The top-level container the TUI runs against: the ordered item list.
///
/// Order is significant and is the display order. `rev` is bumped by every
/// applied mutation; the UI re-derives its projection whenever it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    items: Vec<Item>,
    rev: u64,
}

impl Default for Strip {
    fn default() -> Self {
        Self::new()
    }
}

impl Strip {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            rev: 0,
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items, rev: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    pub fn item_mut(&mut self, item_id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == item_id)
    }

    pub fn item_index(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == item_id)
    }

    pub fn group(&self, group_id: &ItemId) -> Option<&FolderGroup> {
        self.item(group_id).and_then(Item::as_group)
    }

    pub fn group_mut(&mut self, group_id: &ItemId) -> Option<&mut FolderGroup> {
        self.item_mut(group_id).and_then(Item::as_group_mut)
    }

    /// True if `item_id` is taken anywhere in the strip, including inside
    /// folder-group children. Used to enforce global id uniqueness at
    /// insertion time.
    pub fn contains_id(&self, item_id: &ItemId) -> bool {
        self.items.iter().any(|item| {
            if item.id() == item_id {
                return true;
            }
            item.as_group()
                .is_some_and(|group| group.child(item_id).is_some())
        })
    }
}
