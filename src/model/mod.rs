// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A strip holds an ordered list of items: launchable shortcuts
//! (app/file/folder/link) and folder groups that nest one level of child
//! shortcuts.

pub mod defaults;
pub(crate) mod fixtures;
pub mod ids;
pub mod item;
pub mod strip;

pub use defaults::{default_items, is_default_id, DEFAULT_ITEM_IDS};
pub use ids::{generate_item_id, Id, IdError, ItemId};
pub use item::{
    AppShortcut, FileShortcut, FolderGroup, FolderShortcut, GroupColor, Item, ItemKind,
    LinkShortcut, ParseGroupColorError, Shortcut,
};
pub use strip::Strip;
