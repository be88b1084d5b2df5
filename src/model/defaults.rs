// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The fixed default shortcut set seeded on first run and by reset.
//!
//! Default items carry no persisted flag; membership in [`DEFAULT_ITEM_IDS`]
//! is the only marker that distinguishes them from user-added items.

use super::ids::ItemId;
use super::item::{AppShortcut, Item, Shortcut};

pub const DEFAULT_ITEM_IDS: [&str; 4] = [
    "app-default-terminal",
    "app-default-explorer",
    "app-default-git",
    "app-default-extensions",
];

pub fn is_default_id(item_id: &ItemId) -> bool {
    DEFAULT_ITEM_IDS.contains(&item_id.as_str())
}

/// The four seed shortcuts, in fixed display order.
pub fn default_items() -> Vec<Item> {
    fn app(id: &str, name: &str, command: &str, icon: &str, title: &str) -> Item {
        let id = ItemId::new(id).expect("hard-coded default id is valid");
        let mut shortcut = AppShortcut::new(id, name, command);
        shortcut.set_icon(Some(icon.to_owned()));
        shortcut.set_title(Some(title.to_owned()));
        Item::from(Shortcut::App(shortcut))
    }

    vec![
        app(
            "app-default-terminal",
            "Terminal",
            "x-terminal-emulator",
            "terminal",
            "Open a terminal",
        ),
        app(
            "app-default-explorer",
            "Explorer",
            "xdg-open .",
            "files",
            "Browse the current directory",
        ),
        app(
            "app-default-git",
            "Git",
            "git status",
            "source-control",
            "Show working tree status",
        ),
        app(
            "app-default-extensions",
            "Extensions",
            "code --list-extensions",
            "extensions",
            "List installed editor extensions",
        ),
    ]
}
