// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::ItemId;
use super::item::{
    AppShortcut, FolderGroup, FolderShortcut, GroupColor, Item, LinkShortcut, Shortcut,
};
use super::strip::Strip;

fn iid(value: &str) -> ItemId {
    ItemId::new(value).expect("item id")
}

pub(crate) fn strip_small() -> Strip {
    let mut group = FolderGroup::new(iid("folder-group-0001"), "Work");
    group.set_color(GroupColor::Blue);
    group.children_mut().push(Shortcut::Link(LinkShortcut::new(
        iid("link-0002"),
        "Tracker",
        "https://tracker.example.test",
    )));
    group.children_mut().push(Shortcut::App(AppShortcut::new(
        iid("app-0003"),
        "Editor",
        "vi",
    )));

    Strip::with_items(vec![
        Item::from(Shortcut::App(AppShortcut::new(
            iid("app-0001"),
            "Terminal",
            "x-terminal-emulator",
        ))),
        Item::from(Shortcut::Folder(FolderShortcut::new(
            iid("folder-0001"),
            "Projects",
            "/home/user/projects",
        ))),
        Item::from(Shortcut::Link(LinkShortcut::new(
            iid("link-0001"),
            "Docs",
            "https://docs.example.test",
        ))),
        Item::from(group),
    ])
}

#[cfg(test)]
pub(crate) fn strip_with_n_links(n: usize) -> Strip {
    let items = (0..n)
        .map(|idx| {
            Item::from(Shortcut::Link(LinkShortcut::new(
                iid(&format!("link-{idx:04}")),
                format!("Link {idx}"),
                format!("https://example.test/{idx}"),
            )))
        })
        .collect();
    Strip::with_items(items)
}
