// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use naiad::import::BookmarkNode;
use naiad::model::{
    AppShortcut, FolderGroup, FolderShortcut, GroupColor, Item, ItemId, LinkShortcut, Shortcut,
    Strip,
};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("naiad_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

fn iid(value: String) -> ItemId {
    ItemId::new(value).expect("item id")
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    StripSmall,
    StripLarge,
}

pub fn strip_fixture(case: Case) -> Strip {
    match case {
        Case::StripSmall => strip_with(8, 1, 4),
        Case::StripLarge => strip_with(64, 8, 16),
    }
}

/// `links` flat link items, `groups` folder groups of `children_per_group`
/// children each, plus a handful of app/folder shortcuts in front.
fn strip_with(links: usize, groups: usize, children_per_group: usize) -> Strip {
    let mut items = vec![
        Item::Shortcut(Shortcut::App(AppShortcut::new(
            iid("app-0001".to_owned()),
            "Terminal",
            "x-terminal-emulator",
        ))),
        Item::Shortcut(Shortcut::Folder(FolderShortcut::new(
            iid("folder-0001".to_owned()),
            "Projects",
            "/home/user/projects",
        ))),
    ];

    for idx in 0..links {
        items.push(Item::Shortcut(Shortcut::Link(LinkShortcut::new(
            iid(format!("link-{idx:04}")),
            format!("Link {idx}"),
            format!("https://example.test/{idx}"),
        ))));
    }

    for group_idx in 0..groups {
        let mut group = FolderGroup::new(
            iid(format!("folder-group-{group_idx:04}")),
            format!("Group {group_idx}"),
        );
        group.set_color(GroupColor::Blue);
        for child_idx in 0..children_per_group {
            group.children_mut().push(Shortcut::Link(LinkShortcut::new(
                iid(format!("link-{group_idx:04}-{child_idx:04}")),
                format!("Child {child_idx}"),
                format!("https://example.test/{group_idx}/{child_idx}"),
            )));
        }
        items.push(Item::Group(group));
    }

    Strip::with_items(items)
}

/// A bookmark tree with `depth` nested folders of `width` url leaves each.
pub fn bookmark_tree(depth: usize, width: usize) -> BookmarkNode {
    fn level(depth: usize, width: usize, prefix: &str) -> BookmarkNode {
        let mut children: Vec<BookmarkNode> = (0..width)
            .map(|idx| BookmarkNode::Url {
                name: format!("{prefix}-{idx}"),
                url: format!("https://example.test/{prefix}/{idx}"),
            })
            .collect();
        if depth > 0 {
            children.push(level(depth - 1, width, &format!("{prefix}-n")));
        }
        BookmarkNode::Folder {
            name: prefix.to_owned(),
            children,
        }
    }

    level(depth, width, "b")
}
