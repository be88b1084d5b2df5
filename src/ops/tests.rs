// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use crate::model::{
    default_items, AppShortcut, FolderGroup, GroupColor, Item, ItemId, ItemKind, LinkShortcut,
    Shortcut, Strip, DEFAULT_ITEM_IDS,
};

use super::{apply_op, Applied, ApplyError, ItemPatch, MoveDirection, Op};

fn iid(value: &str) -> ItemId {
    ItemId::new(value).expect("item id")
}

fn link(id: &str, name: &str, url: &str) -> Item {
    Item::from(Shortcut::Link(LinkShortcut::new(iid(id), name, url)))
}

fn default_strip() -> Strip {
    Strip::with_items(default_items())
}

fn strip_with_group() -> Strip {
    let mut group = FolderGroup::new(iid("folder-group-1"), "Work");
    group.children_mut().push(Shortcut::App(AppShortcut::new(
        iid("app-child-1"),
        "Editor",
        "vi",
    )));
    group.children_mut().push(Shortcut::Link(LinkShortcut::new(
        iid("link-child-1"),
        "Tracker",
        "https://tracker.example.test",
    )));
    Strip::with_items(vec![
        link("link-1", "Docs", "https://docs.example.test"),
        Item::from(group),
    ])
}

#[test]
fn add_appends_and_bumps_rev() {
    let mut strip = default_strip();
    let result = apply_op(
        &mut strip,
        &Op::Add {
            item: link("link-1", "Docs", "https://x.test"),
        },
    )
    .expect("apply");

    assert_eq!(result, Applied::Changed { new_rev: 1 });
    assert_eq!(strip.len(), 5);
    assert_eq!(strip.items()[4].id(), &iid("link-1"));
}

#[test]
fn add_rejects_duplicate_id_anywhere_in_the_strip() {
    let mut strip = strip_with_group();

    let err = apply_op(
        &mut strip,
        &Op::Add {
            item: link("link-child-1", "Dup", "https://dup.test"),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApplyError::DuplicateId {
            item_id: iid("link-child-1")
        }
    );
    assert_eq!(strip.rev(), 0);
}

#[test]
fn add_requires_variant_fields() {
    let mut strip = Strip::new();

    let err = apply_op(
        &mut strip,
        &Op::Add {
            item: link("link-1", "", "https://x.test"),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ApplyError::NameRequired {
            kind: ItemKind::Link
        }
    );

    let err = apply_op(
        &mut strip,
        &Op::Add {
            item: link("link-1", "Docs", "  "),
        },
    )
    .unwrap_err();
    assert_eq!(err, ApplyError::UrlRequired);

    assert!(strip.is_empty());
}

#[test]
fn add_to_group_rejects_non_groups() {
    let mut strip = strip_with_group();

    let err = apply_op(
        &mut strip,
        &Op::AddToGroup {
            group_id: iid("link-1"),
            child: Shortcut::App(AppShortcut::new(iid("app-1"), "Htop", "htop")),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApplyError::NotAGroup {
            item_id: iid("link-1")
        }
    );
}

#[test]
fn add_to_group_appends_to_children() {
    let mut strip = strip_with_group();

    apply_op(
        &mut strip,
        &Op::AddToGroup {
            group_id: iid("folder-group-1"),
            child: Shortcut::App(AppShortcut::new(iid("app-1"), "Htop", "htop")),
        },
    )
    .expect("apply");

    let group = strip.group(&iid("folder-group-1")).expect("group");
    assert_eq!(group.children().len(), 3);
    assert_eq!(group.children()[2].id(), &iid("app-1"));
}

#[test]
fn move_forward_then_back_restores_order() {
    let mut strip = default_strip();
    let item_id = iid(DEFAULT_ITEM_IDS[1]);
    let original: Vec<ItemId> = strip.items().iter().map(|item| item.id().clone()).collect();

    apply_op(
        &mut strip,
        &Op::Move {
            item_id: item_id.clone(),
            direction: MoveDirection::Forward,
        },
    )
    .expect("move forward");
    assert_eq!(strip.item_index(&item_id), Some(2));

    apply_op(
        &mut strip,
        &Op::Move {
            item_id: item_id.clone(),
            direction: MoveDirection::Back,
        },
    )
    .expect("move back");

    let restored: Vec<ItemId> = strip.items().iter().map(|item| item.id().clone()).collect();
    assert_eq!(restored, original);
}

#[test]
fn move_out_of_bounds_is_reported_and_leaves_order_unchanged() {
    let mut strip = default_strip();
    let first = iid(DEFAULT_ITEM_IDS[0]);

    let err = apply_op(
        &mut strip,
        &Op::Move {
            item_id: first.clone(),
            direction: MoveDirection::Back,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApplyError::OutOfBounds {
            item_id: first.clone(),
            direction: MoveDirection::Back,
        }
    );
    assert_eq!(strip.item_index(&first), Some(0));
    assert_eq!(strip.rev(), 0);
}

#[test]
fn move_in_group_swaps_children() {
    let mut strip = strip_with_group();

    apply_op(
        &mut strip,
        &Op::MoveInGroup {
            group_id: iid("folder-group-1"),
            child_id: iid("link-child-1"),
            direction: MoveDirection::Back,
        },
    )
    .expect("move in group");

    let group = strip.group(&iid("folder-group-1")).expect("group");
    assert_eq!(group.child_index(&iid("link-child-1")), Some(0));
    assert_eq!(group.child_index(&iid("app-child-1")), Some(1));
}

#[test]
fn remove_group_cascades_to_children() {
    let mut strip = strip_with_group();

    apply_op(
        &mut strip,
        &Op::Remove {
            item_id: iid("folder-group-1"),
        },
    )
    .expect("remove");

    assert_eq!(strip.len(), 1);
    assert!(!strip.contains_id(&iid("folder-group-1")));
    assert!(!strip.contains_id(&iid("app-child-1")));
    assert!(!strip.contains_id(&iid("link-child-1")));
}

#[test]
fn remove_missing_id_is_a_noop() {
    let mut strip = default_strip();

    let result = apply_op(
        &mut strip,
        &Op::Remove {
            item_id: iid("nope"),
        },
    )
    .expect("apply");

    assert_eq!(result, Applied::Noop);
    assert_eq!(strip.len(), 4);
    assert_eq!(strip.rev(), 0);
}

#[test]
fn remove_from_group_missing_child_is_a_noop() {
    let mut strip = strip_with_group();

    let result = apply_op(
        &mut strip,
        &Op::RemoveFromGroup {
            group_id: iid("folder-group-1"),
            child_id: iid("nope"),
        },
    )
    .expect("apply");

    assert_eq!(result, Applied::Noop);
    let group = strip.group(&iid("folder-group-1")).expect("group");
    assert_eq!(group.children().len(), 2);
}

#[test]
fn edit_applies_only_non_empty_fields() {
    let mut strip = strip_with_group();

    apply_op(
        &mut strip,
        &Op::Edit {
            item_id: iid("link-1"),
            patch: ItemPatch {
                name: Some("Handbook".to_owned()),
                url: Some(String::new()),
                ..ItemPatch::default()
            },
        },
    )
    .expect("edit");

    let Item::Shortcut(Shortcut::Link(link)) = strip.item(&iid("link-1")).expect("item") else {
        panic!("expected link item");
    };
    assert_eq!(link.name(), "Handbook");
    assert_eq!(link.url(), "https://docs.example.test");
}

#[test]
fn edit_with_only_empty_fields_is_a_noop() {
    let mut strip = strip_with_group();

    let result = apply_op(
        &mut strip,
        &Op::Edit {
            item_id: iid("link-1"),
            patch: ItemPatch {
                name: Some("  ".to_owned()),
                url: Some(String::new()),
                ..ItemPatch::default()
            },
        },
    )
    .expect("edit");

    assert_eq!(result, Applied::Noop);
    assert_eq!(strip.rev(), 0);
}

#[test]
fn edit_reaches_group_children() {
    let mut strip = strip_with_group();

    apply_op(
        &mut strip,
        &Op::Edit {
            item_id: iid("app-child-1"),
            patch: ItemPatch {
                command: Some("nvim".to_owned()),
                ..ItemPatch::default()
            },
        },
    )
    .expect("edit");

    let group = strip.group(&iid("folder-group-1")).expect("group");
    let Shortcut::App(app) = group.child(&iid("app-child-1")).expect("child") else {
        panic!("expected app child");
    };
    assert_eq!(app.command(), "nvim");
}

#[test]
fn edit_sets_group_color() {
    let mut strip = strip_with_group();

    apply_op(
        &mut strip,
        &Op::Edit {
            item_id: iid("folder-group-1"),
            patch: ItemPatch {
                color: Some(GroupColor::Green),
                ..ItemPatch::default()
            },
        },
    )
    .expect("edit");

    let group = strip.group(&iid("folder-group-1")).expect("group");
    assert_eq!(group.color(), GroupColor::Green);
}

#[test]
fn edit_ignores_fields_for_other_variants() {
    let mut strip = strip_with_group();

    let result = apply_op(
        &mut strip,
        &Op::Edit {
            item_id: iid("link-1"),
            patch: ItemPatch {
                command: Some("htop".to_owned()),
                path: Some(PathBuf::from("/tmp")),
                ..ItemPatch::default()
            },
        },
    )
    .expect("edit");

    assert_eq!(result, Applied::Noop);
}

#[test]
fn edit_missing_item_is_an_error() {
    let mut strip = default_strip();

    let err = apply_op(
        &mut strip,
        &Op::Edit {
            item_id: iid("nope"),
            patch: ItemPatch::default(),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        ApplyError::NotFound {
            item_id: iid("nope")
        }
    );
}

#[test]
fn reset_replaces_everything_with_the_default_set() {
    let mut strip = strip_with_group();

    apply_op(&mut strip, &Op::ResetToDefaults).expect("reset");

    assert_eq!(strip.len(), DEFAULT_ITEM_IDS.len());
    for (item, expected_id) in strip.items().iter().zip(DEFAULT_ITEM_IDS) {
        assert_eq!(item.id().as_str(), expected_id);
    }
}

#[test]
fn spec_example_scenario_round_trip() {
    // init -> 4 defaults -> add link -> move back -> delete -> defaults again.
    let mut strip = default_strip();

    apply_op(
        &mut strip,
        &Op::Add {
            item: link("link-docs", "Docs", "https://x.test"),
        },
    )
    .expect("add");
    assert_eq!(strip.len(), 5);

    apply_op(
        &mut strip,
        &Op::Move {
            item_id: iid("link-docs"),
            direction: MoveDirection::Back,
        },
    )
    .expect("move");
    assert_eq!(strip.item_index(&iid("link-docs")), Some(3));
    assert_eq!(
        strip.item_index(&iid(DEFAULT_ITEM_IDS[3])),
        Some(4),
        "previously-last default shifted one to the right"
    );

    apply_op(
        &mut strip,
        &Op::Remove {
            item_id: iid("link-docs"),
        },
    )
    .expect("remove");

    let ids: Vec<&str> = strip.items().iter().map(|item| item.id().as_str()).collect();
    assert_eq!(ids, DEFAULT_ITEM_IDS);
}
