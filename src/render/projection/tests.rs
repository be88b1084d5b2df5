// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use crate::model::fixtures::{strip_small, strip_with_n_links};
use crate::model::{
    AppShortcut, FolderGroup, FolderShortcut, GroupColor, Item, ItemId, LinkShortcut, Shortcut,
    Strip,
};

use super::{project_strip, ClickAction, ProjectionOptions};

fn iid(value: &str) -> ItemId {
    ItemId::new(value).expect("item id")
}

#[test]
fn truncates_to_max_items_plus_one_add_affordance() {
    let strip = strip_with_n_links(5);
    let options = ProjectionOptions {
        max_items: 2,
        ..ProjectionOptions::default()
    };

    let entries = project_strip(&strip, &options);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].item_id.as_ref(), Some(&iid("link-0000")));
    assert_eq!(entries[1].item_id.as_ref(), Some(&iid("link-0001")));
    assert_eq!(entries[2].item_id, None);
    assert_eq!(entries[2].action, Some(ClickAction::AddItem));
}

#[test]
fn add_affordance_is_present_even_on_an_empty_strip() {
    let entries = project_strip(&Strip::new(), &ProjectionOptions::default());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "+");
}

#[test]
fn labels_show_icon_and_name_when_titles_enabled() {
    let mut terminal = AppShortcut::new(iid("app-1"), "Terminal", "sh");
    terminal.set_icon(Some("terminal".to_owned()));
    let strip = Strip::with_items(vec![Item::from(Shortcut::App(terminal))]);

    let entries = project_strip(&strip, &ProjectionOptions::default());
    assert_eq!(entries[0].label, "❯ Terminal");
}

#[test]
fn long_names_fall_back_to_icon_only() {
    let mut link = LinkShortcut::new(
        iid("link-1"),
        "A very long bookmark name indeed",
        "https://x.test",
    );
    link.set_icon(Some("globe".to_owned()));
    let strip = Strip::with_items(vec![Item::from(Shortcut::Link(link))]);

    let entries = project_strip(&strip, &ProjectionOptions::default());
    assert_eq!(entries[0].label, "◉");
}

#[test]
fn titles_disabled_drops_the_name_from_the_label() {
    let mut link = LinkShortcut::new(iid("link-1"), "Docs", "https://x.test");
    link.set_icon(Some("globe".to_owned()));
    let strip = Strip::with_items(vec![Item::from(Shortcut::Link(link))]);

    let options = ProjectionOptions {
        show_titles: false,
        ..ProjectionOptions::default()
    };
    let entries = project_strip(&strip, &options);
    assert_eq!(entries[0].label, "◉");
}

#[test]
fn icons_disabled_uses_the_bare_name() {
    let mut link = LinkShortcut::new(
        iid("link-1"),
        "A very long bookmark name indeed",
        "https://x.test",
    );
    link.set_icon(Some("globe".to_owned()));
    let strip = Strip::with_items(vec![Item::from(Shortcut::Link(link))]);

    let options = ProjectionOptions {
        show_icons: false,
        ..ProjectionOptions::default()
    };
    let entries = project_strip(&strip, &options);
    assert_eq!(entries[0].label, "A very long bookmark name indeed");
}

#[test]
fn colored_groups_carry_the_color_indicator_and_tooltip_suffix() {
    let mut group = FolderGroup::new(iid("folder-group-1"), "Work");
    group.set_color(GroupColor::Blue);
    let strip = Strip::with_items(vec![Item::from(group)]);

    let entries = project_strip(&strip, &ProjectionOptions::default());
    assert_eq!(entries[0].label, "●❖ Work");
    assert_eq!(entries[0].tooltip, "Work (blue)");
    assert_eq!(
        entries[0].action,
        Some(ClickAction::OpenGroupMenu(iid("folder-group-1")))
    );
}

#[test]
fn tooltip_prefers_the_title_over_the_name() {
    let mut app = AppShortcut::new(iid("app-1"), "Git", "git status");
    app.set_title(Some("Show working tree status".to_owned()));
    let strip = Strip::with_items(vec![Item::from(Shortcut::App(app))]);

    let entries = project_strip(&strip, &ProjectionOptions::default());
    assert_eq!(entries[0].tooltip, "Show working tree status");
}

#[test]
fn actions_map_per_variant() {
    let strip = strip_small();
    let options = ProjectionOptions::default();

    let entries = project_strip(&strip, &options);

    assert_eq!(
        entries[0].action,
        Some(ClickAction::RunCommand("x-terminal-emulator".to_owned()))
    );
    assert_eq!(
        entries[1].action,
        Some(ClickAction::OpenWorkspace(PathBuf::from(
            "/home/user/projects"
        )))
    );
    assert_eq!(
        entries[2].action,
        Some(ClickAction::OpenUrl("https://docs.example.test".to_owned()))
    );
    assert_eq!(
        entries[3].action,
        Some(ClickAction::OpenGroupMenu(iid("folder-group-0001")))
    );
}

#[test]
fn entries_with_an_empty_required_field_are_inert() {
    let strip = Strip::with_items(vec![
        Item::from(Shortcut::App(AppShortcut::new(iid("app-1"), "Blank", " "))),
        Item::from(Shortcut::Folder(FolderShortcut::new(
            iid("folder-1"),
            "Nowhere",
            "",
        ))),
    ]);

    let entries = project_strip(&strip, &ProjectionOptions::default());
    assert_eq!(entries[0].action, None);
    assert_eq!(entries[1].action, None);
}
