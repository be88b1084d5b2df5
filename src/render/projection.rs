// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use crate::model::{GroupColor, Item, ItemId, ItemKind, Shortcut, Strip};
use crate::store::StripSettings;

use super::icons::{color_indicator, icon_glyph};

/// Names longer than this are dropped from the label (icon-only entry).
const MAX_LABEL_NAME_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    pub max_items: usize,
    pub show_icons: bool,
    pub show_titles: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            max_items: 10,
            show_icons: true,
            show_titles: true,
        }
    }
}

impl From<StripSettings> for ProjectionOptions {
    fn from(settings: StripSettings) -> Self {
        Self {
            max_items: settings.max_items,
            show_icons: settings.show_icons,
            show_titles: settings.show_titles,
        }
    }
}

/// What activating an entry does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    RunCommand(String),
    OpenPath(PathBuf),
    OpenWorkspace(PathBuf),
    OpenUrl(String),
    OpenGroupMenu(ItemId),
    AddItem,
}

/// One rendered entry of the strip.
///
/// `item_id` is the stable handle back into the store (`None` for the
/// trailing add affordance). Entries whose required field for their action
/// mapping is empty carry no action and render inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripEntry {
    pub item_id: Option<ItemId>,
    pub label: String,
    pub tooltip: String,
    pub action: Option<ClickAction>,
}

/// Projects the current item list into a bounded, ordered entry sequence:
/// the first `max_items` items in display order, plus one trailing
/// add-affordance entry.
pub fn project_strip(strip: &Strip, options: &ProjectionOptions) -> Vec<StripEntry> {
    let mut entries: Vec<StripEntry> = strip
        .items()
        .iter()
        .take(options.max_items)
        .map(|item| project_item(item, options))
        .collect();

    entries.push(StripEntry {
        item_id: None,
        label: "+".to_owned(),
        tooltip: "Add a new shortcut".to_owned(),
        action: Some(ClickAction::AddItem),
    });

    entries
}

fn project_item(item: &Item, options: &ProjectionOptions) -> StripEntry {
    let color = match item {
        Item::Group(group) => group.color(),
        Item::Shortcut(_) => GroupColor::Default,
    };

    let icon = match item {
        Item::Group(_) => None,
        Item::Shortcut(shortcut) => shortcut.icon(),
    };

    StripEntry {
        item_id: Some(item.id().clone()),
        label: entry_label(item.name(), icon, item.kind(), color, options),
        tooltip: entry_tooltip(item.name(), item.title(), color),
        action: entry_action(item),
    }
}

fn entry_label(
    name: &str,
    icon: Option<&str>,
    kind: ItemKind,
    color: GroupColor,
    options: &ProjectionOptions,
) -> String {
    if !options.show_icons {
        return name.to_owned();
    }

    let mut label = String::new();
    if !color.is_default() {
        label.push_str(color_indicator());
    }
    label.push_str(icon_glyph(icon, kind));

    if options.show_titles && name.chars().count() <= MAX_LABEL_NAME_LEN {
        label.push(' ');
        label.push_str(name);
    }

    label
}

fn entry_tooltip(name: &str, title: Option<&str>, color: GroupColor) -> String {
    let base = title.unwrap_or(name);
    if color.is_default() {
        base.to_owned()
    } else {
        format!("{base} ({color})")
    }
}

/// The type-to-action mapping for launchable shortcuts. `None` when the
/// required field for the mapping is empty.
pub fn shortcut_action(shortcut: &Shortcut) -> Option<ClickAction> {
    match shortcut {
        Shortcut::App(app) => {
            let command = app.command().trim();
            (!command.is_empty()).then(|| ClickAction::RunCommand(command.to_owned()))
        }
        Shortcut::File(file) => (!file.path().as_os_str().is_empty())
            .then(|| ClickAction::OpenPath(file.path().to_path_buf())),
        Shortcut::Folder(folder) => (!folder.path().as_os_str().is_empty())
            .then(|| ClickAction::OpenWorkspace(folder.path().to_path_buf())),
        Shortcut::Link(link) => {
            let url = link.url().trim();
            (!url.is_empty()).then(|| ClickAction::OpenUrl(url.to_owned()))
        }
    }
}

fn entry_action(item: &Item) -> Option<ClickAction> {
    match item {
        Item::Group(group) => Some(ClickAction::OpenGroupMenu(group.id().clone())),
        Item::Shortcut(shortcut) => shortcut_action(shortcut),
    }
}

#[cfg(test)]
mod tests;
