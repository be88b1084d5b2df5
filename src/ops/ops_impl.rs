// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Strip mutation implementation helpers used by `apply_op`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn validate_shortcut(shortcut: &Shortcut) -> Result<(), ApplyError> {
    if shortcut.name().trim().is_empty() {
        return Err(ApplyError::NameRequired {
            kind: shortcut.kind(),
        });
    }

    match shortcut {
        Shortcut::App(app) => {
            if app.command().trim().is_empty() {
                return Err(ApplyError::CommandRequired);
            }
        }
        Shortcut::File(file) => {
            if file.path().as_os_str().is_empty() {
                return Err(ApplyError::PathRequired {
                    kind: ItemKind::File,
                });
            }
        }
        Shortcut::Folder(folder) => {
            if folder.path().as_os_str().is_empty() {
                return Err(ApplyError::PathRequired {
                    kind: ItemKind::Folder,
                });
            }
        }
        Shortcut::Link(link) => {
            if link.url().trim().is_empty() {
                return Err(ApplyError::UrlRequired);
            }
        }
    }

    Ok(())
}

fn validate_item(item: &Item) -> Result<(), ApplyError> {
    match item {
        Item::Shortcut(shortcut) => validate_shortcut(shortcut),
        Item::Group(group) => {
            if group.name().trim().is_empty() {
                return Err(ApplyError::NameRequired {
                    kind: ItemKind::Group,
                });
            }
            for child in group.children() {
                validate_shortcut(child)?;
            }
            Ok(())
        }
    }
}

fn apply_add(strip: &mut Strip, item: &Item) -> Result<bool, ApplyError> {
    validate_item(item)?;
    if strip.contains_id(item.id()) {
        return Err(ApplyError::DuplicateId {
            item_id: item.id().clone(),
        });
    }

    strip.items_mut().push(item.clone());
    Ok(true)
}

fn apply_add_to_group(
    strip: &mut Strip,
    group_id: &ItemId,
    child: &Shortcut,
) -> Result<bool, ApplyError> {
    validate_shortcut(child)?;
    if strip.contains_id(child.id()) {
        return Err(ApplyError::DuplicateId {
            item_id: child.id().clone(),
        });
    }

    let Some(item) = strip.item_mut(group_id) else {
        return Err(ApplyError::NotFound {
            item_id: group_id.clone(),
        });
    };
    let Some(group) = item.as_group_mut() else {
        return Err(ApplyError::NotAGroup {
            item_id: group_id.clone(),
        });
    };

    group.children_mut().push(child.clone());
    Ok(true)
}

/// Returns the patch value for a string field, treating an explicitly empty
/// value as "leave the field alone".
fn patch_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn apply_shortcut_patch(shortcut: &mut Shortcut, patch: &ItemPatch) -> bool {
    let mut changed = false;

    if let Some(name) = patch_text(&patch.name) {
        shortcut.set_name(name);
        changed = true;
    }
    if let Some(title) = patch_text(&patch.title) {
        shortcut.set_title(Some(title.to_owned()));
        changed = true;
    }
    if let Some(icon) = patch_text(&patch.icon) {
        shortcut.set_icon(Some(icon.to_owned()));
        changed = true;
    }

    match shortcut {
        Shortcut::App(app) => {
            if let Some(command) = patch_text(&patch.command) {
                app.set_command(command);
                changed = true;
            }
        }
        Shortcut::File(file) => {
            if let Some(path) = patch.path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
                file.set_path(path.clone());
                changed = true;
            }
        }
        Shortcut::Folder(folder) => {
            if let Some(path) = patch.path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
                folder.set_path(path.clone());
                changed = true;
            }
        }
        Shortcut::Link(link) => {
            if let Some(url) = patch_text(&patch.url) {
                link.set_url(url);
                changed = true;
            }
        }
    }

    changed
}

fn apply_edit(strip: &mut Strip, item_id: &ItemId, patch: &ItemPatch) -> Result<bool, ApplyError> {
    // Top-level match first, then group children; ids are unique across both.
    if let Some(item) = strip.item_mut(item_id) {
        let changed = match item {
            Item::Shortcut(shortcut) => apply_shortcut_patch(shortcut, patch),
            Item::Group(group) => {
                let mut changed = false;
                if let Some(name) = patch_text(&patch.name) {
                    group.set_name(name);
                    changed = true;
                }
                if let Some(title) = patch_text(&patch.title) {
                    group.set_title(Some(title.to_owned()));
                    changed = true;
                }
                if let Some(color) = patch.color {
                    group.set_color(color);
                    changed = true;
                }
                changed
            }
        };
        return Ok(changed);
    }

    for item in strip.items_mut() {
        let Some(group) = item.as_group_mut() else {
            continue;
        };
        if let Some(child) = group
            .children_mut()
            .iter_mut()
            .find(|child| child.id() == item_id)
        {
            return Ok(apply_shortcut_patch(child, patch));
        }
    }

    Err(ApplyError::NotFound {
        item_id: item_id.clone(),
    })
}

fn apply_remove(strip: &mut Strip, item_id: &ItemId) -> bool {
    // Removing a folder group drops all of its children with it.
    let before = strip.len();
    strip.items_mut().retain(|item| item.id() != item_id);
    strip.len() != before
}

fn apply_remove_from_group(
    strip: &mut Strip,
    group_id: &ItemId,
    child_id: &ItemId,
) -> Result<bool, ApplyError> {
    let Some(item) = strip.item_mut(group_id) else {
        return Err(ApplyError::NotFound {
            item_id: group_id.clone(),
        });
    };
    let Some(group) = item.as_group_mut() else {
        return Err(ApplyError::NotAGroup {
            item_id: group_id.clone(),
        });
    };

    let before = group.children().len();
    group.children_mut().retain(|child| child.id() != child_id);
    Ok(group.children().len() != before)
}

fn swap_adjacent<T>(
    entries: &mut [T],
    index: usize,
    item_id: &ItemId,
    direction: MoveDirection,
) -> Result<bool, ApplyError> {
    let target = index as isize + direction.offset();
    if target < 0 || target as usize >= entries.len() {
        return Err(ApplyError::OutOfBounds {
            item_id: item_id.clone(),
            direction,
        });
    }

    entries.swap(index, target as usize);
    Ok(true)
}

fn apply_move(
    strip: &mut Strip,
    item_id: &ItemId,
    direction: MoveDirection,
) -> Result<bool, ApplyError> {
    let Some(index) = strip.item_index(item_id) else {
        return Err(ApplyError::NotFound {
            item_id: item_id.clone(),
        });
    };

    swap_adjacent(strip.items_mut(), index, item_id, direction)
}

fn apply_move_in_group(
    strip: &mut Strip,
    group_id: &ItemId,
    child_id: &ItemId,
    direction: MoveDirection,
) -> Result<bool, ApplyError> {
    let Some(item) = strip.item_mut(group_id) else {
        return Err(ApplyError::NotFound {
            item_id: group_id.clone(),
        });
    };
    let Some(group) = item.as_group_mut() else {
        return Err(ApplyError::NotAGroup {
            item_id: group_id.clone(),
        });
    };
    let Some(index) = group.child_index(child_id) else {
        return Err(ApplyError::NotFound {
            item_id: child_id.clone(),
        });
    };

    swap_adjacent(group.children_mut(), index, child_id, direction)
}
