// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the strip.
//!
//! Every mutation is expressed as an [`Op`] and applied through [`apply_op`],
//! which validates, mutates in place, and bumps the strip revision exactly
//! when something changed. Callers persist after a `Changed` outcome.

use std::fmt;
use std::path::PathBuf;

use crate::model::{default_items, GroupColor, Item, ItemId, ItemKind, Shortcut, Strip};

/// Reorder direction: towards the front of the list or towards the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Back,
    Forward,
}

impl MoveDirection {
    pub fn offset(self) -> isize {
        match self {
            Self::Back => -1,
            Self::Forward => 1,
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => f.write_str("back"),
            Self::Forward => f.write_str("forward"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Add {
        item: Item,
    },
    AddToGroup {
        group_id: ItemId,
        child: Shortcut,
    },
    Edit {
        item_id: ItemId,
        patch: ItemPatch,
    },
    Remove {
        item_id: ItemId,
    },
    RemoveFromGroup {
        group_id: ItemId,
        child_id: ItemId,
    },
    Move {
        item_id: ItemId,
        direction: MoveDirection,
    },
    MoveInGroup {
        group_id: ItemId,
        child_id: ItemId,
        direction: MoveDirection,
    },
    ResetToDefaults,
}

/// Field update for [`Op::Edit`].
///
/// A field is written only when the patch carries a non-empty value for it;
/// `Some("")` leaves that field untouched, and fields that do not apply to
/// the target's variant are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub command: Option<String>,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
    pub color: Option<GroupColor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed { new_rev: u64 },
    Noop,
}

impl Applied {
    pub fn changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    NameRequired { kind: ItemKind },
    CommandRequired,
    PathRequired { kind: ItemKind },
    UrlRequired,
    DuplicateId { item_id: ItemId },
    NotFound { item_id: ItemId },
    NotAGroup { item_id: ItemId },
    OutOfBounds { item_id: ItemId, direction: MoveDirection },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired { kind } => write!(f, "a {} needs a name", kind.label()),
            Self::CommandRequired => f.write_str("an app shortcut needs a command"),
            Self::PathRequired { kind } => write!(f, "a {} shortcut needs a path", kind.label()),
            Self::UrlRequired => f.write_str("a link needs a url"),
            Self::DuplicateId { item_id } => write!(f, "id already in use ({item_id})"),
            Self::NotFound { item_id } => write!(f, "no item with id {item_id}"),
            Self::NotAGroup { item_id } => write!(f, "item {item_id} is not a folder group"),
            Self::OutOfBounds { item_id, direction } => {
                write!(f, "cannot move {item_id} further {direction}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

pub fn apply_op(strip: &mut Strip, op: &Op) -> Result<Applied, ApplyError> {
    let applied = match op {
        Op::Add { item } => apply_add(strip, item)?,
        Op::AddToGroup { group_id, child } => apply_add_to_group(strip, group_id, child)?,
        Op::Edit { item_id, patch } => apply_edit(strip, item_id, patch)?,
        Op::Remove { item_id } => apply_remove(strip, item_id),
        Op::RemoveFromGroup { group_id, child_id } => {
            apply_remove_from_group(strip, group_id, child_id)?
        }
        Op::Move { item_id, direction } => apply_move(strip, item_id, *direction)?,
        Op::MoveInGroup {
            group_id,
            child_id,
            direction,
        } => apply_move_in_group(strip, group_id, child_id, *direction)?,
        Op::ResetToDefaults => {
            *strip.items_mut() = default_items();
            true
        }
    };

    if !applied {
        return Ok(Applied::Noop);
    }

    strip.bump_rev();
    Ok(Applied::Changed {
        new_rev: strip.rev(),
    })
}

// Extracted op-application implementation for strip mutations.
include!("ops_impl.rs");

#[cfg(test)]
mod tests;
