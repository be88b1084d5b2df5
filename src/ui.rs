// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The host-facing command surface and shared notice type.
//!
//! Commands are fire-and-forget entry points dispatched by the TUI's key
//! bindings; none of them returns a value to the caller. Notices carry
//! non-fatal, user-visible conditions (out-of-bounds moves, missing import
//! sources, persistence failures).

use std::fmt;

use crate::model::ItemId;

/// The zero/one-argument commands exposed to the host surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddItem,
    AddFolderGroup,
    ImportBookmarks,
    OpenConfigurationMenu,
    OpenFolderMenu(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A non-fatal, user-visible notice. Every failure in the system is local
/// and recoverable by retrying the command; notices are how that surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
