// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Projection of the strip into display entries.
//!
//! The projection is a pure, deterministic function of the current item list
//! and the display settings. It is re-run in full after every mutation; the
//! TUI discards prior entries and renders the fresh sequence.

pub mod icons;
pub mod projection;

pub use icons::{color_indicator, icon_glyph};
pub use projection::{
    project_strip, shortcut_action, ClickAction, ProjectionOptions, StripEntry,
};
