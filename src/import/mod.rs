// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Browser bookmark import.
//!
//! A one-shot read of the browser's bookmarks file; every url leaf in the
//! tree becomes a flat top-level link item regardless of folder nesting.

pub mod bookmarks;

pub use bookmarks::{
    default_bookmarks_path, flatten_links, read_bookmarks_file, BookmarkLink, BookmarkNode,
    ImportError,
};
