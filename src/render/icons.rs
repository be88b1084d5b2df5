// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Icon token lookup for strip labels.

use crate::model::ItemKind;

/// Glyph prefixed to a label when the entry carries a non-default color.
pub fn color_indicator() -> &'static str {
    "●"
}

/// Resolves an icon token to a single display glyph, falling back to a
/// per-kind glyph for unknown or missing tokens.
pub fn icon_glyph(token: Option<&str>, kind: ItemKind) -> &'static str {
    if let Some(glyph) = token.and_then(token_glyph) {
        return glyph;
    }

    match kind {
        ItemKind::App => "⚙",
        ItemKind::File => "▢",
        ItemKind::Folder => "▣",
        ItemKind::Link => "◉",
        ItemKind::Group => "❖",
    }
}

fn token_glyph(token: &str) -> Option<&'static str> {
    let glyph = match token {
        "terminal" => "❯",
        "files" | "explorer" => "▤",
        "source-control" | "git" => "⎇",
        "extensions" => "▦",
        "gear" | "settings" => "⚙",
        "globe" | "link" => "◉",
        "file" => "▢",
        "folder" => "▣",
        "book" | "docs" => "▥",
        "star" => "★",
        "heart" => "♥",
        "home" => "⌂",
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::icon_glyph;
    use crate::model::ItemKind;

    #[test]
    fn known_tokens_resolve() {
        assert_eq!(icon_glyph(Some("terminal"), ItemKind::App), "❯");
        assert_eq!(icon_glyph(Some("git"), ItemKind::App), "⎇");
    }

    #[test]
    fn unknown_or_missing_tokens_fall_back_by_kind() {
        assert_eq!(icon_glyph(Some("no-such-token"), ItemKind::Link), "◉");
        assert_eq!(icon_glyph(None, ItemKind::Group), "❖");
    }
}
