// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the strip config on disk, and the canonical item store.
//!
//! The store owns the item list plus display settings and writes the whole
//! config through after every applied mutation.

pub mod config_file;

use std::fmt;
use std::path::Path;

use crate::import::{flatten_links, BookmarkNode};
use crate::model::{generate_item_id, Item, LinkShortcut, Shortcut, Strip};
use crate::ops::{apply_op, Applied, ApplyError, Op};

pub use config_file::{
    ConfigFile, StoreError, StripSettings, WriteDurability, DEFAULT_MAX_ITEMS,
};

#[derive(Debug)]
pub enum ItemStoreError {
    Apply(ApplyError),
    /// The mutation was applied in memory but could not be written to disk.
    /// The in-memory strip stays authoritative until the next successful
    /// write; callers report this and carry on.
    Persist(StoreError),
}

impl fmt::Display for ItemStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apply(source) => source.fmt(f),
            Self::Persist(source) => write!(f, "could not persist config: {source}"),
        }
    }
}

impl std::error::Error for ItemStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Apply(source) => Some(source),
            Self::Persist(source) => Some(source),
        }
    }
}

/// The canonical ordered item list plus display settings, backed by a
/// [`ConfigFile`]. There is exactly one mutator; every mutation runs to
/// completion (apply, then persist) before the next is accepted.
#[derive(Debug, Clone)]
pub struct ItemStore {
    strip: Strip,
    settings: StripSettings,
    config: ConfigFile,
}

impl ItemStore {
    /// Loads the persisted config, seeding the fixed default set on first
    /// run.
    pub fn open(config: ConfigFile) -> Result<Self, StoreError> {
        let (strip, settings) = config.load_or_init()?;
        Ok(Self {
            strip,
            settings,
            config,
        })
    }

    /// Replaces whatever the config held with the given strip and persists
    /// it. Used by demo mode.
    pub fn seed(
        config: ConfigFile,
        strip: Strip,
        settings: StripSettings,
    ) -> Result<Self, StoreError> {
        config.save(&strip, &settings)?;
        Ok(Self {
            strip,
            settings,
            config,
        })
    }

    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    pub fn settings(&self) -> StripSettings {
        self.settings
    }

    pub fn config_path(&self) -> &Path {
        self.config.path()
    }

    /// Applies one mutation and writes the config through on change.
    pub fn apply(&mut self, op: &Op) -> Result<Applied, ItemStoreError> {
        let applied = apply_op(&mut self.strip, op).map_err(ItemStoreError::Apply)?;
        if applied.changed() {
            self.persist()?;
        }
        Ok(applied)
    }

    /// Flattens every url leaf of the tree into flat top-level link items
    /// and persists once. Returns the number of imported links; a tree
    /// without importable urls imports nothing and leaves the config
    /// untouched.
    pub fn import_bookmarks(&mut self, root: &BookmarkNode) -> Result<usize, ItemStoreError> {
        let mut imported = 0;
        for link in flatten_links(root) {
            let url = link.url.trim();
            if url.is_empty() {
                continue;
            }

            let item_id = generate_item_id("imported");
            let name = if link.name.trim().is_empty() {
                url
            } else {
                link.name.as_str()
            };
            let shortcut = LinkShortcut::new(item_id, name, url);
            apply_op(
                &mut self.strip,
                &Op::Add {
                    item: Item::from(Shortcut::Link(shortcut)),
                },
            )
            .map_err(ItemStoreError::Apply)?;
            imported += 1;
        }

        if imported > 0 {
            self.persist()?;
        }
        Ok(imported)
    }

    pub fn set_max_items(&mut self, max_items: usize) -> Result<(), ItemStoreError> {
        if self.settings.max_items == max_items {
            return Ok(());
        }
        self.settings.max_items = max_items;
        self.persist()
    }

    pub fn set_show_icons(&mut self, show_icons: bool) -> Result<(), ItemStoreError> {
        if self.settings.show_icons == show_icons {
            return Ok(());
        }
        self.settings.show_icons = show_icons;
        self.persist()
    }

    pub fn set_show_titles(&mut self, show_titles: bool) -> Result<(), ItemStoreError> {
        if self.settings.show_titles == show_titles {
            return Ok(());
        }
        self.settings.show_titles = show_titles;
        self.persist()
    }

    fn persist(&self) -> Result<(), ItemStoreError> {
        self.config
            .save(&self.strip, &self.settings)
            .map_err(ItemStoreError::Persist)
    }
}
