// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{
    default_items, AppShortcut, FileShortcut, FolderGroup, FolderShortcut, GroupColor, IdError,
    Item, ItemId, LinkShortcut, ParseGroupColorError, Shortcut, Strip,
};

pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Display settings persisted alongside the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSettings {
    pub max_items: usize,
    pub show_icons: bool,
    pub show_titles: bool,
}

impl Default for StripSettings {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            show_icons: true,
            show_titles: true,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// - Additionally fsyncs the temp file and syncs the parent directory
    ///   where the platform supports it.
    Durable,
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
    InvalidColor {
        field: &'static str,
        value: String,
        source: Box<ParseGroupColorError>,
    },
    NestedGroup {
        item_id: String,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::InvalidColor {
                field,
                value,
                source,
            } => write!(f, "invalid color for {field}: {value:?}: {source}"),
            Self::NestedGroup { item_id } => {
                write!(f, "folder group {item_id} nests another folder group")
            }
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidColor { source, .. } => Some(source),
            Self::NestedGroup { .. } => None,
            Self::SymlinkRefused { .. } => None,
        }
    }
}

/// The single JSON config document backing the strip.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<(Strip, StripSettings), StoreError> {
        let config_str = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let config_json: StripConfigJson =
            serde_json::from_str(&config_str).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        let items = config_json
            .items
            .into_iter()
            .map(item_from_json)
            .collect::<Result<Vec<_>, StoreError>>()?;

        let settings = StripSettings {
            max_items: config_json.max_items,
            show_icons: config_json.show_icons,
            show_titles: config_json.show_titles,
        };

        Ok((Strip::with_items(items), settings))
    }

    /// Loads the config, seeding the fixed default set (and persisting it)
    /// when the file does not exist yet.
    pub fn load_or_init(&self) -> Result<(Strip, StripSettings), StoreError> {
        match self.load() {
            Ok(loaded) => Ok(loaded),
            Err(StoreError::Io { path, source })
                if source.kind() == io::ErrorKind::NotFound && path == self.path =>
            {
                let strip = Strip::with_items(default_items());
                let settings = StripSettings::default();
                self.save(&strip, &settings)?;
                Ok((strip, settings))
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&self, strip: &Strip, settings: &StripSettings) -> Result<(), StoreError> {
        let config_json = StripConfigJson {
            items: strip.items().iter().map(item_to_json).collect(),
            max_items: settings.max_items,
            show_icons: settings.show_icons,
            show_titles: settings.show_titles,
        };

        let config_str =
            serde_json::to_string_pretty(&config_json).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        write_atomic(&self.path, config_str.as_bytes(), self.durability)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StripConfigJson {
    #[serde(default)]
    items: Vec<ItemJson>,
    #[serde(default = "default_max_items")]
    max_items: usize,
    #[serde(default = "default_flag")]
    show_icons: bool,
    #[serde(default = "default_flag")]
    show_titles: bool,
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_flag() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ItemJson {
    App {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        command: String,
    },
    File {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        path: String,
    },
    Folder {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        path: String,
    },
    Link {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        url: String,
    },
    FolderGroup {
        id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(default)]
        children: Vec<ItemJson>,
    },
}

fn shortcut_to_json(shortcut: &Shortcut) -> ItemJson {
    match shortcut {
        Shortcut::App(app) => ItemJson::App {
            id: app.id().to_string(),
            name: app.name().to_owned(),
            title: app.title().map(ToOwned::to_owned),
            icon: app.icon().map(ToOwned::to_owned),
            command: app.command().to_owned(),
        },
        Shortcut::File(file) => ItemJson::File {
            id: file.id().to_string(),
            name: file.name().to_owned(),
            title: file.title().map(ToOwned::to_owned),
            icon: file.icon().map(ToOwned::to_owned),
            path: file.path().to_string_lossy().into_owned(),
        },
        Shortcut::Folder(folder) => ItemJson::Folder {
            id: folder.id().to_string(),
            name: folder.name().to_owned(),
            title: folder.title().map(ToOwned::to_owned),
            icon: folder.icon().map(ToOwned::to_owned),
            path: folder.path().to_string_lossy().into_owned(),
        },
        Shortcut::Link(link) => ItemJson::Link {
            id: link.id().to_string(),
            name: link.name().to_owned(),
            title: link.title().map(ToOwned::to_owned),
            icon: link.icon().map(ToOwned::to_owned),
            url: link.url().to_owned(),
        },
    }
}

fn item_to_json(item: &Item) -> ItemJson {
    match item {
        Item::Shortcut(shortcut) => shortcut_to_json(shortcut),
        Item::Group(group) => ItemJson::FolderGroup {
            id: group.id().to_string(),
            name: group.name().to_owned(),
            title: group.title().map(ToOwned::to_owned),
            color: (!group.color().is_default()).then(|| group.color().as_str().to_owned()),
            children: group.children().iter().map(shortcut_to_json).collect(),
        },
    }
}

fn parse_item_id(field: &'static str, value: String) -> Result<ItemId, StoreError> {
    ItemId::new(value.clone()).map_err(|source| StoreError::InvalidId {
        field,
        value,
        source: Box::new(source),
    })
}

fn shortcut_from_json(item_json: ItemJson) -> Result<Shortcut, StoreError> {
    match item_json {
        ItemJson::App {
            id,
            name,
            title,
            icon,
            command,
        } => {
            let item_id = parse_item_id("items[].id", id)?;
            let mut app = AppShortcut::new(item_id, name, command);
            app.set_title(title);
            app.set_icon(icon);
            Ok(Shortcut::App(app))
        }
        ItemJson::File {
            id,
            name,
            title,
            icon,
            path,
        } => {
            let item_id = parse_item_id("items[].id", id)?;
            let mut file = FileShortcut::new(item_id, name, PathBuf::from(path));
            file.set_title(title);
            file.set_icon(icon);
            Ok(Shortcut::File(file))
        }
        ItemJson::Folder {
            id,
            name,
            title,
            icon,
            path,
        } => {
            let item_id = parse_item_id("items[].id", id)?;
            let mut folder = FolderShortcut::new(item_id, name, PathBuf::from(path));
            folder.set_title(title);
            folder.set_icon(icon);
            Ok(Shortcut::Folder(folder))
        }
        ItemJson::Link {
            id,
            name,
            title,
            icon,
            url,
        } => {
            let item_id = parse_item_id("items[].id", id)?;
            let mut link = LinkShortcut::new(item_id, name, url);
            link.set_title(title);
            link.set_icon(icon);
            Ok(Shortcut::Link(link))
        }
        ItemJson::FolderGroup { id, .. } => Err(StoreError::NestedGroup { item_id: id }),
    }
}

fn item_from_json(item_json: ItemJson) -> Result<Item, StoreError> {
    match item_json {
        ItemJson::FolderGroup {
            id,
            name,
            title,
            color,
            children,
        } => {
            let item_id = parse_item_id("items[].id", id)?;
            let mut group = FolderGroup::new(item_id, name);
            group.set_title(title);

            if let Some(color_str) = color {
                let color = color_str.parse::<GroupColor>().map_err(|source| {
                    StoreError::InvalidColor {
                        field: "items[].color",
                        value: color_str,
                        source: Box::new(source),
                    }
                })?;
                group.set_color(color);
            }

            for child_json in children {
                group.children_mut().push(shortcut_from_json(child_json)?);
            }

            Ok(Item::Group(group))
        }
        other => shortcut_from_json(other).map(Item::Shortcut),
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    // A bare file name has an empty parent; treat that as the current dir.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = parent.as_path();

    fs::create_dir_all(parent).map_err(|source| StoreError::Io {
        path: parent.to_path_buf(),
        source,
    })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("config path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".naiad.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
