// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One node of a browser bookmark tree: a url leaf, a folder of child
/// nodes, or something this importer does not care about (separators,
/// partner nodes and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Url { name: String, url: String },
    Folder { name: String, children: Vec<BookmarkNode> },
    Other,
}

/// A url leaf collected from anywhere in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkLink {
    pub name: String,
    pub url: String,
}

/// Walks the tree depth-first and collects every url leaf, ignoring folder
/// nesting depth and any non-url, non-folder nodes.
pub fn flatten_links(root: &BookmarkNode) -> Vec<BookmarkLink> {
    let mut links = Vec::new();
    collect_links(root, &mut links);
    links
}

fn collect_links(node: &BookmarkNode, links: &mut Vec<BookmarkLink>) {
    match node {
        BookmarkNode::Url { name, url } => {
            links.push(BookmarkLink {
                name: name.clone(),
                url: url.clone(),
            });
        }
        BookmarkNode::Folder { children, .. } => {
            for child in children {
                collect_links(child, links);
            }
        }
        BookmarkNode::Other => {}
    }
}

#[derive(Debug)]
pub enum ImportError {
    /// The bookmarks file does not exist. Reported, never fatal.
    Missing { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "no bookmarks file at {path:?}"),
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Reads a bookmarks file into a single tree.
///
/// Accepts either a bare node tree (`{"type": "folder", ...}`) or the
/// Chrome/Chromium file shape (`{"roots": {"bookmark_bar": ..., ...}}`);
/// for the latter every root is merged under one synthetic folder.
pub fn read_bookmarks_file(path: &Path) -> Result<BookmarkNode, ImportError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(ImportError::Missing {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ImportError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let file_json: BookmarksFileJson =
        serde_json::from_str(&raw).map_err(|source| ImportError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match file_json {
        BookmarksFileJson::Chrome { roots } => BookmarkNode::Folder {
            name: "roots".to_owned(),
            // Root containers deserialize as nodes; scalar bookkeeping
            // entries (e.g. sync versions) are skipped.
            children: roots
                .into_values()
                .filter_map(|value| serde_json::from_value::<BookmarkNodeJson>(value).ok())
                .map(node_from_json)
                .collect(),
        },
        BookmarksFileJson::Tree(node_json) => node_from_json(node_json),
    })
}

/// The default bookmarks location of the user's browser, by OS.
///
/// Chrome keeps its bookmarks file in a fixed profile location per platform;
/// `None` when the relevant home/profile env vars are unset.
pub fn default_bookmarks_path() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        let local_app_data = env::var_os("LOCALAPPDATA")?;
        Some(
            PathBuf::from(local_app_data)
                .join("Google")
                .join("Chrome")
                .join("User Data")
                .join("Default")
                .join("Bookmarks"),
        )
    } else if cfg!(target_os = "macos") {
        let home = env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("Google")
                .join("Chrome")
                .join("Default")
                .join("Bookmarks"),
        )
    } else {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(
            config_dir
                .join("google-chrome")
                .join("Default")
                .join("Bookmarks"),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BookmarksFileJson {
    Chrome {
        roots: std::collections::BTreeMap<String, serde_json::Value>,
    },
    Tree(BookmarkNodeJson),
}

#[derive(Debug, Clone, Deserialize)]
struct BookmarkNodeJson {
    #[serde(rename = "type", default)]
    node_type: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    children: Option<Vec<BookmarkNodeJson>>,
}

fn node_from_json(node_json: BookmarkNodeJson) -> BookmarkNode {
    let name = node_json.name.unwrap_or_default();

    match node_json.node_type.as_deref() {
        Some("url") => match node_json.url {
            Some(url) => BookmarkNode::Url { name, url },
            None => BookmarkNode::Other,
        },
        Some("folder") => BookmarkNode::Folder {
            name,
            children: node_json
                .children
                .unwrap_or_default()
                .into_iter()
                .map(node_from_json)
                .collect(),
        },
        // Nodes without a type but with children behave like folders; that
        // covers hand-written trees and Chrome's root containers.
        None if node_json.children.is_some() => BookmarkNode::Folder {
            name,
            children: node_json
                .children
                .unwrap_or_default()
                .into_iter()
                .map(node_from_json)
                .collect(),
        },
        _ => BookmarkNode::Other,
    }
}
