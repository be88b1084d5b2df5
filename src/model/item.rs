// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::ids::ItemId;

/// The kind tag distinguishing strip entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    App,
    File,
    Folder,
    Link,
    Group,
}

impl ItemKind {
    /// The id prefix used when generating fresh ids for this kind.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Link => "link",
            Self::Group => "folder-group",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::File => "file",
            Self::Folder => "folder",
            Self::Link => "link",
            Self::Group => "folder group",
        }
    }
}

/// Color tag for folder groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GroupColor {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Cyan,
}

impl GroupColor {
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Cyan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::Default
    }
}

impl fmt::Display for GroupColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGroupColorError {
    value: String,
}

impl fmt::Display for ParseGroupColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown group color: {:?}", self.value)
    }
}

impl std::error::Error for ParseGroupColorError {}

impl FromStr for GroupColor {
    type Err = ParseGroupColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ParseGroupColorError {
                value: s.to_owned(),
            })
    }
}

/// A launchable shortcut (everything on the strip except folder groups).
///
/// Folder-group children are `Shortcut`s, which is what keeps nesting to a
/// single level: a group cannot contain another group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    App(AppShortcut),
    File(FileShortcut),
    Folder(FolderShortcut),
    Link(LinkShortcut),
}

impl Shortcut {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::App(_) => ItemKind::App,
            Self::File(_) => ItemKind::File,
            Self::Folder(_) => ItemKind::Folder,
            Self::Link(_) => ItemKind::Link,
        }
    }

    pub fn id(&self) -> &ItemId {
        match self {
            Self::App(app) => app.id(),
            Self::File(file) => file.id(),
            Self::Folder(folder) => folder.id(),
            Self::Link(link) => link.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::App(app) => app.name(),
            Self::File(file) => file.name(),
            Self::Folder(folder) => folder.name(),
            Self::Link(link) => link.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Self::App(app) => app.name = name.into(),
            Self::File(file) => file.name = name.into(),
            Self::Folder(folder) => folder.name = name.into(),
            Self::Link(link) => link.name = name.into(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::App(app) => app.title(),
            Self::File(file) => file.title(),
            Self::Folder(folder) => folder.title(),
            Self::Link(link) => link.title(),
        }
    }

    pub fn set_title(&mut self, title: Option<String>) {
        match self {
            Self::App(app) => app.title = title,
            Self::File(file) => file.title = title,
            Self::Folder(folder) => folder.title = title,
            Self::Link(link) => link.title = title,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::App(app) => app.icon(),
            Self::File(file) => file.icon(),
            Self::Folder(folder) => folder.icon(),
            Self::Link(link) => link.icon(),
        }
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        match self {
            Self::App(app) => app.icon = icon,
            Self::File(file) => file.icon = icon,
            Self::Folder(folder) => folder.icon = icon,
            Self::Link(link) => link.icon = icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShortcut {
    id: ItemId,
    name: String,
    title: Option<String>,
    icon: Option<String>,
    command: String,
}

impl AppShortcut {
    pub fn new(id: ItemId, name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            icon: None,
            command: command.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileShortcut {
    id: ItemId,
    name: String,
    title: Option<String>,
    icon: Option<String>,
    path: PathBuf,
}

impl FileShortcut {
    pub fn new(id: ItemId, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            icon: None,
            path: path.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderShortcut {
    id: ItemId,
    name: String,
    title: Option<String>,
    icon: Option<String>,
    path: PathBuf,
}

impl FolderShortcut {
    pub fn new(id: ItemId, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            icon: None,
            path: path.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkShortcut {
    id: ItemId,
    name: String,
    title: Option<String>,
    icon: Option<String>,
    url: String,
}

impl LinkShortcut {
    pub fn new(id: ItemId, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            icon: None,
            url: url.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }
}

/// A named, colorable container of child shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup {
    id: ItemId,
    name: String,
    title: Option<String>,
    color: GroupColor,
    children: Vec<Shortcut>,
}

impl FolderGroup {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            color: GroupColor::Default,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn color(&self) -> GroupColor {
        self.color
    }

    pub fn set_color(&mut self, color: GroupColor) {
        self.color = color;
    }

    pub fn children(&self) -> &[Shortcut] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Shortcut> {
        &mut self.children
    }

    pub fn child(&self, child_id: &ItemId) -> Option<&Shortcut> {
        self.children.iter().find(|child| child.id() == child_id)
    }

    pub fn child_index(&self, child_id: &ItemId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == child_id)
    }
}

/// One entry of the top-level strip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Shortcut(Shortcut),
    Group(FolderGroup),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Shortcut(shortcut) => shortcut.kind(),
            Self::Group(_) => ItemKind::Group,
        }
    }

    pub fn id(&self) -> &ItemId {
        match self {
            Self::Shortcut(shortcut) => shortcut.id(),
            Self::Group(group) => group.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Shortcut(shortcut) => shortcut.name(),
            Self::Group(group) => group.name(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Shortcut(shortcut) => shortcut.title(),
            Self::Group(group) => group.title(),
        }
    }

    pub fn as_group(&self) -> Option<&FolderGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Shortcut(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut FolderGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Shortcut(_) => None,
        }
    }
}

impl From<Shortcut> for Item {
    fn from(shortcut: Shortcut) -> Self {
        Self::Shortcut(shortcut)
    }
}

impl From<FolderGroup> for Item {
    fn from(group: FolderGroup) -> Self {
        Self::Group(group)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppShortcut, FolderGroup, GroupColor, Item, ItemKind, Shortcut};
    use crate::model::ItemId;

    fn iid(value: &str) -> ItemId {
        ItemId::new(value).expect("item id")
    }

    #[test]
    fn item_kind_follows_variant() {
        let app = Item::from(Shortcut::App(AppShortcut::new(iid("a1"), "Terminal", "sh")));
        assert_eq!(app.kind(), ItemKind::App);

        let group = Item::from(FolderGroup::new(iid("g1"), "Tools"));
        assert_eq!(group.kind(), ItemKind::Group);
        assert!(group.as_group().is_some());
        assert!(app.as_group().is_none());
    }

    #[test]
    fn group_color_round_trips_through_str() {
        for color in GroupColor::ALL {
            assert_eq!(color.as_str().parse::<GroupColor>(), Ok(color));
        }
        assert!("mauve".parse::<GroupColor>().is_err());
    }

    #[test]
    fn group_child_lookup_finds_by_id() {
        let mut group = FolderGroup::new(iid("g1"), "Tools");
        group
            .children_mut()
            .push(Shortcut::App(AppShortcut::new(iid("a1"), "Htop", "htop")));

        assert_eq!(group.child_index(&iid("a1")), Some(0));
        assert!(group.child(&iid("a2")).is_none());
    }
}
