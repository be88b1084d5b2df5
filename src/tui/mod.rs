// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive TUI host surface.
//!
//! The strip is rendered across the top from the current projection and
//! re-derived in full whenever the store revision or display settings
//! change. All mutations run as prompt-driven command flows; cancelling any
//! prompt aborts the whole flow with no partial mutation.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::{Command as ProcessCommand, Stdio};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use crate::model::{
    fixtures, generate_item_id, is_default_id, AppShortcut, FileShortcut, FolderGroup,
    FolderShortcut, GroupColor, Item, ItemId, ItemKind, LinkShortcut, Shortcut, Strip,
};
use crate::ops::{ItemPatch, MoveDirection, Op};
use crate::render::{
    project_strip, shortcut_action, ClickAction, ProjectionOptions, StripEntry,
};
use crate::store::{ItemStore, ItemStoreError};
use crate::ui::{Command, Notice, NoticeKind};

mod theme;

use theme::TuiTheme;

/// A sample strip for `--demo` runs.
pub fn demo_strip() -> Strip {
    fixtures::strip_small()
}

pub fn run_with_store(store: ItemStore) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(store, theme);

    while !app.should_quit {
        app.refresh_projection();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    Strip,
    GroupMenu { group_id: ItemId, selected: usize },
    ConfigMenu { selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptKind {
    Text { value: String },
    Path { value: String },
    Choice { options: Vec<String>, filter: String, filtered: Vec<usize>, selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Prompt {
    label: String,
    kind: PromptKind,
}

impl Prompt {
    fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: PromptKind::Text { value: String::new() },
        }
    }

    fn path(label: impl Into<String>, prefill: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: PromptKind::Path { value: prefill.into() },
        }
    }

    fn choice(label: impl Into<String>, options: Vec<String>) -> Self {
        let filtered = (0..options.len()).collect();
        Self {
            label: label.into(),
            kind: PromptKind::Choice { options, filter: String::new(), filtered, selected: 0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AddTarget {
    TopLevel,
    Group(ItemId),
}

/// In-flight multi-step command state. Dropping the value is what makes
/// cancellation atomic: nothing mutates until the final step applies an op.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingCommand {
    AddShortcut {
        target: AddTarget,
        kind: Option<ItemKind>,
        name: Option<String>,
    },
    AddGroup {
        name: Option<String>,
        title: Option<Option<String>>,
    },
    EditItem {
        item_id: ItemId,
        kind: ItemKind,
        field: Option<EditField>,
    },
    ImportBookmarks,
    SetMaxItems,
    ConfirmReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditField {
    Name,
    Title,
    Icon,
    Command,
    Path,
    Url,
    Color,
}

impl EditField {
    fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Icon => "icon",
            Self::Command => "command",
            Self::Path => "path",
            Self::Url => "url",
            Self::Color => "color",
        }
    }

    fn options_for(kind: ItemKind) -> Vec<EditField> {
        match kind {
            ItemKind::App => vec![Self::Name, Self::Title, Self::Icon, Self::Command],
            ItemKind::File | ItemKind::Folder => {
                vec![Self::Name, Self::Title, Self::Icon, Self::Path]
            }
            ItemKind::Link => vec![Self::Name, Self::Title, Self::Icon, Self::Url],
            ItemKind::Group => vec![Self::Name, Self::Title, Self::Color],
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    kind: NoticeKind,
    expires_at: Instant,
}

struct App {
    store: ItemStore,
    theme: TuiTheme,
    entries: Vec<StripEntry>,
    projected_at: Option<(u64, ProjectionOptions)>,
    selected: usize,
    view: View,
    prompt: Option<Prompt>,
    pending: Option<PendingCommand>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(store: ItemStore, theme: TuiTheme) -> Self {
        Self {
            store,
            theme,
            entries: Vec::new(),
            projected_at: None,
            selected: 0,
            view: View::Strip,
            prompt: None,
            pending: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Discards the previous entry sequence and re-projects whenever the
    /// strip revision or display settings changed.
    fn refresh_projection(&mut self) {
        let options = ProjectionOptions::from(self.store.settings());
        let rev = self.store.strip().rev();
        if self.projected_at == Some((rev, options)) {
            return;
        }

        self.entries = project_strip(self.store.strip(), &options);
        self.projected_at = Some((rev, options));
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    fn notice(&mut self, notice: Notice) {
        self.toast = Some(Toast {
            message: notice.message().to_owned(),
            kind: notice.kind(),
            expires_at: Instant::now() + Duration::from_secs(3),
        });
    }

    /// Applies one op against the store, surfacing failures as notices.
    /// Returns true when the strip changed (or at least stayed mutated in
    /// memory after a failed persist).
    fn apply(&mut self, op: &Op) -> bool {
        match self.store.apply(op) {
            Ok(_) => true,
            Err(ItemStoreError::Apply(err)) => {
                self.notice(Notice::info(err.to_string()));
                false
            }
            Err(err @ ItemStoreError::Persist(_)) => {
                self.notice(Notice::error(err.to_string()));
                true
            }
        }
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::AddItem => {
                self.start_add_shortcut(AddTarget::TopLevel);
            }
            Command::AddFolderGroup => {
                self.pending = Some(PendingCommand::AddGroup { name: None, title: None });
                self.prompt = Some(Prompt::text("Group name"));
            }
            Command::ImportBookmarks => {
                let prefill = crate::import::default_bookmarks_path()
                    .map(|path| path.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.pending = Some(PendingCommand::ImportBookmarks);
                self.prompt = Some(Prompt::path("Bookmarks file", prefill));
            }
            Command::OpenConfigurationMenu => {
                self.view = View::ConfigMenu { selected: 0 };
            }
            Command::OpenFolderMenu(group_id) => {
                if self.store.strip().group(&group_id).is_some() {
                    self.view = View::GroupMenu { group_id, selected: 0 };
                } else {
                    self.notice(Notice::info(format!("No folder group with id {group_id}")));
                }
            }
        }
    }

    fn start_add_shortcut(&mut self, target: AddTarget) {
        self.pending = Some(PendingCommand::AddShortcut { target, kind: None, name: None });
        self.prompt = Some(Prompt::choice(
            "Shortcut type",
            vec![
                "app".to_owned(),
                "file".to_owned(),
                "folder".to_owned(),
                "link".to_owned(),
            ],
        ));
    }

    fn start_edit(&mut self, item_id: ItemId, kind: ItemKind) {
        let fields = EditField::options_for(kind);
        let options = fields.iter().map(|field| field.label().to_owned()).collect();
        self.pending = Some(PendingCommand::EditItem { item_id, kind, field: None });
        self.prompt = Some(Prompt::choice("Edit field", options));
    }

    /// Aborts the in-flight command flow. State is exactly as it was before
    /// the flow began.
    fn cancel_pending(&mut self) {
        self.pending = None;
        self.prompt = None;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key.code);
            return;
        }

        match self.view.clone() {
            View::Strip => self.handle_strip_key(key.code),
            View::GroupMenu { group_id, selected } => {
                self.handle_group_menu_key(key.code, group_id, selected)
            }
            View::ConfigMenu { selected } => self.handle_config_menu_key(key.code, selected),
        }
    }

    fn handle_strip_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Char('a') => self.dispatch(Command::AddItem),
            KeyCode::Char('g') => self.dispatch(Command::AddFolderGroup),
            KeyCode::Char('i') => self.dispatch(Command::ImportBookmarks),
            KeyCode::Char('c') => self.dispatch(Command::OpenConfigurationMenu),
            KeyCode::Char('f') => {
                if let Some(group_id) = self.selected_group_id() {
                    self.dispatch(Command::OpenFolderMenu(group_id));
                }
            }
            KeyCode::Char('e') => {
                if let Some((item_id, kind)) = self.selected_item() {
                    self.start_edit(item_id, kind);
                }
            }
            KeyCode::Char('d') => {
                if let Some((item_id, _)) = self.selected_item() {
                    let name = self
                        .store
                        .strip()
                        .item(&item_id)
                        .map(|item| item.name().to_owned())
                        .unwrap_or_default();
                    if self.apply(&Op::Remove { item_id }) {
                        self.notice(Notice::info(format!("Removed {name}")));
                    }
                }
            }
            KeyCode::Char('K') => self.move_selected(MoveDirection::Back),
            KeyCode::Char('J') => self.move_selected(MoveDirection::Forward),
            _ => {}
        }
    }

    fn handle_group_menu_key(&mut self, code: KeyCode, group_id: ItemId, selected: usize) {
        let Some(group) = self.store.strip().group(&group_id) else {
            self.view = View::Strip;
            return;
        };
        let child_count = group.children().len();
        let child_id = group.children().get(selected).map(|child| child.id().clone());
        let child_kind = group.children().get(selected).map(Shortcut::kind);
        let child_action = group.children().get(selected).and_then(shortcut_action);

        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.view = View::Strip,
            KeyCode::Up | KeyCode::Char('k') => {
                self.view = View::GroupMenu { group_id, selected: selected.saturating_sub(1) };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = if selected + 1 < child_count { selected + 1 } else { selected };
                self.view = View::GroupMenu { group_id, selected: next };
            }
            KeyCode::Enter => {
                if let Some(action) = child_action {
                    self.execute_action(&action);
                }
            }
            KeyCode::Char('a') => self.start_add_shortcut(AddTarget::Group(group_id)),
            KeyCode::Char('e') => {
                if let (Some(child_id), Some(kind)) = (child_id, child_kind) {
                    self.start_edit(child_id, kind);
                }
            }
            KeyCode::Char('d') => {
                if let Some(child_id) = child_id {
                    if self.apply(&Op::RemoveFromGroup {
                        group_id: group_id.clone(),
                        child_id,
                    }) {
                        let selected = selected.min(child_count.saturating_sub(2));
                        self.view = View::GroupMenu { group_id, selected };
                    }
                }
            }
            KeyCode::Char('K') => {
                if let Some(child_id) = child_id {
                    if self.apply(&Op::MoveInGroup {
                        group_id: group_id.clone(),
                        child_id,
                        direction: MoveDirection::Back,
                    }) {
                        self.view =
                            View::GroupMenu { group_id, selected: selected.saturating_sub(1) };
                    }
                }
            }
            KeyCode::Char('J') => {
                if let Some(child_id) = child_id {
                    if self.apply(&Op::MoveInGroup {
                        group_id: group_id.clone(),
                        child_id,
                        direction: MoveDirection::Forward,
                    }) {
                        self.view = View::GroupMenu { group_id, selected: selected + 1 };
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_config_menu_key(&mut self, code: KeyCode, selected: usize) {
        const ROW_COUNT: usize = 6;

        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.view = View::Strip,
            KeyCode::Up | KeyCode::Char('k') => {
                self.view = View::ConfigMenu { selected: selected.saturating_sub(1) };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = if selected + 1 < ROW_COUNT { selected + 1 } else { selected };
                self.view = View::ConfigMenu { selected: next };
            }
            KeyCode::Enter => match selected {
                0 => {
                    let show_icons = !self.store.settings().show_icons;
                    if let Err(err) = self.store.set_show_icons(show_icons) {
                        self.notice(Notice::error(err.to_string()));
                    }
                }
                1 => {
                    let show_titles = !self.store.settings().show_titles;
                    if let Err(err) = self.store.set_show_titles(show_titles) {
                        self.notice(Notice::error(err.to_string()));
                    }
                }
                2 => {
                    self.pending = Some(PendingCommand::SetMaxItems);
                    self.prompt = Some(Prompt::text("Max strip items"));
                }
                3 => self.dispatch(Command::ImportBookmarks),
                4 => {
                    self.pending = Some(PendingCommand::ConfirmReset);
                    self.prompt = Some(Prompt::choice(
                        "Reset strip to the default shortcuts?",
                        vec!["cancel".to_owned(), "reset".to_owned()],
                    ));
                }
                _ => self.view = View::Strip,
            },
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };

        enum Outcome {
            Keep,
            Cancel,
            Submit(String),
        }

        let outcome = match (&mut prompt.kind, code) {
            (_, KeyCode::Esc) => Outcome::Cancel,
            (PromptKind::Text { value } | PromptKind::Path { value }, KeyCode::Char(ch)) => {
                value.push(ch);
                Outcome::Keep
            }
            (PromptKind::Text { value } | PromptKind::Path { value }, KeyCode::Backspace) => {
                value.pop();
                Outcome::Keep
            }
            (PromptKind::Text { value } | PromptKind::Path { value }, KeyCode::Enter) => {
                Outcome::Submit(value.clone())
            }
            (PromptKind::Choice { options, filter, filtered, selected }, code) => match code {
                KeyCode::Char(ch) => {
                    filter.push(ch);
                    *filtered = filter_choices(options, filter);
                    *selected = 0;
                    Outcome::Keep
                }
                KeyCode::Backspace => {
                    filter.pop();
                    *filtered = filter_choices(options, filter);
                    *selected = 0;
                    Outcome::Keep
                }
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    Outcome::Keep
                }
                KeyCode::Down => {
                    if *selected + 1 < filtered.len() {
                        *selected += 1;
                    }
                    Outcome::Keep
                }
                KeyCode::Enter => {
                    match filtered.get(*selected).map(|idx| options[*idx].clone()) {
                        Some(option) => Outcome::Submit(option),
                        // Nothing matches the filter; keep the prompt open.
                        None => Outcome::Keep,
                    }
                }
                _ => Outcome::Keep,
            },
            _ => Outcome::Keep,
        };

        match outcome {
            Outcome::Keep => self.prompt = Some(prompt),
            Outcome::Cancel => self.cancel_pending(),
            Outcome::Submit(input) => self.submit_prompt(input),
        }
    }

    /// Advances the in-flight command flow with one prompt result. Empty
    /// input for a required field aborts the flow, matching cancellation.
    fn submit_prompt(&mut self, input: String) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending {
            PendingCommand::AddShortcut { target, kind: None, .. } => {
                let kind = match input.as_str() {
                    "app" => ItemKind::App,
                    "file" => ItemKind::File,
                    "folder" => ItemKind::Folder,
                    "link" => ItemKind::Link,
                    _ => return self.cancel_pending(),
                };
                self.pending =
                    Some(PendingCommand::AddShortcut { target, kind: Some(kind), name: None });
                self.prompt = Some(Prompt::text("Name"));
            }
            PendingCommand::AddShortcut { target, kind: Some(kind), name: None } => {
                let name = input.trim().to_owned();
                if name.is_empty() {
                    return self.cancel_pending();
                }
                let prompt = match kind {
                    ItemKind::App => Prompt::text("Command"),
                    ItemKind::File => Prompt::path("File path", ""),
                    ItemKind::Folder => Prompt::path("Folder path", ""),
                    ItemKind::Link => Prompt::text("Url"),
                    ItemKind::Group => return self.cancel_pending(),
                };
                self.pending = Some(PendingCommand::AddShortcut {
                    target,
                    kind: Some(kind),
                    name: Some(name),
                });
                self.prompt = Some(prompt);
            }
            PendingCommand::AddShortcut { target, kind: Some(kind), name: Some(name) } => {
                let value = input.trim().to_owned();
                if value.is_empty() {
                    return self.cancel_pending();
                }
                self.finish_add_shortcut(target, kind, name, value);
            }
            PendingCommand::AddGroup { name: None, .. } => {
                let name = input.trim().to_owned();
                if name.is_empty() {
                    return self.cancel_pending();
                }
                self.pending = Some(PendingCommand::AddGroup { name: Some(name), title: None });
                self.prompt = Some(Prompt::text("Title (optional)"));
            }
            PendingCommand::AddGroup { name: Some(name), title: None } => {
                let title = input.trim().to_owned();
                let title = if title.is_empty() { None } else { Some(title) };
                self.pending =
                    Some(PendingCommand::AddGroup { name: Some(name), title: Some(title) });
                self.prompt = Some(Prompt::choice(
                    "Color",
                    GroupColor::ALL.iter().map(|color| color.as_str().to_owned()).collect(),
                ));
            }
            PendingCommand::AddGroup { name: Some(name), title: Some(title) } => {
                let color = input.parse::<GroupColor>().unwrap_or_default();
                let mut group = FolderGroup::new(generate_item_id(ItemKind::Group.id_prefix()), name);
                group.set_title(title);
                group.set_color(color);
                let group_name = group.name().to_owned();
                if self.apply(&Op::Add { item: Item::Group(group) }) {
                    self.notice(Notice::info(format!("Added folder group {group_name}")));
                }
            }
            PendingCommand::EditItem { item_id, kind, field: None } => {
                let Some(field) = EditField::options_for(kind)
                    .into_iter()
                    .find(|field| field.label() == input)
                else {
                    return self.cancel_pending();
                };
                let prompt = match field {
                    EditField::Color => Prompt::choice(
                        "Color",
                        GroupColor::ALL
                            .iter()
                            .map(|color| color.as_str().to_owned())
                            .collect(),
                    ),
                    EditField::Path => Prompt::path(format!("New {}", field.label()), ""),
                    _ => Prompt::text(format!("New {}", field.label())),
                };
                self.pending = Some(PendingCommand::EditItem { item_id, kind, field: Some(field) });
                self.prompt = Some(prompt);
            }
            PendingCommand::EditItem { item_id, field: Some(field), .. } => {
                let value = input.trim().to_owned();
                if value.is_empty() {
                    return self.cancel_pending();
                }
                let mut patch = ItemPatch::default();
                match field {
                    EditField::Name => patch.name = Some(value),
                    EditField::Title => patch.title = Some(value),
                    EditField::Icon => patch.icon = Some(value),
                    EditField::Command => patch.command = Some(value),
                    EditField::Path => patch.path = Some(PathBuf::from(value)),
                    EditField::Url => patch.url = Some(value),
                    EditField::Color => match value.parse::<GroupColor>() {
                        Ok(color) => patch.color = Some(color),
                        Err(_) => return self.cancel_pending(),
                    },
                }
                if self.apply(&Op::Edit { item_id, patch }) {
                    self.notice(Notice::info(format!("Updated {}", field.label())));
                }
            }
            PendingCommand::ImportBookmarks => {
                let path = PathBuf::from(input.trim());
                if path.as_os_str().is_empty() {
                    return self.cancel_pending();
                }
                self.run_import(&path);
            }
            PendingCommand::SetMaxItems => {
                let Ok(max_items) = input.trim().parse::<usize>() else {
                    self.notice(Notice::info(format!("Not a number: {input}")));
                    return;
                };
                if let Err(err) = self.store.set_max_items(max_items) {
                    self.notice(Notice::error(err.to_string()));
                }
            }
            PendingCommand::ConfirmReset => {
                if input == "reset" {
                    if self.apply(&Op::ResetToDefaults) {
                        self.notice(Notice::info("Strip reset to defaults"));
                    }
                }
            }
        }
    }

    fn finish_add_shortcut(
        &mut self,
        target: AddTarget,
        kind: ItemKind,
        name: String,
        value: String,
    ) {
        let item_id = generate_item_id(kind.id_prefix());
        let shortcut = match kind {
            ItemKind::App => Shortcut::App(AppShortcut::new(item_id, name, value)),
            ItemKind::File => Shortcut::File(FileShortcut::new(item_id, name, value)),
            ItemKind::Folder => Shortcut::Folder(FolderShortcut::new(item_id, name, value)),
            ItemKind::Link => Shortcut::Link(LinkShortcut::new(item_id, name, value)),
            ItemKind::Group => return,
        };
        let shortcut_name = shortcut.name().to_owned();

        let op = match target {
            AddTarget::TopLevel => Op::Add { item: Item::Shortcut(shortcut) },
            AddTarget::Group(group_id) => Op::AddToGroup { group_id, child: shortcut },
        };
        if self.apply(&op) {
            self.notice(Notice::info(format!("Added {shortcut_name}")));
        }
    }

    fn run_import(&mut self, path: &std::path::Path) {
        let root = match crate::import::read_bookmarks_file(path) {
            Ok(root) => root,
            Err(err @ crate::import::ImportError::Missing { .. }) => {
                self.notice(Notice::info(err.to_string()));
                return;
            }
            Err(err) => {
                self.notice(Notice::error(err.to_string()));
                return;
            }
        };

        match self.store.import_bookmarks(&root) {
            Ok(count) => self.notice(Notice::info(format!("Imported {count} bookmarks"))),
            Err(err) => self.notice(Notice::error(err.to_string())),
        }
    }

    fn selected_entry(&self) -> Option<&StripEntry> {
        self.entries.get(self.selected)
    }

    fn selected_item(&self) -> Option<(ItemId, ItemKind)> {
        let entry = self.selected_entry()?;
        let item_id = entry.item_id.clone()?;
        let kind = self.store.strip().item(&item_id)?.kind();
        Some((item_id, kind))
    }

    fn selected_group_id(&self) -> Option<ItemId> {
        self.selected_item()
            .filter(|(_, kind)| *kind == ItemKind::Group)
            .map(|(item_id, _)| item_id)
    }

    fn move_selected(&mut self, direction: MoveDirection) {
        let Some((item_id, _)) = self.selected_item() else {
            return;
        };
        if self.apply(&Op::Move { item_id, direction }) {
            let next = self.selected as isize + direction.offset();
            self.selected = next.clamp(0, self.entries.len() as isize - 1) as usize;
        }
    }

    fn activate_selected(&mut self) {
        let Some(action) = self.selected_entry().and_then(|entry| entry.action.clone()) else {
            return;
        };
        self.execute_action(&action);
    }

    fn execute_action(&mut self, action: &ClickAction) {
        match action {
            ClickAction::RunCommand(command) => match spawn_shell_command(command) {
                Ok(()) => self.notice(Notice::info(format!("Launched: {command}"))),
                Err(err) => self.notice(Notice::error(format!("Launch failed: {err}"))),
            },
            ClickAction::OpenPath(path) | ClickAction::OpenWorkspace(path) => {
                match open::that_detached(path) {
                    Ok(()) => self.notice(Notice::info(format!("Opened {}", path.display()))),
                    Err(err) => self.notice(Notice::error(format!("Open failed: {err}"))),
                }
            }
            ClickAction::OpenUrl(url) => match open::that_detached(url) {
                Ok(()) => self.notice(Notice::info(format!("Opened {url}"))),
                Err(err) => self.notice(Notice::error(format!("Open failed: {err}"))),
            },
            ClickAction::OpenGroupMenu(group_id) => {
                self.dispatch(Command::OpenFolderMenu(group_id.clone()));
            }
            ClickAction::AddItem => self.dispatch(Command::AddItem),
        }
    }
}

fn spawn_shell_command(command: &str) -> io::Result<()> {
    #[cfg(windows)]
    let mut process = {
        let mut process = ProcessCommand::new("cmd");
        process.args(["/C", command]);
        process
    };

    #[cfg(not(windows))]
    let mut process = {
        let mut process = ProcessCommand::new("/bin/sh");
        process.args(["-c", command]);
        process
    };

    process
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Ranks choice options against the filter: exact/substring matches first,
/// then close fuzzy matches; everything else is dropped.
fn filter_choices(options: &[String], filter: &str) -> Vec<usize> {
    let filter = filter.trim();
    if filter.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = filter.to_lowercase();
    let mut scored: Vec<(i64, usize)> = options
        .iter()
        .enumerate()
        .filter_map(|(idx, option)| {
            let haystack = option.to_lowercase();
            let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
            let mut score = (ratio * 1000.0).round() as i64;
            if haystack.contains(&needle) {
                score += 200_000;
            }
            if haystack.starts_with(&needle) {
                score += 100_000;
            }
            (haystack.contains(&needle) || ratio > 60.0).then_some((score, idx))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, idx)| idx).collect()
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let prompt_height = if app.prompt.is_some() { prompt_area_height(app) } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(prompt_height),
            Constraint::Length(1),
        ])
        .split(area);
    let strip_area = layout[0];
    let body_area = layout[1];
    let prompt_area = layout[2];
    let status_area = layout[3];

    draw_strip(frame, app, strip_area);

    match app.view.clone() {
        View::Strip => draw_item_details(frame, app, body_area),
        View::GroupMenu { group_id, selected } => {
            draw_group_menu(frame, app, body_area, &group_id, selected)
        }
        View::ConfigMenu { selected } => draw_config_menu(frame, app, body_area, selected),
    }

    if app.prompt.is_some() {
        draw_prompt(frame, app, prompt_area);
    }

    draw_status(frame, app, status_area);
}

fn prompt_area_height(app: &App) -> u16 {
    match app.prompt.as_ref().map(|prompt| &prompt.kind) {
        Some(PromptKind::Choice { filtered, .. }) => {
            // Filter line plus up to eight visible options.
            (filtered.len().clamp(1, 8) as u16).saturating_add(3)
        }
        Some(_) => 3,
        None => 0,
    }
}

fn draw_strip(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let mut spans: Vec<Span<'_>> = Vec::new();
    for (idx, entry) in app.entries.iter().enumerate() {
        let mut style = entry_base_style(app, entry);
        if idx == app.selected {
            style = app.theme.selection_style();
        }
        spans.push(Span::styled(format!(" {} ", entry.label), style));
        spans.push(Span::styled(" ", app.theme.base_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("naiad")
        .border_style(app.theme.panel_border_style(app.view == View::Strip));
    let strip = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(strip, area);
}

fn entry_base_style(app: &App, entry: &StripEntry) -> ratatui::style::Style {
    let color = entry
        .item_id
        .as_ref()
        .and_then(|item_id| app.store.strip().group(item_id))
        .map(FolderGroup::color)
        .unwrap_or(GroupColor::Default);

    app.theme
        .group_color_style(color)
        .unwrap_or_else(|| app.theme.base_style())
}

fn draw_item_details(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let items: Vec<ListItem<'_>> = app
        .entries
        .iter()
        .map(|entry| {
            let mut detail = format!("{}  —  {}", entry.label, entry.tooltip);
            if entry.item_id.as_ref().is_some_and(is_default_id) {
                detail.push_str("  · default");
            }
            ListItem::new(detail).style(entry_base_style(app, entry))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("shortcuts")
                .border_style(app.theme.panel_border_style(false)),
        )
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_group_menu(
    frame: &mut Frame<'_>,
    app: &App,
    area: ratatui::layout::Rect,
    group_id: &ItemId,
    selected: usize,
) {
    let Some(group) = app.store.strip().group(group_id) else {
        return;
    };

    let items: Vec<ListItem<'_>> = group
        .children()
        .iter()
        .map(|child| {
            let target = match child {
                Shortcut::App(a) => a.command().to_owned(),
                Shortcut::File(f) => f.path().display().to_string(),
                Shortcut::Folder(f) => f.path().display().to_string(),
                Shortcut::Link(l) => l.url().to_owned(),
            };
            ListItem::new(format!("{}  —  {}", child.name(), target))
        })
        .collect();

    let mut state = ListState::default();
    state.select((!group.children().is_empty()).then_some(selected));

    let border_style = app
        .theme
        .group_color_style(group.color())
        .unwrap_or_else(|| app.theme.panel_border_style(true));
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("folder group: {}", group.name()))
                .border_style(border_style),
        )
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_config_menu(
    frame: &mut Frame<'_>,
    app: &App,
    area: ratatui::layout::Rect,
    selected: usize,
) {
    let settings = app.store.settings();
    let rows = [
        format!("Show icons: {}", if settings.show_icons { "on" } else { "off" }),
        format!("Show titles: {}", if settings.show_titles { "on" } else { "off" }),
        format!("Max strip items: {}", settings.max_items),
        "Import bookmarks…".to_owned(),
        "Reset to defaults".to_owned(),
        "Close".to_owned(),
    ];

    let items: Vec<ListItem<'_>> = rows.iter().map(|row| ListItem::new(row.clone())).collect();

    let mut state = ListState::default();
    state.select(Some(selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("configuration")
                .border_style(app.theme.panel_border_style(true)),
        )
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_prompt(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let Some(prompt) = app.prompt.as_ref() else {
        return;
    };

    match &prompt.kind {
        PromptKind::Text { value } | PromptKind::Path { value } => {
            let input = Paragraph::new(format!("{value}█")).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(prompt.label.clone())
                    .border_style(app.theme.panel_border_style(true)),
            );
            frame.render_widget(input, area);
        }
        PromptKind::Choice { options, filter, filtered, selected } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(prompt.label.clone())
                .border_style(app.theme.panel_border_style(true));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);

            let filter_line = Paragraph::new(format!("filter: {filter}█"))
                .style(app.theme.hint_style());
            frame.render_widget(filter_line, layout[0]);

            let items: Vec<ListItem<'_>> = filtered
                .iter()
                .map(|idx| ListItem::new(options[*idx].clone()))
                .collect();
            let mut state = ListState::default();
            state.select((!filtered.is_empty()).then_some(*selected));
            let list = List::new(items).highlight_style(app.theme.selection_style());
            frame.render_stateful_widget(list, layout[1], &mut state);
        }
    }
}

fn draw_status(frame: &mut Frame<'_>, app: &mut App, area: ratatui::layout::Rect) {
    let toast_snapshot = app
        .toast
        .as_ref()
        .map(|toast| (toast.message.clone(), toast.kind, toast.expires_at));

    let (toast_text, toast_kind) = match toast_snapshot {
        Some((message, kind, expires_at)) if expires_at > Instant::now() => {
            (Some(message), Some(kind))
        }
        Some(_) => {
            app.toast = None;
            (None, None)
        }
        None => (None, None),
    };

    let hints = match (&app.prompt, &app.view) {
        (Some(_), _) => "enter submit · esc cancel",
        (None, View::Strip) => {
            "←/→ select · enter activate · a add · g group · e edit · d delete · J/K move · f folder · i import · c config · q quit"
        }
        (None, View::GroupMenu { .. }) => {
            "↑/↓ select · enter open · a add · e edit · d remove · J/K move · esc back"
        }
        (None, View::ConfigMenu { .. }) => "↑/↓ select · enter toggle/apply · esc back",
    };

    let mut spans = vec![Span::styled(hints, app.theme.hint_style())];
    if let Some(text) = toast_text {
        let style = match toast_kind {
            Some(NoticeKind::Error) => app.theme.error_style(),
            _ => app.theme.base_style(),
        };
        spans.push(Span::styled("  │ ", app.theme.hint_style()));
        spans.push(Span::styled(text, style));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
