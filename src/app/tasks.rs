//! Task panel key handling and context menu actions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use super::App;
use crate::app::state::{AppMode, TaskEditor};
use crate::core::Action;
use crate::tui::widgets::{ChatMessage, ContextMenuItem};

impl App {
    /// Handles a key while the task panel has focus.
    ///
    /// Priority: inline editor, then context menu, then panel shortcuts.
    pub(crate) fn handle_tasks_key(&mut self, key: KeyEvent) {
        if self.tasks.editor.is_some() {
            self.handle_task_editor_key(key);
            return;
        }
        if self.tasks.menu.is_visible() {
            self.handle_context_menu_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('c') if ctrl => self.run_task_action(ContextMenuItem::Copy),
            KeyCode::Char('v' | 'V') if ctrl && shift => {
                self.run_task_action(ContextMenuItem::Duplicate);
            }
            KeyCode::Enter if alt => self.run_task_action(ContextMenuItem::InsertBelow),
            KeyCode::Enter => self.run_task_action(ContextMenuItem::Edit),
            KeyCode::Delete | KeyCode::Char('d') => self.run_task_action(ContextMenuItem::Delete),
            KeyCode::Up | KeyCode::Char('k') => {
                self.tasks.selected = self.tasks.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.tasks.selected += 1;
                self.tasks.clamp_selection(self.store.tasks.len());
            }
            KeyCode::Char(' ') => {
                if !self.store.tasks.is_empty() {
                    self.dispatch(Action::ToggleTaskDone(self.tasks.selected));
                }
            }
            KeyCode::Char('a') => {
                self.dispatch(Action::AddTask(String::new()));
                self.open_task_editor();
            }
            KeyCode::Char('m') => {
                if !self.store.tasks.is_empty() {
                    self.tasks.menu.open();
                }
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.mode = AppMode::Chat;
            }
            _ => {}
        }
    }

    fn handle_context_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.tasks.menu.select_up(),
            KeyCode::Down | KeyCode::Char('j') => self.tasks.menu.select_down(),
            KeyCode::Enter => {
                let item = self.tasks.menu.selected_item();
                self.tasks.menu.close();
                if let Some(item) = item {
                    self.run_task_action(item);
                }
            }
            KeyCode::Esc | KeyCode::Char('m') => self.tasks.menu.close(),
            _ => {}
        }
    }

    /// Performs a context menu action on the selected task.
    ///
    /// Everything except "Insert task below" needs a task to act on and is
    /// a no-op on an empty list.
    pub(crate) fn run_task_action(&mut self, item: ContextMenuItem) {
        let index = self.tasks.selected;
        if item != ContextMenuItem::InsertBelow && self.store.tasks.get(index).is_none() {
            return;
        }

        match item {
            ContextMenuItem::Copy => self.copy_task(index),
            ContextMenuItem::InsertBelow => {
                self.dispatch(Action::InsertTaskBelow(index));
                self.open_task_editor();
            }
            ContextMenuItem::Duplicate => self.dispatch(Action::DuplicateTask(index)),
            ContextMenuItem::Edit => self.open_task_editor(),
            ContextMenuItem::Delete => self.dispatch(Action::DeleteTask(index)),
        }
    }

    fn copy_task(&mut self, index: usize) {
        let Some(value) = self.store.tasks.get(index).map(|t| t.value.clone()) else {
            return;
        };
        match self.clipboard.set_text(&value) {
            Ok(()) => {
                info!(index, "task.copied");
                self.push_message(ChatMessage::system(format!("Copied \"{value}\"")));
            }
            Err(e) => {
                warn!(error = %e, "task.copy_failed");
                self.push_message(ChatMessage::warning(format!("Copy failed: {e}")));
            }
        }
    }

    /// Opens the inline editor on the selected task.
    fn open_task_editor(&mut self) {
        let index = self.tasks.selected;
        if let Some(task) = self.store.tasks.get(index) {
            self.tasks.editor = Some(TaskEditor::new(index, &task.value));
        }
    }

    fn handle_task_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.tasks.editor.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Enter => {
                let index = editor.index;
                let value = editor.value().trim().to_string();
                self.tasks.editor = None;
                if value.is_empty() {
                    self.dispatch(Action::DeleteTask(index));
                } else {
                    self.dispatch(Action::EditTask(index, value));
                }
            }
            KeyCode::Esc => self.cancel_task_editor(),
            _ => {
                editor.textarea.input(key);
            }
        }
    }

    /// Closes the editor without committing.
    ///
    /// A task created for this edit is dropped if it never got text.
    pub(crate) fn cancel_task_editor(&mut self) {
        let Some(editor) = self.tasks.editor.take() else {
            return;
        };
        if self
            .store
            .tasks
            .get(editor.index)
            .is_some_and(|t| t.value.is_empty())
        {
            self.dispatch(Action::DeleteTask(editor.index));
        }
    }

    /// Inserts pasted text into the open task editor as a single line.
    pub(crate) fn insert_into_task_editor(&mut self, text: &str) {
        if let Some(editor) = self.tasks.editor.as_mut() {
            editor.textarea.insert_str(text.replace('\n', " "));
        }
    }
}
