//! Task panel tests: keyboard shortcuts, inline editing and the context menu.

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use super::helpers::*;
use crate::app::{App, AppMode};
use crate::tui::widgets::MessageKind;

fn task_values(app: &App) -> Vec<&str> {
    app.store
        .tasks
        .tasks()
        .iter()
        .map(|t| t.value.as_str())
        .collect()
}

/// Opens the panel and adds each value through the 'a' shortcut.
fn app_with_tasks(values: &[&str]) -> App {
    let mut app = create_test_app();
    app.handle_key(ctrl_key('t'));
    for value in values {
        app.handle_key(char_key('a'));
        type_text(&mut app, value);
        app.handle_key(enter_key(KeyModifiers::NONE));
    }
    app
}

// =============================================================================
// Panel Focus Tests
// =============================================================================

mod focus_tests {
    use super::*;

    #[test]
    fn test_ctrl_t_opens_and_focuses_panel() {
        let mut app = create_test_app();
        app.handle_key(ctrl_key('t'));
        assert!(app.store.tasks.open);
        assert_eq!(app.mode, AppMode::Tasks);

        app.handle_key(ctrl_key('t'));
        assert!(!app.store.tasks.open);
        assert_eq!(app.mode, AppMode::Chat);
    }

    #[test]
    fn test_esc_returns_focus_to_chat_keeping_panel_open() {
        let mut app = app_with_tasks(&["one"]);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Chat);
        assert!(app.store.tasks.open);

        // Typing now goes to the composer, not the panel.
        type_text(&mut app, "a");
        assert_eq!(app.text_input.collect_text(), "a");
        assert_eq!(app.store.tasks.len(), 1);
    }

    #[test]
    fn test_tasks_open_option_starts_with_panel_visible() {
        let app = App::new(crate::app::AppOptions {
            tasks_open: true,
            ..crate::app::AppOptions::default()
        });
        assert!(app.store.tasks.open);
        assert_eq!(app.mode, AppMode::Chat);
    }
}

// =============================================================================
// Editing Tests
// =============================================================================

mod editing_tests {
    use super::*;

    #[test]
    fn test_add_type_and_commit() {
        let app = app_with_tasks(&["buy milk", "call mom"]);
        assert_eq!(task_values(&app), vec!["buy milk", "call mom"]);
        assert_eq!(app.tasks.selected, 1);
        assert!(app.tasks.editor.is_none());
    }

    #[test]
    fn test_commit_trims_whitespace() {
        let app = app_with_tasks(&["  padded  "]);
        assert_eq!(task_values(&app), vec!["padded"]);
    }

    #[test]
    fn test_esc_on_new_empty_task_deletes_it() {
        let mut app = app_with_tasks(&["keep"]);
        app.handle_key(char_key('a'));
        assert_eq!(app.store.tasks.len(), 2);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(task_values(&app), vec!["keep"]);
        assert!(app.tasks.editor.is_none());
        // Focus stays on the panel.
        assert_eq!(app.mode, AppMode::Tasks);
    }

    #[test]
    fn test_toggling_panel_mid_edit_drops_new_empty_task() {
        let mut app = create_test_app();
        app.handle_key(ctrl_key('t'));
        app.handle_key(char_key('a'));
        app.handle_key(ctrl_key('t'));

        assert!(app.store.tasks.is_empty());
        assert!(app.tasks.editor.is_none());
        assert_eq!(app.mode, AppMode::Chat);
    }

    #[test]
    fn test_toggling_panel_mid_edit_keeps_existing_task() {
        let mut app = app_with_tasks(&["keep"]);
        app.handle_key(enter_key(KeyModifiers::NONE));
        type_text(&mut app, " more");
        app.handle_key(ctrl_key('t'));

        assert_eq!(task_values(&app), vec!["keep"]);
        assert!(app.tasks.editor.is_none());
    }

    #[test]
    fn test_esc_on_existing_task_keeps_old_value() {
        let mut app = app_with_tasks(&["original"]);
        app.handle_key(enter_key(KeyModifiers::NONE));
        type_text(&mut app, " changed");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(task_values(&app), vec!["original"]);
    }

    #[test]
    fn test_edit_appends_to_existing_text() {
        let mut app = app_with_tasks(&["draft"]);
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert!(app.tasks.editor.is_some());
        type_text(&mut app, " v2");
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(task_values(&app), vec!["draft v2"]);
    }

    #[test]
    fn test_committing_empty_text_deletes_task() {
        let mut app = app_with_tasks(&["ab", "keep"]);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(enter_key(KeyModifiers::NONE));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(task_values(&app), vec!["keep"]);
    }

    #[test]
    fn test_editor_swallows_panel_shortcuts() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(char_key('a'));
        type_text(&mut app, "dm ");
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(task_values(&app), vec!["dm"]);
        assert!(!app.tasks.menu.is_visible());
    }

    #[test]
    fn test_paste_into_editor_flattens_newlines() {
        let mut app = app_with_tasks(&[]);
        app.handle_key(char_key('a'));
        app.handle_paste("first\r\nsecond");
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(task_values(&app), vec!["first second"]);
    }

    #[test]
    fn test_alt_enter_inserts_below_and_edits() {
        let mut app = app_with_tasks(&["one", "three"]);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(enter_key(KeyModifiers::ALT));
        assert_eq!(app.tasks.selected, 1);
        assert!(app.tasks.editor.is_some());
        type_text(&mut app, "two");
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(task_values(&app), vec!["one", "two", "three"]);
    }
}

// =============================================================================
// Shortcut Tests
// =============================================================================

mod shortcut_tests {
    use super::*;

    #[test]
    fn test_space_toggles_done() {
        let mut app = app_with_tasks(&["one"]);
        app.handle_key(char_key(' '));
        assert!(app.store.tasks.get(0).is_some_and(|t| t.done));
        app.handle_key(char_key(' '));
        assert!(app.store.tasks.get(0).is_some_and(|t| !t.done));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut app = app_with_tasks(&["one", "two"]);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.tasks.selected, 1);
        app.handle_key(char_key('k'));
        app.handle_key(char_key('k'));
        assert_eq!(app.tasks.selected, 0);
        app.handle_key(char_key('j'));
        assert_eq!(app.tasks.selected, 1);
    }

    #[test]
    fn test_delete_key_removes_selected_and_clamps() {
        let mut app = app_with_tasks(&["one", "two"]);
        app.handle_key(key(KeyCode::Delete));
        assert_eq!(task_values(&app), vec!["one"]);
        assert_eq!(app.tasks.selected, 0);
    }

    #[test]
    fn test_ctrl_shift_v_duplicates_below() {
        let mut app = app_with_tasks(&["one", "two"]);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key_with(
            KeyCode::Char('V'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(task_values(&app), vec!["one", "one", "two"]);
        assert_eq!(app.tasks.selected, 1);
    }

    #[test]
    fn test_ctrl_c_copies_instead_of_quitting() {
        let (mut app, clipboard) = create_test_app_with_clipboard();
        app.handle_key(ctrl_key('t'));
        app.handle_key(char_key('a'));
        type_text(&mut app, "ship it");
        app.handle_key(enter_key(KeyModifiers::NONE));

        app.handle_key(ctrl_key('c'));
        assert!(!app.should_quit());
        assert_eq!(clipboard.copies(), vec!["ship it"]);
        assert_eq!(last_message_text(&app), Some("Copied \"ship it\""));
    }

    #[test]
    fn test_shortcuts_on_empty_list_are_noops() {
        let (mut app, clipboard) = create_test_app_with_clipboard();
        app.handle_key(ctrl_key('t'));
        app.handle_key(char_key(' '));
        app.handle_key(key(KeyCode::Delete));
        app.handle_key(ctrl_key('c'));
        app.handle_key(char_key('m'));
        assert!(app.store.tasks.is_empty());
        assert!(clipboard.copies().is_empty());
        assert!(!app.tasks.menu.is_visible());
    }
}

// =============================================================================
// Context Menu Tests
// =============================================================================

mod context_menu_tests {
    use super::*;

    #[test]
    fn test_menu_copy_uses_clipboard() {
        let (mut app, clipboard) = create_test_app_with_clipboard();
        app.handle_key(ctrl_key('t'));
        app.handle_key(char_key('a'));
        type_text(&mut app, "write tests");
        app.handle_key(enter_key(KeyModifiers::NONE));

        app.handle_key(char_key('m'));
        assert!(app.tasks.menu.is_visible());
        app.handle_key(enter_key(KeyModifiers::NONE));

        assert!(!app.tasks.menu.is_visible());
        assert_eq!(clipboard.copies(), vec!["write tests"]);
        let last = app.chat.messages.last().unwrap();
        assert_eq!(last.kind, MessageKind::System);
    }

    #[test]
    fn test_menu_delete_is_last_item() {
        let mut app = app_with_tasks(&["one", "two"]);
        app.handle_key(char_key('m'));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(task_values(&app), vec!["one"]);
    }

    #[test]
    fn test_menu_edit_opens_editor() {
        let mut app = app_with_tasks(&["one"]);
        app.handle_key(char_key('m'));
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(enter_key(KeyModifiers::NONE));
        assert_eq!(app.tasks.editor.as_ref().map(|e| e.index), Some(0));
    }

    #[test]
    fn test_menu_esc_closes_without_action() {
        let mut app = app_with_tasks(&["one"]);
        app.handle_key(char_key('m'));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.tasks.menu.is_visible());
        assert_eq!(app.mode, AppMode::Tasks);
        assert_eq!(task_values(&app), vec!["one"]);
    }

    #[test]
    fn test_toggling_panel_closes_menu() {
        let mut app = app_with_tasks(&["one"]);
        app.handle_key(char_key('m'));
        app.handle_key(ctrl_key('t'));
        assert!(!app.tasks.menu.is_visible());
        app.handle_key(ctrl_key('t'));
        assert!(!app.tasks.menu.is_visible());
    }
}
