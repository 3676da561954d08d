use crate::app::{App, AppScreen, Focus};
use crate::session;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn handle_key(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match app.screen {
        AppScreen::QuitConfirm => handle_quit_confirm_input(key, app),
        AppScreen::Chat => handle_chat_input(key, app, app_arc),
        AppScreen::Quit => {}
    }
}

fn handle_chat_input(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.screen = AppScreen::QuitConfirm,
            KeyCode::Char('n') => app.new_chat(),
            KeyCode::Char('b') => app.sidebar_open = !app.sidebar_open,
            KeyCode::Char('t') => app.theme.toggle(),
            KeyCode::Char('s') => app.stop(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Input => Focus::Sidebar,
                Focus::Sidebar => Focus::Input,
            };
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Esc => {
            if app.is_generating {
                app.stop();
            } else {
                app.screen = AppScreen::QuitConfirm;
            }
        }
        _ => match app.focus {
            Focus::Input => handle_input_key(key, app, app_arc),
            Focus::Sidebar => handle_sidebar_key(key, app),
        },
    }
}

fn handle_input_key(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Enter => {
            if app.is_generating {
                return;
            }
            if app.input.trim().is_empty() {
                // Enter on an empty input skips the typewriter reveal
                if let Some(tw) = app.typewriter.as_mut() {
                    tw.skip_to_end();
                }
                return;
            }
            let content: String = app.input.drain(..).collect();
            session::send(app, app_arc.clone(), content);
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if !app.is_generating {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_sidebar_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
        KeyCode::Enter => {
            if let Some(id) = app.selected_chat_id() {
                app.select_chat(&id);
                app.focus = Focus::Input;
            }
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            if let Some(id) = app.selected_chat_id() {
                app.delete_chat(&id);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.screen = AppScreen::Quit,
        KeyCode::Char('n') | KeyCode::Esc => app.screen = AppScreen::Chat,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GeminiClient;
    use crate::store::ChatStore;
    use crate::theme::Theme;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn test_app() -> (tempfile::TempDir, Arc<Mutex<App>>) {
        let dir = tempdir().unwrap();
        let store = ChatStore::new(dir.path().join("chats.json"));
        let app = App::new(store, GeminiClient::from_config()).unwrap();
        (dir, Arc::new(Mutex::new(app)))
    }

    #[tokio::test]
    async fn test_ctrl_c_opens_quit_confirm_and_n_backs_out() {
        let (_dir, app) = test_app().await;
        let mut guard = app.lock().await;

        handle_key(ctrl('c'), &mut guard, &app);
        assert_eq!(guard.screen, AppScreen::QuitConfirm);

        handle_key(key(KeyCode::Char('n')), &mut guard, &app);
        assert_eq!(guard.screen, AppScreen::Chat);
    }

    #[tokio::test]
    async fn test_quit_confirm_y_quits() {
        let (_dir, app) = test_app().await;
        let mut guard = app.lock().await;
        guard.screen = AppScreen::QuitConfirm;

        handle_key(key(KeyCode::Char('y')), &mut guard, &app);
        assert_eq!(guard.screen, AppScreen::Quit);
    }

    #[tokio::test]
    async fn test_tab_toggles_focus() {
        let (_dir, app) = test_app().await;
        let mut guard = app.lock().await;

        handle_key(key(KeyCode::Tab), &mut guard, &app);
        assert_eq!(guard.focus, Focus::Sidebar);
        handle_key(key(KeyCode::Tab), &mut guard, &app);
        assert_eq!(guard.focus, Focus::Input);
    }

    #[tokio::test]
    async fn test_ctrl_t_toggles_theme() {
        let (_dir, app) = test_app().await;
        let mut guard = app.lock().await;
        let before = guard.theme;

        handle_key(ctrl('t'), &mut guard, &app);
        assert_ne!(guard.theme, before);
    }

    #[tokio::test]
    async fn test_typing_is_blocked_while_generating() {
        let (_dir, app) = test_app().await;
        let mut guard = app.lock().await;
        guard.is_generating = true;

        handle_key(key(KeyCode::Char('a')), &mut guard, &app);
        assert!(guard.input.is_empty());
    }

    #[tokio::test]
    async fn test_theme_default_is_dark() {
        let (_dir, app) = test_app().await;
        assert_eq!(app.lock().await.theme, Theme::Dark);
    }
}
