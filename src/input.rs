use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode};
use crate::system::process;

/// Handle a single key input event.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    match app.mode {
        AppMode::Normal => handle_normal_mode(app, key),
        AppMode::Help => handle_help_mode(app, key),
        AppMode::Kill => handle_kill_mode(app, key),
    }
}

// ── Normal mode ─────────────────────────────────────────────────────────

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Navigation ──
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // ── Help ──
        KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('h') => {
            app.mode = AppMode::Help;
        }

        // ── F8 / d — networking kill switch ──
        KeyCode::F(8) | KeyCode::Char('d') => app.toggle.toggle(),

        // ── F9 / k — terminate selected process (by name) ──
        KeyCode::F(9) | KeyCode::Char('k') => {
            if let Some(name) = app.selected_process().map(|p| p.name.clone()) {
                if app.confirm_kill {
                    app.mode = AppMode::Kill;
                } else {
                    process::terminate_by_name(&name);
                }
            }
        }

        // ── Pause/freeze updates ──
        KeyCode::Char('Z') | KeyCode::Char('z') => app.paused = !app.paused,

        _ => {}
    }
}

// ── Help mode ───────────────────────────────────────────────────────────

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Enter => {
            app.mode = AppMode::Normal;
        }
        _ => {}
    }
}

// ── Kill mode — confirmation ────────────────────────────────────────────

fn handle_kill_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') => app.mode = AppMode::Normal,
        KeyCode::Enter | KeyCode::Char('y') => {
            if let Some(name) = app.selected_process().map(|p| p.name.clone()) {
                process::terminate_by_name(&name);
            }
            app.mode = AppMode::Normal;
        }
        _ => {}
    }
}
