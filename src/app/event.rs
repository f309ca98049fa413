use super::mode::Mode;
use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            state.show_help = false;
        }
        return Ok(());
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state)?,
        Mode::Form => handle_form_mode(key, state)?,
        Mode::ConfirmDelete => handle_confirm_delete_mode(key, state)?,
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        KeyCode::Char('?') => {
            state.show_help = true;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_cursor_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_cursor_up();
        }
        KeyCode::Char('g') => {
            state.select_first();
        }
        KeyCode::Char('G') => {
            state.select_last();
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            state.next_category();
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            state.prev_category();
        }
        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('i') => {
            state.open_form();
        }
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            state.toggle_selected()?;
        }
        KeyCode::Char('d') => {
            state.request_delete();
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    // Ctrl chords first; a plain char falls through to text input.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => state.form.add_subtask_field(),
            KeyCode::Char('a') => state.form.active_buffer_mut().move_home(),
            KeyCode::Char('e') => state.form.active_buffer_mut().move_end(),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => {
            // Close without submitting; typed text is kept for next time.
            state.close_form();
        }
        KeyCode::Enter => {
            state.submit_form()?;
        }
        KeyCode::Tab | KeyCode::Down => {
            state.form.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form.focus_prev();
        }
        KeyCode::Backspace => {
            state.form.active_buffer_mut().backspace();
        }
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
            state.form.active_buffer_mut().move_word_left();
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => {
            state.form.active_buffer_mut().move_word_right();
        }
        KeyCode::Left => {
            state.form.active_buffer_mut().move_left();
        }
        KeyCode::Right => {
            state.form.active_buffer_mut().move_right();
        }
        KeyCode::Home => {
            state.form.active_buffer_mut().move_home();
        }
        KeyCode::End => {
            state.form.active_buffer_mut().move_end();
        }
        KeyCode::Char(c) => {
            state.form.active_buffer_mut().insert_char(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_delete_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.confirm_delete()?;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.cancel_delete();
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Board, Task};
    use crate::ui::theme::Theme;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_with_task(dir: &std::path::Path) -> AppState {
        let mut board = Board::initial();
        board.prepend("belief", Task::new("Pray", "", vec![]));
        AppState::new(board, dir.join("board.json"), Theme::default(), None)
    }

    #[test]
    fn test_full_form_flow_through_key_events() {
        let temp = tempdir().unwrap();
        let mut state = state_with_task(temp.path());

        handle_key_event(key(KeyCode::Char('a')), &mut state).unwrap();
        assert_eq!(state.mode, Mode::Form);

        for c in "Read".chars() {
            handle_key_event(key(KeyCode::Char(c)), &mut state).unwrap();
        }
        // Jump to the subtask field and type into it, then add a second one.
        handle_key_event(key(KeyCode::Tab), &mut state).unwrap();
        handle_key_event(key(KeyCode::Tab), &mut state).unwrap();
        for c in "One chapter".chars() {
            handle_key_event(key(KeyCode::Char(c)), &mut state).unwrap();
        }
        handle_key_event(ctrl('n'), &mut state).unwrap();
        handle_key_event(key(KeyCode::Enter), &mut state).unwrap();

        assert_eq!(state.mode, Mode::Navigate);
        let tasks = state.board.tasks("belief");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Read");
        assert_eq!(tasks[0].subtasks.len(), 1);
        assert_eq!(tasks[0].subtasks[0].text, "One chapter");
    }

    #[test]
    fn test_delete_flow_declined_then_confirmed() {
        let temp = tempdir().unwrap();
        let mut state = state_with_task(temp.path());

        handle_key_event(key(KeyCode::Char('d')), &mut state).unwrap();
        assert_eq!(state.mode, Mode::ConfirmDelete);
        handle_key_event(key(KeyCode::Char('n')), &mut state).unwrap();
        assert_eq!(state.board.tasks("belief").len(), 1);

        handle_key_event(key(KeyCode::Char('d')), &mut state).unwrap();
        handle_key_event(key(KeyCode::Char('y')), &mut state).unwrap();
        assert!(state.board.tasks("belief").is_empty());
    }

    #[test]
    fn test_toggle_via_space() {
        let temp = tempdir().unwrap();
        let mut state = state_with_task(temp.path());

        handle_key_event(key(KeyCode::Char(' ')), &mut state).unwrap();
        assert!(state.board.tasks("belief")[0].completed);
        handle_key_event(key(KeyCode::Char(' ')), &mut state).unwrap();
        assert!(!state.board.tasks("belief")[0].completed);
    }

    #[test]
    fn test_q_in_form_mode_types_instead_of_quitting() {
        let temp = tempdir().unwrap();
        let mut state = state_with_task(temp.path());

        handle_key_event(key(KeyCode::Char('a')), &mut state).unwrap();
        handle_key_event(key(KeyCode::Char('q')), &mut state).unwrap();

        assert!(!state.should_quit);
        assert_eq!(state.form.title.text, "q");
    }

    #[test]
    fn test_help_overlay_swallows_keys_until_closed() {
        let temp = tempdir().unwrap();
        let mut state = state_with_task(temp.path());

        handle_key_event(key(KeyCode::Char('?')), &mut state).unwrap();
        assert!(state.show_help);
        handle_key_event(key(KeyCode::Char('d')), &mut state).unwrap();
        assert_eq!(state.mode, Mode::Navigate);
        handle_key_event(key(KeyCode::Esc), &mut state).unwrap();
        assert!(!state.show_help);
    }
}
