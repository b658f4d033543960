//! Application loop and key routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::model::{HumanRole, ObjectState};
use crate::session::Session;
use crate::storage::KeyValueStore;

use super::screens::{Focus, JournalScreen, cycle};

/// Whether the loop keeps going after a key press.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the TUI event loop until the user quits.
pub fn run<S: KeyValueStore>(session: &mut Session<S>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, session);
    ratatui::restore();
    result
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut DefaultTerminal,
    session: &mut Session<S>,
) -> io::Result<()> {
    let mut screen = JournalScreen::new();

    loop {
        terminal.draw(|frame| screen.render(frame, session))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(session, &mut screen, key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn handle_key<S: KeyValueStore>(
    session: &mut Session<S>,
    screen: &mut JournalScreen,
    key: KeyEvent,
) -> Flow {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Char('c') if ctrl => return Flow::Quit,
        KeyCode::Char('s') if ctrl => {
            // The submit affordance is inert while the draft is blank.
            if session.selection().can_submit()
                && let Ok(observation) = session.submit()
            {
                debug!(id = %observation.id, "submitted from draft");
                screen.reset_cursor();
            }
            return Flow::Continue;
        }
        KeyCode::Tab => {
            screen.focus_next();
            return Flow::Continue;
        }
        KeyCode::BackTab => {
            screen.focus_previous();
            return Flow::Continue;
        }
        _ => {}
    }

    match screen.focus() {
        Focus::ObjectState => {
            let current = session.selection().object_state();
            match key.code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Left | KeyCode::Char('h') => session
                    .selection_mut()
                    .set_object_state(cycle(&ObjectState::ALL, current, false)),
                KeyCode::Right | KeyCode::Char('l') => session
                    .selection_mut()
                    .set_object_state(cycle(&ObjectState::ALL, current, true)),
                _ => {}
            }
        }
        Focus::HumanRole => {
            let current = session.selection().human_role();
            match key.code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Left | KeyCode::Char('h') => session
                    .selection_mut()
                    .set_human_role(cycle(&HumanRole::ALL, current, false)),
                KeyCode::Right | KeyCode::Char('l') => session
                    .selection_mut()
                    .set_human_role(cycle(&HumanRole::ALL, current, true)),
                _ => {}
            }
        }
        Focus::Draft => {
            let mut draft = session.selection().draft().to_string();
            match key.code {
                KeyCode::Char(c) if !ctrl => draft.push(c),
                KeyCode::Enter => draft.push('\n'),
                KeyCode::Backspace => {
                    draft.pop();
                }
                _ => return Flow::Continue,
            }
            session.selection_mut().set_draft(draft);
        }
        Focus::History => {
            let len = session.journal().snapshot().len();
            match key.code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Up | KeyCode::Char('k') => screen.move_up(),
                KeyCode::Down | KeyCode::Char('j') => screen.move_down(len),
                KeyCode::Char('e') => screen.toggle_expanded(),
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = screen.selected_id(session.journal().snapshot()) {
                        session.remove(id);
                        screen.clamp_cursor(len.saturating_sub(1));
                    }
                }
                _ => {}
            }
        }
    }

    Flow::Continue
}
