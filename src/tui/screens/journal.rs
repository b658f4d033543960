//! Journal screen: prompt, classification switches, draft, reference panel
//! and history on a single page.

use jiff::tz::TimeZone;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use uuid::Uuid;

use crate::catalog::FORBIDDEN_ACTIONS;
use crate::journal::Hydration;
use crate::model::{HumanRole, ObjectState, Observation};
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Lines of content shown per history entry while collapsed.
const COLLAPSED_LINES: usize = 2;

const DRAFT_PLACEHOLDER: &str = "Describe the facts of the current state: symptoms, deviations...";

/// Which part of the page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ObjectState,
    HumanRole,
    Draft,
    History,
}

const FOCUS_ORDER: [Focus; 4] = [
    Focus::ObjectState,
    Focus::HumanRole,
    Focus::Draft,
    Focus::History,
];

/// The neighbour of `current` in `all`, wrapping at both ends.
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let Some(i) = all.iter().position(|x| *x == current) else {
        return current;
    };
    let n = all.len();
    let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
    all[next]
}

#[derive(Debug, Default)]
pub struct JournalScreen {
    focus: Focus,
    cursor: usize,
    expanded: bool,
}

impl JournalScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(&FOCUS_ORDER, self.focus, true);
    }

    pub fn focus_previous(&mut self) {
        self.focus = cycle(&FOCUS_ORDER, self.focus, false);
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Back to the newest entry.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Keeps the cursor inside a history of `len` entries.
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// The id under the history cursor.
    pub fn selected_id(&self, log: &[Observation]) -> Option<Uuid> {
        log.get(self.cursor).map(|o| o.id)
    }

    pub fn render<S: KeyValueStore>(&self, frame: &mut Frame, session: &Session<S>) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // prompt
            Constraint::Min(0),    // body
            Constraint::Length(1), // status
        ])
        .split(area);

        let body = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        #[allow(clippy::cast_possible_truncation)] // A handful of fixed lines.
        let reference_height = FORBIDDEN_ACTIONS.len() as u16 + 2;

        let left = Layout::vertical([
            Constraint::Length(4), // object state
            Constraint::Length(4), // human role
            Constraint::Min(5),    // draft
        ])
        .split(body[0]);
        let right = Layout::vertical([
            Constraint::Length(reference_height),
            Constraint::Min(0),
        ])
        .split(body[1]);

        let prompt = Paragraph::new(Line::from(Span::styled(
            format!("«{}»", session.prompt()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(prompt, chunks[0]);

        let selection = session.selection();
        Switch {
            title: "Object state",
            options: &ObjectState::ALL,
            active: selection.object_state(),
            label: ObjectState::label,
            caption: ObjectState::caption,
        }
        .render(frame, left[0], self.focus == Focus::ObjectState);
        Switch {
            title: "Human role",
            options: &HumanRole::ALL,
            active: selection.human_role(),
            label: HumanRole::label,
            caption: HumanRole::caption,
        }
        .render(frame, left[1], self.focus == Focus::HumanRole);

        self.render_draft(frame, left[2], session);
        render_forbidden_actions(frame, right[0]);
        self.render_history(frame, right[1], session.journal().snapshot());
        self.render_status(frame, chunks[2], session);
    }

    fn render_draft<S: KeyValueStore>(&self, frame: &mut Frame, area: Rect, session: &Session<S>) {
        let focused = self.focus == Focus::Draft;
        let selection = session.selection();

        let text = if selection.draft().is_empty() && !focused {
            Text::styled(DRAFT_PLACEHOLDER, muted())
        } else if focused {
            Text::raw(format!("{}▏", selection.draft()))
        } else {
            Text::raw(selection.draft())
        };

        let submit_style = if selection.can_submit() {
            highlight()
        } else {
            muted()
        };
        let block = Block::bordered()
            .title(" New observation ")
            .title_bottom(
                Line::from(Span::styled(" ctrl-s record ", submit_style)).right_aligned(),
            )
            .border_style(border(focused))
            .padding(Padding::horizontal(1));

        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: false }).block(block),
            area,
        );
    }

    fn render_history(&self, frame: &mut Frame, area: Rect, log: &[Observation]) {
        let focused = self.focus == Focus::History;
        let title = if self.expanded {
            " History (expanded) "
        } else {
            " History "
        };
        let block = Block::bordered()
            .title(title)
            .border_style(border(focused))
            .padding(Padding::horizontal(1));

        if log.is_empty() {
            let empty =
                Paragraph::new(Span::styled("No entries yet.", muted())).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = log
            .iter()
            .map(|obs| ListItem::new(entry_text(obs, self.expanded)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(if focused {
                highlight()
            } else {
                Style::default()
            })
            .highlight_symbol("› ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_status<S: KeyValueStore>(&self, frame: &mut Frame, area: Rect, session: &Session<S>) {
        let journal = session.journal();

        let line = if let Some(err) = journal.last_persist_error() {
            Line::from(Span::styled(
                format!(" not saved to disk: {err}"),
                Style::default().fg(Color::Red),
            ))
        } else if let Hydration::Recovered(err) = journal.hydration()
            && journal.snapshot().is_empty()
        {
            Line::from(Span::styled(
                format!(" previous journal unreadable, started empty: {err}"),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            let keys = match self.focus {
                Focus::ObjectState | Focus::HumanRole => " ←→ choose  tab next  q quit",
                Focus::Draft => " type to write  ctrl-s record  tab next  esc quit",
                Focus::History => " ↑↓ move  d delete  e expand  tab next  q quit",
            };
            Line::from(Span::styled(keys, muted()))
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// One row of mutually exclusive options with the active one's caption.
struct Switch<T: 'static> {
    title: &'static str,
    options: &'static [T],
    active: T,
    label: fn(T) -> &'static str,
    caption: fn(T) -> &'static str,
}

impl<T: Copy + PartialEq> Switch<T> {
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let mut spans = Vec::with_capacity(self.options.len() * 2);
        for &option in self.options {
            let style = if option == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", (self.label)(option)), style));
            spans.push(Span::raw(" "));
        }

        let text = vec![
            Line::from(spans),
            Line::from(Span::styled((self.caption)(self.active), muted())),
        ];
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(border(focused))
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

fn render_forbidden_actions(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = FORBIDDEN_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            Line::from(vec![
                Span::styled(format!("{:02}  ", i + 1), muted()),
                Span::styled(*action, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let block = Block::bordered()
        .title(Span::styled(
            " Forbidden actions ",
            Style::default().fg(Color::Red),
        ))
        .border_style(muted())
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Header line with both classifications and local time, then the content.
fn entry_text(obs: &Observation, expanded: bool) -> Text<'static> {
    let when = obs
        .timestamp
        .to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M")
        .to_string();

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("[{}]", obs.object_state.label()), muted()),
        Span::raw(" "),
        Span::styled(format!("[{}]", obs.human_role.label()), muted()),
        Span::raw("  "),
        Span::styled(when, muted()),
    ])];

    let limit = if expanded { usize::MAX } else { COLLAPSED_LINES };
    let mut content = obs.content.lines();
    lines.extend(
        content
            .by_ref()
            .take(limit)
            .map(|l| Line::raw(l.to_string())),
    );
    if content.next().is_some() {
        lines.push(Line::styled("…", muted()));
    }
    lines.push(Line::default());

    Text::from(lines)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn highlight() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn border(focused: bool) -> Style {
    if focused { highlight() } else { muted() }
}
