//! Paints the retained scene onto the terminal.
//!
//! Nothing here looks at the scoreboard state: what is on screen is exactly
//! what the reconciler left in the scene.

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, TRACK_LENGTH, TRACK_X_START};
use crate::ui::scene::{ElementId, Scene, Surface};
use crate::ui::slots::SlotMap;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, ICE_BLUE, MUTED_TEXT, TRACK};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, scene: &Scene, slots: &SlotMap, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = SceneView { scene, slots };

    frame.render_widget(
        Header::new(view.date(), app.companion_online()).widget(),
        header,
    );
    frame.render_widget(Clear, body);

    let [main, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(body);
    let on_events = view.events_shown();
    if on_events {
        draw_events(frame, &view, main);
    } else if view.visible(slots.game_list) {
        draw_game_list(frame, &view, main);
    } else if view.visible(slots.no_games) {
        draw_message(frame, main, &format!("No games scheduled for {}", view.date()));
    } else {
        draw_message(frame, main, "Loading games…");
    }
    draw_status(frame, &view, status);

    frame.render_widget(
        Footer::new(on_events, app.last_link_error()).widget(footer),
        footer,
    );
}

struct SceneView<'a> {
    scene: &'a Scene,
    slots: &'a SlotMap,
}

impl SceneView<'_> {
    fn text(&self, id: ElementId) -> &str {
        self.scene.text(id)
    }

    fn visible(&self, id: ElementId) -> bool {
        self.scene.is_visible(id)
    }

    fn date(&self) -> &str {
        if self.visible(self.slots.no_games) {
            self.text(self.slots.no_games_date)
        } else {
            self.text(self.slots.game_list_date)
        }
    }

    fn events_shown(&self) -> bool {
        self.slots
            .events
            .as_ref()
            .is_some_and(|events| self.visible(events.group))
    }

    /// Filled fraction of the progress track, read back from the bar span.
    fn progress_ratio(&self) -> f64 {
        let (x, _) = self.scene.span(self.slots.bar);
        let fill = x.saturating_sub(TRACK_X_START).min(TRACK_LENGTH);
        fill as f64 / TRACK_LENGTH as f64
    }
}

fn draw_game_list(frame: &mut Frame<'_>, view: &SceneView<'_>, area: Rect) {
    let name_style = Style::default().fg(HEADER_TEXT);
    let score_style = Style::default().fg(ICE_BLUE).add_modifier(Modifier::BOLD);
    let status_style = Style::default().fg(MUTED_TEXT);

    let rows: Vec<Row> = view
        .slots
        .games
        .iter()
        .enumerate()
        .filter(|(_, slot)| view.visible(slot.root))
        .map(|(index, slot)| {
            Row::new(vec![
                Cell::from(format!("{}.", index + 1)).style(status_style),
                Cell::from(view.text(slot.away_name).to_string()).style(name_style),
                Cell::from(view.text(slot.away_score).to_string()).style(score_style),
                Cell::from("@").style(status_style),
                Cell::from(view.text(slot.home_name).to_string()).style(name_style),
                Cell::from(view.text(slot.home_score).to_string()).style(score_style),
                Cell::from(view.text(slot.top).to_string()).style(status_style),
                Cell::from(view.text(slot.bottom).to_string()).style(status_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Min(8),
    ];
    let table = Table::new(rows, widths).column_spacing(1).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(" Games ", Style::default().fg(ICE_BLUE))),
    );
    frame.render_widget(table, area);
}

fn draw_events(frame: &mut Frame<'_>, view: &SceneView<'_>, area: Rect) {
    let Some(events) = &view.slots.events else {
        return;
    };
    let mut lines = Vec::new();
    for slot in events.slots.iter().filter(|slot| view.visible(slot.root)) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", view.text(slot.time)),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                view.text(slot.scorer).to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", view.text(slot.game_state)),
                Style::default().fg(ICE_BLUE),
            ),
        ]));
        let assists = view.text(slot.assists);
        if !assists.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{:<10}{assists}", ""),
                Style::default().fg(MUTED_TEXT),
            )));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No goals yet",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let title = format!(" {} ", view.text(events.header));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(title, Style::default().fg(ICE_BLUE))),
    );
    frame.render_widget(paragraph, area);
}

fn draw_message(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(message.to_string()))
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame<'_>, view: &SceneView<'_>, area: Rect) {
    if view.visible(view.slots.bar) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ICE_BLUE).bg(TRACK))
            .ratio(view.progress_ratio().clamp(0.0, 1.0));
        frame.render_widget(gauge, area);
    } else if view.visible(view.slots.updated) {
        let paragraph = Paragraph::new(view.text(view.slots.updated).to_string())
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Right);
        frame.render_widget(paragraph, area);
    }
}
