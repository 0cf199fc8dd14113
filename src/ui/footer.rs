use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ←/→: Day │ 1-9 0 a-f: Game │ r: Refresh │ q: Quit";
const EVENT_HINTS: &str = " Esc: Back │ ←/→: Day │ q: Quit";

pub struct Footer<'a> {
    on_events: bool,
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(on_events: bool, error: Option<&'a str>) -> Self {
        Self { on_events, error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.on_events {
            EVENT_HINTS
        } else {
            LIST_HINTS
        };
        let version = format!("v{} ", VERSION);
        let error = self
            .error
            .map(|error| format!(" │ {error}"))
            .unwrap_or_default();

        // Calculate padding using char count, not byte count (for Unicode)
        let used = hints.chars().count() + error.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(error, Style::default().fg(STATUS_ERROR)),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
