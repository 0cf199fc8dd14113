use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, ICE_BLUE, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    date: &'a str,
    companion_online: bool,
}

impl<'a> Header<'a> {
    pub fn new(date: &'a str, companion_online: bool) -> Self {
        Self {
            date,
            companion_online,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = if self.companion_online {
            ("● live feed", STATUS_OK)
        } else {
            ("● feed offline", STATUS_ERROR)
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "RinkWatch",
                Style::default().fg(ICE_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.date.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
