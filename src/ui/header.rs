use crate::stage::Stage;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LEMON_YELLOW, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, stage: Stage, complete: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(LEMON_YELLOW)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Lemonade", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Stage {}/4", stage.number()), text_style),
        ];
        if complete {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("✓ done", Style::default().fg(STATUS_OK)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
