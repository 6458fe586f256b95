use crate::resources::{resolve_text, ResourceLookup};
use crate::stage::Stage;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::theme::{
    BUTTON_DISABLED, BUTTON_TEXT, GLOBAL_BORDER, HEADER_TEXT, LEAF_GREEN, LEMON_YELLOW,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = app.regions_for(area);
    let controller = app.controller();
    let state = controller.state();
    let descriptor = controller.describe();
    let resources = app.resources();

    frame.render_widget(
        Header::new().widget(state.stage, state.complete),
        regions.header,
    );

    // Image panel: the tap target. Bordered in yellow while it still wants taps.
    let alt_text = resolve_text(resources, descriptor.alt_text_key);
    let art: Vec<Line> = resources
        .image(descriptor.image_key)
        .unwrap_or_default()
        .iter()
        .map(|row| Line::from(*row))
        .collect();
    let border_color = if state.complete {
        GLOBAL_BORDER
    } else {
        LEMON_YELLOW
    };
    let mut image_block = Block::default()
        .title(Span::styled(
            format!(" {alt_text} "),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if state.stage == Stage::Squeeze && !state.complete {
        image_block = image_block.title_bottom(
            Line::from(format!(" squeezes left: {} ", state.remaining_taps))
                .alignment(Alignment::Center),
        );
    }
    frame.render_widget(Clear, regions.image);
    frame.render_widget(
        Paragraph::new(art)
            .style(Style::default().fg(LEAF_GREEN))
            .alignment(Alignment::Center)
            .block(image_block),
        regions.image,
    );

    let caption = resolve_text(resources, descriptor.text_key);
    frame.render_widget(
        Paragraph::new(Line::from(caption))
            .style(Style::default().fg(HEADER_TEXT))
            .alignment(Alignment::Center),
        regions.caption,
    );

    let (button_style, border_style) = if descriptor.button_enabled {
        (
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(LEMON_YELLOW)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(LEMON_YELLOW),
        )
    } else {
        (
            Style::default()
                .fg(BUTTON_DISABLED)
                .add_modifier(Modifier::DIM),
            Style::default().fg(BUTTON_DISABLED),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(descriptor.button_label))
            .style(button_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            ),
        regions.button,
    );

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}
