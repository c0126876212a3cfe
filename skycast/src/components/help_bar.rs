//! Key hint line.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;

pub struct HelpBar;

impl Component for HelpBar {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let key = Style::default().fg(Color::Cyan).bold();
        let text = Style::default().fg(Color::DarkGray);
        let help = Line::from(vec![
            Span::styled(" type", key),
            Span::styled(" search  ", text),
            Span::styled("↑↓", key),
            Span::styled(" navigate  ", text),
            Span::styled("enter", key),
            Span::styled(" select/search  ", text),
            Span::styled("esc", key),
            Span::styled(" close  ", text),
            Span::styled("ctrl-c", key),
            Span::styled(" quit ", text),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
