// ABOUTME: Help overlay listing the wizard's keyboard shortcuts

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = super::centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Fields:").style(heading),
            ListItem::new("  Tab/↓        Next field"),
            ListItem::new("  Shift+Tab/↑  Previous field"),
            ListItem::new("  ←/→          Change selection or move through regions"),
            ListItem::new("  Space        Toggle checkbox or region"),
            ListItem::new("  Enter        Attach file, send or check code"),
            ListItem::new("  Backspace    Delete last character"),
            ListItem::new("  Delete       Clear field"),
            ListItem::new("  Ctrl+R       Show or hide passwords"),
            ListItem::new(""),
            ListItem::new("Steps:").style(heading),
            ListItem::new("  PgDn/Ctrl+N  Next step (Create Seller Account on the last)"),
            ListItem::new("  PgUp/Ctrl+P  Previous step"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  F1           Toggle this help (? also works off text fields)"),
            ListItem::new("  Esc          Quit"),
            ListItem::new("  Ctrl+C       Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press F1 or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
