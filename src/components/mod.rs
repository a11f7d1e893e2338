// ABOUTME: UI components for the onboarding TUI: the wizard screen, help overlay and layout

pub mod help;
pub mod layout;
pub mod wizard_view;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use wizard_view::WizardView;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rectangle centered in `r`, sized as a percentage of it
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
