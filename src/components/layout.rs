// ABOUTME: Top-level layout: the wizard fills the screen, help draws over it

use ratatui::prelude::*;

use super::{HelpComponent, WizardView};
use crate::app::AppState;

pub struct LayoutComponent {
    wizard: WizardView,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            wizard: WizardView::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.size();
        self.wizard.render(frame, area, state);

        if state.help_visible {
            self.help.render(frame, area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::regions;
    use ratatui::backend::TestBackend;

    fn rendered(state: &mut AppState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut layout = LayoutComponent::new();
        terminal
            .draw(|frame| layout.render(frame, state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_first_step_header() {
        let mut state = AppState::default();
        let screen = rendered(&mut state);
        assert!(screen.contains("Step 1 of 7"));
        assert!(screen.contains("0% Complete"));
        assert!(screen.contains("Full Legal Name"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut state = AppState::default();
        state.help_visible = true;
        let screen = rendered(&mut state);
        assert!(screen.contains("Press F1 or Esc to close"));
    }

    #[test]
    fn test_success_lists_regions_in_reference_order() {
        let mut state = AppState::default();
        for name in ["Japan", "Canada"] {
            let current = state.wizard.draft().shipping_policies.shipping_regions.clone();
            state.wizard.patch(regions::region_patch(&current, name, true));
        }
        while state.wizard.advance() {}

        let screen = rendered(&mut state);
        assert!(screen.contains("Shipping to: Canada, Japan"));
    }

    #[test]
    fn test_success_omits_empty_region_line() {
        let mut state = AppState::default();
        while state.wizard.advance() {}
        assert!(!rendered(&mut state).contains("Shipping to:"));
    }
}
