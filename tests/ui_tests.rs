// ABOUTME: UI testing framework for the wizard using a headless terminal backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use seller_onboarding::app::{App, AppState, EventHandler};
use seller_onboarding::collaborators::{DemoOtpService, LocalSubmission};
use seller_onboarding::components::LayoutComponent;
use seller_onboarding::wizard::WizardStep;

pub struct UITestFramework {
    app: App,
    terminal: Terminal<TestBackend>,
    layout: LayoutComponent,
}

impl UITestFramework {
    pub fn new() -> Self {
        Self::with_size(120, 40) // Standard terminal size
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).unwrap();
        let app = App::with_collaborators(
            AppState::default(),
            Arc::new(DemoOtpService::default()),
            Arc::new(LocalSubmission),
            Duration::from_secs(1),
            Duration::from_secs(1),
        );

        Self {
            app,
            terminal,
            layout: LayoutComponent::new(),
        }
    }

    /// Simulate a key press and process the resulting event
    pub fn press_key(&mut self, key_code: KeyCode) {
        self.press(KeyEvent::new(key_code, KeyModifiers::NONE));
    }

    pub fn press_ctrl(&mut self, c: char) {
        self.press(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn press(&mut self, key_event: KeyEvent) {
        if let Some(event) = EventHandler::handle_key_event(key_event, &mut self.app.state) {
            EventHandler::process_event(event, &mut self.app.state);
        }
    }

    /// Simulate typing a string of characters
    pub fn type_string(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(KeyCode::Char(ch));
        }
    }

    pub fn press_times(&mut self, key_code: KeyCode, times: usize) {
        for _ in 0..times {
            self.press_key(key_code);
        }
    }

    /// Process any pending async actions
    pub async fn process_async(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        match timeout(Duration::from_secs(5), self.app.tick()).await {
            Ok(result) => result.map_err(std::convert::Into::into),
            Err(_) => Err("Timeout waiting for async operation".into()),
        }
    }

    /// Render the current state and return the buffer for inspection
    pub fn render(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        self.terminal.draw(|frame| {
            self.layout.render(frame, &mut self.app.state);
        })?;

        let buffer = self.terminal.backend().buffer().clone();
        Ok(buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
    }

    /// Render and split the buffer into screen rows
    pub fn render_rows(&mut self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        self.render()?;
        let buffer = self.terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        Ok(buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
            .collect())
    }

    pub fn current_step(&self) -> WizardStep {
        self.app.state.current_step()
    }

    pub fn state(&self) -> &AppState {
        &self.app.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initial_screen() {
        let mut ui = UITestFramework::new();
        let screen = ui.render().unwrap();

        assert!(screen.contains("Personal & Business Info"));
        assert!(screen.contains("Step 1 of 7"));
        assert!(screen.contains("0% Complete"));
        assert!(screen.contains("Full Legal Name"));
    }

    #[tokio::test]
    async fn test_typing_lands_in_draft() {
        let mut ui = UITestFramework::new();
        ui.type_string("Ada Lovelace");
        ui.press_key(KeyCode::Tab);
        ui.type_string("ada@example.com");

        let info = &ui.state().wizard.draft().personal_info;
        assert_eq!(info.full_name, "Ada Lovelace");
        assert_eq!(info.email, "ada@example.com");

        let screen = ui.render().unwrap();
        assert!(screen.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn test_navigation_is_clamped() {
        let mut ui = UITestFramework::new();
        ui.press_key(KeyCode::PageUp);
        assert_eq!(ui.current_step(), WizardStep::PersonalInfo);

        ui.press_times(KeyCode::PageDown, 2);
        assert_eq!(ui.current_step(), WizardStep::AccountCredentials);
        ui.press_ctrl('p');
        assert_eq!(ui.current_step(), WizardStep::StoreSetup);

        let screen = ui.render().unwrap();
        assert!(screen.contains("Step 2 of 7"));
        assert!(screen.contains("14% Complete"));
    }

    #[tokio::test]
    async fn test_password_strength_and_mismatch() {
        let mut ui = UITestFramework::new();
        ui.press_times(KeyCode::PageDown, 2);
        ui.press_key(KeyCode::Tab);
        ui.type_string("Abcdefgh1!");

        let screen = ui.render().unwrap();
        assert!(screen.contains("Strong"));
        assert!(!screen.contains("Abcdefgh1!"));

        ui.press_key(KeyCode::Tab);
        ui.type_string("Abc");
        let screen = ui.render().unwrap();
        assert!(screen.contains("Passwords do not match"));

        // Mismatch never blocks by default
        ui.press_key(KeyCode::PageDown);
        assert_eq!(ui.current_step(), WizardStep::PaymentInfo);
    }

    #[tokio::test]
    async fn test_reveal_passwords() {
        let mut ui = UITestFramework::new();
        ui.press_times(KeyCode::PageDown, 2);
        ui.press_key(KeyCode::Tab);
        ui.type_string("hunter22");
        ui.press_ctrl('r');

        let screen = ui.render().unwrap();
        assert!(screen.contains("hunter22"));
    }

    #[tokio::test]
    async fn test_create_account_disabled_until_terms_accepted() {
        let mut ui = UITestFramework::new();
        ui.press_times(KeyCode::PageDown, 6);
        assert_eq!(ui.current_step(), WizardStep::Terms);
        assert!(ui.render().unwrap().contains("Create Seller Account"));

        ui.press_key(KeyCode::PageDown);
        ui.process_async().await.unwrap();
        assert_eq!(ui.current_step(), WizardStep::Terms);
        assert!(ui.render().unwrap().contains("Accept the seller agreement"));

        // Optional consents do not open the gate
        ui.press_times(KeyCode::Tab, 3);
        ui.press_key(KeyCode::Char(' '));
        ui.press_key(KeyCode::Tab);
        ui.press_key(KeyCode::Char(' '));
        ui.press_key(KeyCode::PageDown);
        ui.process_async().await.unwrap();
        assert_eq!(ui.current_step(), WizardStep::Terms);
    }

    #[tokio::test]
    async fn test_full_registration_reaches_success() {
        let mut ui = UITestFramework::new();
        ui.type_string("Grace Hopper");
        ui.press_key(KeyCode::Tab);
        ui.type_string("grace@example.com");

        ui.press_times(KeyCode::PageDown, 6);
        ui.press_key(KeyCode::Char(' '));
        ui.press_key(KeyCode::Tab);
        ui.press_key(KeyCode::Char(' '));
        ui.press_key(KeyCode::Tab);
        ui.press_key(KeyCode::Char(' '));
        assert!(ui.state().wizard.can_create_account());

        ui.press_key(KeyCode::PageDown);
        ui.process_async().await.unwrap();
        assert_eq!(ui.current_step(), WizardStep::Success);

        let screen = ui.render().unwrap();
        assert!(screen.contains("Welcome to Our Marketplace!"));
        assert!(screen.contains("Grace Hopper"));
        assert!(screen.contains("Account ID"));
        assert!(screen.contains("100% Complete"));

        ui.press_key(KeyCode::Enter);
        assert!(ui.state().should_quit);
    }

    #[tokio::test]
    async fn test_phone_verification_with_demo_code() {
        let mut ui = UITestFramework::new();
        ui.press_times(KeyCode::PageDown, 5);
        assert_eq!(ui.current_step(), WizardStep::Verification);

        ui.press_times(KeyCode::Tab, 4);
        ui.press_key(KeyCode::Enter);
        ui.process_async().await.unwrap();
        assert!(ui.render().unwrap().contains("Demo code: 123456"));

        ui.type_string("123456");
        ui.press_key(KeyCode::Enter);
        ui.process_async().await.unwrap();

        assert!(ui.state().wizard.draft().verification.phone_verified);
        assert!(!ui.state().wizard.draft().verification.email_verified);
        assert!(ui.render().unwrap().contains("Verified"));
    }

    #[tokio::test]
    async fn test_shipping_regions_by_keyboard() {
        let mut ui = UITestFramework::new();
        ui.press_times(KeyCode::PageDown, 4);
        ui.press_key(KeyCode::Char(' '));
        ui.press_key(KeyCode::Right);
        ui.press_key(KeyCode::Char(' '));

        let regions = &ui.state().wizard.draft().shipping_policies.shipping_regions;
        assert!(regions.contains("United States"));
        assert!(regions.contains("Canada"));
        assert!(ui.render().unwrap().contains("(2 selected)"));
    }

    #[tokio::test]
    async fn test_help_toggle() {
        let mut ui = UITestFramework::new();
        ui.press_times(KeyCode::PageDown, 6);

        ui.press_key(KeyCode::Char('?'));
        assert!(ui.state().help_visible);
        ui.press_key(KeyCode::Esc);
        assert!(!ui.state().help_visible);

        ui.press_key(KeyCode::F(1));
        assert!(ui.state().help_visible);
        assert!(ui.render().unwrap().contains("Press F1 or Esc to close"));

        ui.press_key(KeyCode::Esc);
        assert!(!ui.state().help_visible);
        assert!(!ui.state().should_quit);
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let mut ui = UITestFramework::new();
        ui.press_key(KeyCode::Esc);
        assert!(ui.state().should_quit);
    }

    #[tokio::test]
    async fn test_help_opens_from_text_field() {
        let mut ui = UITestFramework::new();
        ui.type_string("Ada?");
        assert!(!ui.state().help_visible);
        assert_eq!(ui.state().wizard.draft().personal_info.full_name, "Ada?");

        ui.press_key(KeyCode::F(1));
        assert!(ui.state().help_visible);
        assert!(ui.render().unwrap().contains("Press F1 or Esc to close"));

        ui.press_key(KeyCode::F(1));
        assert!(!ui.state().help_visible);
        assert!(ui.render().unwrap().contains("[F1] Help"));
    }

    #[tokio::test]
    async fn test_focused_field_stays_visible_on_small_terminal() {
        let mut ui = UITestFramework::with_size(80, 24);
        ui.press_times(KeyCode::PageDown, 4);
        assert_eq!(ui.current_step(), WizardStep::ShippingPolicies);

        // Detailed Return Policy, then a value far wider than the panel
        ui.press_times(KeyCode::Tab, 6);
        ui.type_string(&"x".repeat(400));
        // Response Time Commitment is the last field
        ui.press_times(KeyCode::Tab, 5);

        let rows = ui.render_rows().unwrap();
        assert!(
            rows.iter().any(|row| row.contains("▶ Response Time Commitment")),
            "focused field is off screen:\n{}",
            rows.join("\n")
        );
    }

    #[tokio::test]
    async fn test_region_grid_fits_narrow_terminal() {
        let mut ui = UITestFramework::with_size(80, 24);
        ui.press_times(KeyCode::PageDown, 4);

        let rows = ui.render_rows().unwrap();
        for name in seller_onboarding::wizard::regions::REFERENCE_REGIONS {
            let cell = format!("[ ] {name}");
            assert!(
                rows.iter().any(|row| row.contains(&cell)),
                "{cell} missing:\n{}",
                rows.join("\n")
            );
        }
        // Three cells per row on an 80-column terminal
        let grid_rows = rows.iter().filter(|row| row.contains("[ ]")).count();
        assert_eq!(grid_rows, 6);
    }
}
