// ABOUTME: Application state for the onboarding TUI and the async action runner
// Key events edit the focused field; collaborator calls are queued and run from App::tick

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::collaborators::{
    AccountReceipt, CollaboratorError, DemoOtpService, FilePicker, FileSlot, HttpSubmissionClient,
    LocalFilePicker, LocalSubmission, OtpService, SubmissionClient,
};
use crate::config::AppConfig;
use crate::panels::{panel_fields, FieldKind, FieldValue, PanelField};
use crate::wizard::regions::{self, REFERENCE_REGIONS};
use crate::wizard::{
    AdvancePolicy, DraftAction, OtpChannel, VerificationFlows, WizardController, WizardStep,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    SendCode(OtpChannel),
    VerifyCode(OtpChannel, String),
    SubmitRegistration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted(AccountReceipt),
    Failed(String),
}

pub struct AppState {
    pub wizard: WizardController,
    /// Index into the active panel's fields
    pub focused_field: usize,
    /// Highlighted row of the region checklist
    pub region_cursor: usize,
    /// Paths typed into file slots, kept until they resolve to a handle
    pub file_inputs: HashMap<FileSlot, String>,
    pub otp: VerificationFlows,
    /// Last hint returned by the code service, e.g. the demo code
    pub otp_hint: Option<String>,
    pub submission: SubmissionStatus,
    pub pending_async_action: Option<AsyncAction>,
    pub error_message: Option<String>,
    pub help_visible: bool,
    pub reveal_passwords: bool,
    pub should_quit: bool,
    file_picker: Box<dyn FilePicker + Send + Sync>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AdvancePolicy::default())
    }
}

impl AppState {
    pub fn new(policy: AdvancePolicy) -> Self {
        Self::with_file_picker(policy, Box::new(LocalFilePicker::new()))
    }

    pub fn with_file_picker(
        policy: AdvancePolicy,
        file_picker: Box<dyn FilePicker + Send + Sync>,
    ) -> Self {
        Self {
            wizard: WizardController::with_policy(policy),
            focused_field: 0,
            region_cursor: 0,
            file_inputs: HashMap::new(),
            otp: VerificationFlows::default(),
            otp_hint: None,
            submission: SubmissionStatus::Idle,
            pending_async_action: None,
            error_message: None,
            help_visible: false,
            reveal_passwords: false,
            should_quit: false,
            file_picker,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current_step()
    }

    pub fn fields(&self) -> Vec<PanelField> {
        panel_fields(self.current_step())
    }

    pub fn focused(&self) -> Option<PanelField> {
        self.fields().get(self.focused_field).copied()
    }

    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.focused().map(|field| field.spec().kind)
    }

    /// Whether printable keys should be typed into the focused field
    pub fn focused_takes_text(&self) -> bool {
        matches!(
            self.focused_kind(),
            Some(FieldKind::Text { .. } | FieldKind::File(_) | FieldKind::Otp(_))
        )
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
            self.region_cursor = 0;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + count - 1) % count;
            self.region_cursor = 0;
        }
    }

    fn on_step_changed(&mut self) {
        self.focused_field = 0;
        self.region_cursor = 0;
    }

    fn set_field(&mut self, field: PanelField, value: FieldValue) {
        if let Some(action) = field.patch(self.wizard.draft(), value) {
            self.wizard.patch(action);
        }
    }

    /// Next, or Create Seller Account on the terms step
    pub fn go_next(&mut self) {
        match self.current_step() {
            WizardStep::Success => {}
            WizardStep::Terms => self.request_submission(),
            _ => match self.wizard.request_next() {
                Ok(true) => self.on_step_changed(),
                Ok(false) => {}
                Err(blocker) => self.error_message = Some(blocker.message().to_string()),
            },
        }
    }

    pub fn go_previous(&mut self) {
        if self.current_step().is_terminal() {
            return;
        }
        if self.wizard.retreat() {
            self.on_step_changed();
        }
    }

    fn request_submission(&mut self) {
        if self.pending_async_action.is_some() || self.submission == SubmissionStatus::Submitting {
            return;
        }
        if let Some(blocker) = self.wizard.blocker() {
            self.error_message = Some(blocker.message().to_string());
            return;
        }
        if self.wizard.can_create_account() {
            self.submission = SubmissionStatus::Submitting;
            self.pending_async_action = Some(AsyncAction::SubmitRegistration);
        }
    }

    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused() else {
            return;
        };
        match field.spec().kind {
            FieldKind::Text { .. } => {
                let mut text = field.read(self.wizard.draft()).as_text().to_string();
                text.push(c);
                self.set_field(field, FieldValue::Text(text));
            }
            FieldKind::File(slot) => self.file_inputs.entry(slot).or_default().push(c),
            FieldKind::Otp(channel) => {
                let flow = self.otp.get_mut(channel);
                if c.is_ascii_digit() && flow.code_input.len() < 6 {
                    flow.code_input.push(c);
                }
            }
            FieldKind::Choice { .. } | FieldKind::Toggle | FieldKind::Regions => {}
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.focused() else {
            return;
        };
        match field.spec().kind {
            FieldKind::Text { .. } => {
                let mut text = field.read(self.wizard.draft()).as_text().to_string();
                if text.pop().is_some() {
                    self.set_field(field, FieldValue::Text(text));
                }
            }
            FieldKind::File(slot) => {
                if let Some(input) = self.file_inputs.get_mut(&slot) {
                    input.pop();
                }
            }
            FieldKind::Otp(channel) => {
                self.otp.get_mut(channel).code_input.pop();
            }
            FieldKind::Choice { .. } | FieldKind::Toggle | FieldKind::Regions => {}
        }
    }

    /// Left/Right: cycle a choice, or move through the region list
    pub fn cycle(&mut self, forward: bool) {
        let Some(field) = self.focused() else {
            return;
        };
        match field.spec().kind {
            FieldKind::Choice { options } => {
                let count = options.len();
                if count == 0 {
                    return;
                }
                let current = match field.read(self.wizard.draft()) {
                    FieldValue::Choice(index) => index,
                    _ => None,
                };
                let next = match (current, forward) {
                    (None, true) => 0,
                    (None, false) => count - 1,
                    (Some(index), true) => (index + 1) % count,
                    (Some(index), false) => (index + count - 1) % count,
                };
                self.set_field(field, FieldValue::Choice(Some(next)));
            }
            FieldKind::Regions => {
                let count = REFERENCE_REGIONS.len();
                self.region_cursor = if forward {
                    (self.region_cursor + 1) % count
                } else {
                    (self.region_cursor + count - 1) % count
                };
            }
            _ => {}
        }
    }

    /// Space: flip a toggle or the region under the cursor
    pub fn toggle(&mut self) {
        let Some(field) = self.focused() else {
            return;
        };
        match (field.spec().kind, field.read(self.wizard.draft())) {
            (FieldKind::Toggle, FieldValue::Flag(flag)) => {
                self.set_field(field, FieldValue::Flag(!flag));
            }
            (FieldKind::Regions, FieldValue::Regions(selected)) => {
                if let Some(name) = REFERENCE_REGIONS.get(self.region_cursor) {
                    let was_selected = selected.contains(*name);
                    self.wizard
                        .patch(regions::region_patch(&selected, name, !was_selected));
                }
            }
            (FieldKind::Choice { .. }, _) => self.cycle(true),
            _ => {}
        }
    }

    /// Enter: the focused field's primary action
    pub fn activate(&mut self) {
        if self.current_step().is_terminal() {
            self.should_quit = true;
            return;
        }
        let Some(field) = self.focused() else {
            return;
        };
        match field.spec().kind {
            FieldKind::File(slot) => self.attach_file(field, slot),
            FieldKind::Otp(channel) => self.advance_code_flow(channel),
            FieldKind::Toggle | FieldKind::Regions => self.toggle(),
            FieldKind::Text { .. } | FieldKind::Choice { .. } => self.focus_next(),
        }
    }

    /// Delete: clear the focused field
    pub fn clear(&mut self) {
        let Some(field) = self.focused() else {
            return;
        };
        match field.spec().kind {
            FieldKind::Text { .. } => self.set_field(field, FieldValue::Text(String::new())),
            FieldKind::Choice { .. } => self.set_field(field, FieldValue::Choice(None)),
            FieldKind::File(slot) => {
                self.file_inputs.remove(&slot);
                self.set_field(field, FieldValue::File(None));
            }
            FieldKind::Otp(channel) => self.otp.get_mut(channel).code_input.clear(),
            FieldKind::Toggle | FieldKind::Regions => {}
        }
    }

    fn attach_file(&mut self, field: PanelField, slot: FileSlot) {
        let input = self.file_inputs.get(&slot).cloned().unwrap_or_default();
        match self.file_picker.pick(slot, &input) {
            Ok(handle) => self.set_field(field, FieldValue::File(handle)),
            Err(e) => {
                warn!(slot = slot.label(), error = %e, "File not attached");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn advance_code_flow(&mut self, channel: OtpChannel) {
        let flow = self.otp.get_mut(channel);
        if flow.phase.is_pending() || self.pending_async_action.is_some() {
            return;
        }
        if let Some(code) = flow.begin_verify() {
            self.pending_async_action = Some(AsyncAction::VerifyCode(channel, code));
        } else if flow.begin_send() {
            self.pending_async_action = Some(AsyncAction::SendCode(channel));
        }
    }

    pub fn receipt(&self) -> Option<&AccountReceipt> {
        match &self.submission {
            SubmissionStatus::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }
}

pub struct App {
    pub state: AppState,
    otp: Arc<dyn OtpService>,
    submitter: Arc<dyn SubmissionClient>,
    verification_timeout: Duration,
    submission_timeout: Duration,
}

impl App {
    /// Wire up collaborators from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let otp: Arc<dyn OtpService> =
            Arc::new(DemoOtpService::new(config.verification.demo_code.clone()));
        let submitter: Arc<dyn SubmissionClient> = match &config.submission.endpoint {
            Some(endpoint) => {
                let client = HttpSubmissionClient::new(endpoint.clone(), config.submission_timeout())?;
                info!(endpoint = %client.endpoint(), "Submitting registrations over HTTP");
                Arc::new(client)
            }
            None => Arc::new(LocalSubmission),
        };

        Ok(Self::with_collaborators(
            AppState::new(config.advance_policy()),
            otp,
            submitter,
            config.verification_timeout(),
            config.submission_timeout(),
        ))
    }

    pub fn with_collaborators(
        state: AppState,
        otp: Arc<dyn OtpService>,
        submitter: Arc<dyn SubmissionClient>,
        verification_timeout: Duration,
        submission_timeout: Duration,
    ) -> Self {
        Self {
            state,
            otp,
            submitter,
            verification_timeout,
            submission_timeout,
        }
    }

    /// Run the pending collaborator call, if any
    pub async fn tick(&mut self) -> Result<()> {
        let Some(action) = self.state.pending_async_action.take() else {
            return Ok(());
        };
        info!(?action, "Processing async action");

        match action {
            AsyncAction::SendCode(channel) => self.send_code(channel).await,
            AsyncAction::VerifyCode(channel, code) => self.verify_code(channel, &code).await,
            AsyncAction::SubmitRegistration => self.submit().await,
        }
        Ok(())
    }

    fn timeout_error(limit: Duration) -> CollaboratorError {
        CollaboratorError::Timeout(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX))
    }

    async fn send_code(&mut self, channel: OtpChannel) {
        let outcome = tokio::time::timeout(self.verification_timeout, self.otp.send(channel))
            .await
            .unwrap_or_else(|_| Err(Self::timeout_error(self.verification_timeout)));

        let flow = self.state.otp.get_mut(channel);
        match outcome {
            Ok(ack) => {
                flow.on_sent();
                if ack.hint.is_some() {
                    self.state.otp_hint = ack.hint;
                }
            }
            Err(e) => {
                warn!(channel = %channel, error = %e, "Sending verification code failed");
                flow.on_failed(e.to_string());
            }
        }
    }

    async fn verify_code(&mut self, channel: OtpChannel, code: &str) {
        let outcome =
            tokio::time::timeout(self.verification_timeout, self.otp.verify(channel, code))
                .await
                .unwrap_or_else(|_| Err(Self::timeout_error(self.verification_timeout)));

        let flow = self.state.otp.get_mut(channel);
        match outcome {
            Ok(accepted) => {
                if let Some(patch) = flow.on_verified(channel, accepted) {
                    info!(channel = %channel, "Channel verified");
                    self.state.wizard.patch(DraftAction::Verification(patch));
                }
            }
            Err(e) => {
                warn!(channel = %channel, error = %e, "Verifying code failed");
                flow.on_failed(e.to_string());
            }
        }
    }

    async fn submit(&mut self) {
        let draft = self.state.wizard.draft().clone();
        let outcome = tokio::time::timeout(self.submission_timeout, self.submitter.submit(&draft))
            .await
            .unwrap_or_else(|_| Err(Self::timeout_error(self.submission_timeout)));

        match outcome {
            Ok(receipt) => {
                info!(account_id = %receipt.account_id, "Seller account created");
                self.state.submission = SubmissionStatus::Submitted(receipt);
                if self.state.wizard.advance() {
                    self.state.on_step_changed();
                }
            }
            Err(e) => {
                warn!(error = %e, "Registration submission failed");
                self.state.error_message = Some(format!("Submission failed: {e}"));
                self.state.submission = SubmissionStatus::Failed(e.to_string());
            }
        }
    }
}
