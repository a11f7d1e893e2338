// ABOUTME: Wizard controller owning the current step and the draft store
// Navigation is clamped at both ends; the only gates sit on the Next affordance

use tracing::info;

use super::draft::RegistrationDraft;
use super::password;
use super::patch::DraftAction;
use super::step::WizardStep;
use super::store::DraftStore;

/// Optional gates on top of the terms gate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvancePolicy {
    /// Block Next on the credentials step while the two password fields differ
    pub require_password_match: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceBlocker {
    TermsNotAccepted,
    PasswordMismatch,
}

impl AdvanceBlocker {
    pub fn message(&self) -> &'static str {
        match self {
            Self::TermsNotAccepted => {
                "Accept the seller agreement, privacy policy and data processing terms"
            }
            Self::PasswordMismatch => "Passwords do not match",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WizardController {
    current_step: WizardStep,
    store: DraftStore,
    policy: AdvancePolicy,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AdvancePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn draft(&self) -> &RegistrationDraft {
        self.store.draft()
    }

    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    /// Move forward one step; false at the last step
    pub fn advance(&mut self) -> bool {
        match self.current_step.next() {
            Some(next) => {
                info!(from = self.current_step.number(), to = next.number(), "Wizard advanced");
                self.current_step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step; false at the first step
    pub fn retreat(&mut self) -> bool {
        match self.current_step.previous() {
            Some(previous) => {
                info!(from = self.current_step.number(), to = previous.number(), "Wizard retreated");
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    /// Percentage of the way through, 0 on the first step and 100 on success
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let done = (self.current_step.number() - 1) as f64;
        let span = (WizardStep::total() - 1) as f64;
        done / span * 100.0
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_percent(&self) -> u16 {
        self.progress().round().clamp(0.0, 100.0) as u16
    }

    pub fn patch(&mut self, action: DraftAction) {
        self.store.dispatch(action);
    }

    /// What stops the current step's Next affordance, if anything
    pub fn blocker(&self) -> Option<AdvanceBlocker> {
        let draft = self.draft();
        match self.current_step {
            WizardStep::Terms if !draft.terms.can_proceed() => {
                Some(AdvanceBlocker::TermsNotAccepted)
            }
            WizardStep::AccountCredentials
                if self.policy.require_password_match
                    && !password::passwords_match(
                        &draft.account_credentials.password,
                        &draft.account_credentials.confirm_password,
                    ) =>
            {
                Some(AdvanceBlocker::PasswordMismatch)
            }
            _ => None,
        }
    }

    /// Advance only when nothing blocks the current step
    pub fn request_next(&mut self) -> Result<bool, AdvanceBlocker> {
        match self.blocker() {
            Some(blocker) => Err(blocker),
            None => Ok(self.advance()),
        }
    }

    pub fn can_create_account(&self) -> bool {
        self.current_step == WizardStep::Terms && self.draft().terms.can_proceed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::patch::{AccountCredentialsPatch, TermsPatch};
    use pretty_assertions::assert_eq;

    fn accept_terms(controller: &mut WizardController) {
        controller.patch(DraftAction::Terms(TermsPatch {
            seller_agreement: Some(true),
            privacy_policy: Some(true),
            data_processing: Some(true),
            ..TermsPatch::default()
        }));
    }

    fn go_to(controller: &mut WizardController, step: WizardStep) {
        while controller.current_step() != step {
            assert!(controller.advance());
        }
    }

    #[test]
    fn test_seven_advances_reach_success() {
        let mut controller = WizardController::new();
        for _ in 0..7 {
            assert!(controller.advance());
        }
        assert_eq!(controller.current_step(), WizardStep::Success);
        assert!(!controller.advance());
        assert_eq!(controller.current_step(), WizardStep::Success);
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut controller = WizardController::new();
        assert!(!controller.retreat());
        assert_eq!(controller.current_step(), WizardStep::PersonalInfo);
    }

    #[test]
    fn test_advance_then_retreat_round_trips() {
        let mut controller = WizardController::new();
        controller.advance();
        controller.advance();
        controller.retreat();
        assert_eq!(controller.current_step(), WizardStep::StoreSetup);
    }

    #[test]
    fn test_progress_endpoints() {
        let mut controller = WizardController::new();
        assert_eq!(controller.progress_percent(), 0);
        controller.advance();
        assert_eq!(controller.progress_percent(), 14);
        go_to(&mut controller, WizardStep::Terms);
        assert_eq!(controller.progress_percent(), 86);
        controller.advance();
        assert!((controller.progress() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_terms_gate_blocks_next() {
        let mut controller = WizardController::new();
        go_to(&mut controller, WizardStep::Terms);

        assert!(!controller.can_create_account());
        assert_eq!(controller.request_next(), Err(AdvanceBlocker::TermsNotAccepted));
        assert_eq!(controller.current_step(), WizardStep::Terms);

        accept_terms(&mut controller);
        assert!(controller.can_create_account());
        assert_eq!(controller.request_next(), Ok(true));
        assert_eq!(controller.current_step(), WizardStep::Success);
    }

    #[test]
    fn test_password_mismatch_only_blocks_when_required() {
        let mismatch = DraftAction::AccountCredentials(AccountCredentialsPatch {
            password: Some("one".to_string()),
            confirm_password: Some("two".to_string()),
            ..AccountCredentialsPatch::default()
        });

        let mut lenient = WizardController::new();
        go_to(&mut lenient, WizardStep::AccountCredentials);
        lenient.patch(mismatch.clone());
        assert_eq!(lenient.request_next(), Ok(true));

        let mut strict = WizardController::with_policy(AdvancePolicy {
            require_password_match: true,
        });
        go_to(&mut strict, WizardStep::AccountCredentials);
        strict.patch(mismatch);
        assert_eq!(strict.request_next(), Err(AdvanceBlocker::PasswordMismatch));
    }

    #[test]
    fn test_draft_survives_navigation() {
        let mut controller = WizardController::new();
        accept_terms(&mut controller);
        controller.advance();
        controller.retreat();
        assert!(controller.draft().terms.can_proceed());
    }
}
