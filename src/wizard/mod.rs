// ABOUTME: Wizard core: the draft, its reducer, step navigation and step-local rules

pub mod choices;
pub mod controller;
pub mod draft;
pub mod password;
pub mod patch;
pub mod regions;
pub mod step;
pub mod store;
pub mod verification;

pub use choices::Choice;
pub use controller::{AdvanceBlocker, AdvancePolicy, WizardController};
pub use draft::{FileHandle, RegistrationDraft, Section};
pub use patch::DraftAction;
pub use step::WizardStep;
pub use store::DraftStore;
pub use verification::{ChannelPhase, OtpChannel, OtpFlow, VerificationFlows};
