// ABOUTME: Step panels as ordered lists of typed fields over their own draft section
// A field reads its value from the draft and turns an edited value into a single-field patch

pub mod credentials;
pub mod payment;
pub mod personal_info;
pub mod shipping;
pub mod store_setup;
pub mod terms;
pub mod verification;

use std::collections::BTreeSet;

use crate::collaborators::FileSlot;
use crate::wizard::{Choice, DraftAction, FileHandle, OtpChannel, RegistrationDraft, Section, WizardStep};

pub use credentials::CredentialsField;
pub use payment::PaymentField;
pub use personal_info::PersonalInfoField;
pub use shipping::ShippingField;
pub use store_setup::StoreSetupField;
pub use terms::TermsField;
pub use verification::VerificationField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text { masked: bool },
    /// Cycles through `options`; the stored index maps back to the choice enum
    Choice { options: Vec<&'static str> },
    Toggle,
    File(FileSlot),
    Regions,
    Otp(OtpChannel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    /// Display marker only
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    fn new(label: &'static str, kind: FieldKind, placeholder: &'static str) -> Self {
        Self {
            label,
            kind,
            required: false,
            placeholder,
        }
    }

    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, FieldKind::Text { masked: false }, placeholder)
    }

    pub fn masked(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, FieldKind::Text { masked: true }, placeholder)
    }

    pub fn choice<T: Choice>(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(
            label,
            FieldKind::Choice {
                options: T::labels(),
            },
            placeholder,
        )
    }

    pub fn toggle(label: &'static str) -> Self {
        Self::new(label, FieldKind::Toggle, "")
    }

    pub fn file(label: &'static str, slot: FileSlot) -> Self {
        Self::new(label, FieldKind::File(slot), slot.hint())
    }

    pub fn regions(label: &'static str) -> Self {
        Self::new(label, FieldKind::Regions, "")
    }

    pub fn otp(label: &'static str, channel: OtpChannel) -> Self {
        Self::new(label, FieldKind::Otp(channel), "Enter 6-digit code")
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A field's current value, shaped by its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<usize>),
    Flag(bool),
    File(Option<FileHandle>),
    Regions(BTreeSet<String>),
    Verified(bool),
}

impl FieldValue {
    pub fn choice<T: Choice>(value: Option<T>) -> Self {
        Self::Choice(value.map(|option| option.index()))
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_flag(self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    /// `Some(None)` clears the choice; `None` means the value had the wrong shape
    pub fn into_choice<T: Choice>(self) -> Option<Option<T>> {
        match self {
            Self::Choice(index) => Some(index.and_then(T::from_index)),
            _ => None,
        }
    }

    pub fn into_file(self) -> Option<Option<FileHandle>> {
        match self {
            Self::File(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn into_regions(self) -> Option<BTreeSet<String>> {
        match self {
            Self::Regions(regions) => Some(regions),
            _ => None,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }

    pub fn is_set(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Choice(index) => index.is_some(),
            Self::Flag(flag) | Self::Verified(flag) => *flag,
            Self::File(handle) => handle.is_some(),
            Self::Regions(regions) => !regions.is_empty(),
        }
    }
}

/// One field of one panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelField {
    PersonalInfo(PersonalInfoField),
    StoreSetup(StoreSetupField),
    Credentials(CredentialsField),
    Payment(PaymentField),
    Shipping(ShippingField),
    Verification(VerificationField),
    Terms(TermsField),
}

impl PanelField {
    pub fn section(&self) -> Section {
        match self {
            Self::PersonalInfo(_) => Section::PersonalInfo,
            Self::StoreSetup(_) => Section::StoreSetup,
            Self::Credentials(_) => Section::AccountCredentials,
            Self::Payment(_) => Section::PaymentInfo,
            Self::Shipping(_) => Section::ShippingPolicies,
            Self::Verification(_) => Section::Verification,
            Self::Terms(_) => Section::Terms,
        }
    }

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::PersonalInfo(field) => field.spec(),
            Self::StoreSetup(field) => field.spec(),
            Self::Credentials(field) => field.spec(),
            Self::Payment(field) => field.spec(),
            Self::Shipping(field) => field.spec(),
            Self::Verification(field) => field.spec(),
            Self::Terms(field) => field.spec(),
        }
    }

    /// Current value, read from this field's own section only
    pub fn read(&self, draft: &RegistrationDraft) -> FieldValue {
        match self {
            Self::PersonalInfo(field) => field.read(&draft.personal_info),
            Self::StoreSetup(field) => field.read(&draft.store_setup),
            Self::Credentials(field) => field.read(&draft.account_credentials),
            Self::Payment(field) => field.read(&draft.payment_info),
            Self::Shipping(field) => field.read(&draft.shipping_policies),
            Self::Verification(field) => field.read(&draft.verification),
            Self::Terms(field) => field.read(&draft.terms),
        }
    }

    /// Single-field patch setting this field to `value`.
    /// `None` when the value has the wrong shape or the field is not directly editable.
    pub fn patch(&self, draft: &RegistrationDraft, value: FieldValue) -> Option<DraftAction> {
        match self {
            Self::PersonalInfo(field) => field.patch(value).map(DraftAction::PersonalInfo),
            Self::StoreSetup(field) => field
                .patch(&draft.store_setup, value)
                .map(DraftAction::StoreSetup),
            Self::Credentials(field) => field.patch(value).map(DraftAction::AccountCredentials),
            Self::Payment(field) => field.patch(value).map(DraftAction::PaymentInfo),
            Self::Shipping(field) => field.patch(value).map(DraftAction::ShippingPolicies),
            Self::Verification(field) => field.patch(value).map(DraftAction::Verification),
            Self::Terms(field) => field.patch(value).map(DraftAction::Terms),
        }
    }
}

/// Fields of the panel shown for `step`, in display order
pub fn panel_fields(step: WizardStep) -> Vec<PanelField> {
    match step {
        WizardStep::PersonalInfo => PersonalInfoField::ALL
            .iter()
            .copied()
            .map(PanelField::PersonalInfo)
            .collect(),
        WizardStep::StoreSetup => StoreSetupField::ALL
            .iter()
            .copied()
            .map(PanelField::StoreSetup)
            .collect(),
        WizardStep::AccountCredentials => CredentialsField::ALL
            .iter()
            .copied()
            .map(PanelField::Credentials)
            .collect(),
        WizardStep::PaymentInfo => PaymentField::ALL
            .iter()
            .copied()
            .map(PanelField::Payment)
            .collect(),
        WizardStep::ShippingPolicies => ShippingField::ALL
            .iter()
            .copied()
            .map(PanelField::Shipping)
            .collect(),
        WizardStep::Verification => VerificationField::ALL
            .iter()
            .copied()
            .map(PanelField::Verification)
            .collect(),
        WizardStep::Terms => TermsField::ALL.iter().copied().map(PanelField::Terms).collect(),
        WizardStep::Success => Vec::new(),
    }
}
