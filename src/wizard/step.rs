// ABOUTME: The eight wizard steps in order, from personal info to the success screen
// Navigation never fails: moving past either end yields None and the caller stays put

use super::draft::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    StoreSetup,
    AccountCredentials,
    PaymentInfo,
    ShippingPolicies,
    Verification,
    Terms,
    Success,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::PersonalInfo,
            Self::StoreSetup,
            Self::AccountCredentials,
            Self::PaymentInfo,
            Self::ShippingPolicies,
            Self::Verification,
            Self::Terms,
            Self::Success,
        ]
    }

    /// Step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::PersonalInfo => 1,
            Self::StoreSetup => 2,
            Self::AccountCredentials => 3,
            Self::PaymentInfo => 4,
            Self::ShippingPolicies => 5,
            Self::Verification => 6,
            Self::Terms => 7,
            Self::Success => 8,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::all().get(index))
            .copied()
    }

    /// Total number of steps, success screen included
    pub fn total() -> usize {
        8
    }

    /// Steps shown in the progress header; the success screen is not counted
    pub fn visible_total() -> usize {
        7
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal & Business Info",
            Self::StoreSetup => "Store Setup",
            Self::AccountCredentials => "Account Credentials",
            Self::PaymentInfo => "Payment & Tax Info",
            Self::ShippingPolicies => "Shipping & Policies",
            Self::Verification => "Verification",
            Self::Terms => "Terms & Agreements",
            Self::Success => "Success",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Tell us about yourself and your business",
            Self::StoreSetup => "Brand your storefront",
            Self::AccountCredentials => "Secure your seller account",
            Self::PaymentInfo => "How you get paid and how you are taxed",
            Self::ShippingPolicies => "Where you ship and how returns work",
            Self::Verification => "Confirm your identity and contact details",
            Self::Terms => "Review and accept the seller agreements",
            Self::Success => "Your seller account has been created",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::StoreSetup),
            Self::StoreSetup => Some(Self::AccountCredentials),
            Self::AccountCredentials => Some(Self::PaymentInfo),
            Self::PaymentInfo => Some(Self::ShippingPolicies),
            Self::ShippingPolicies => Some(Self::Verification),
            Self::Verification => Some(Self::Terms),
            Self::Terms => Some(Self::Success),
            Self::Success => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::StoreSetup => Some(Self::PersonalInfo),
            Self::AccountCredentials => Some(Self::StoreSetup),
            Self::PaymentInfo => Some(Self::AccountCredentials),
            Self::ShippingPolicies => Some(Self::PaymentInfo),
            Self::Verification => Some(Self::ShippingPolicies),
            Self::Terms => Some(Self::Verification),
            Self::Success => Some(Self::Terms),
        }
    }

    /// The draft section this step edits; the success screen owns none
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::PersonalInfo => Some(Section::PersonalInfo),
            Self::StoreSetup => Some(Section::StoreSetup),
            Self::AccountCredentials => Some(Section::AccountCredentials),
            Self::PaymentInfo => Some(Section::PaymentInfo),
            Self::ShippingPolicies => Some(Section::ShippingPolicies),
            Self::Verification => Some(Section::Verification),
            Self::Terms => Some(Section::Terms),
            Self::Success => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }
}
