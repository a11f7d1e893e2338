// ABOUTME: The accumulated registration draft collected across all wizard steps
// Every section exists from creation with empty defaults; panels only ever patch their own section

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use super::choices::{
    AccountType, BusinessType, Currency, DeliveryTime, EmployeeCount, PackagingType,
    PaymentFrequency, PaymentMethod, RefundMethod, ResponseTime, ReturnShipping, ReturnWindow,
    SalesTaxRegistration, SecurityQuestion, ServiceHours, ShippingOption, StoreCategory,
    TaxClassification,
};

/// Opaque reference to a file chosen through the file collaborator.
/// The wizard stores it as-is and never reads the file behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// Display name (file name component)
    pub name: String,
    /// Location the picker resolved
    pub path: PathBuf,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Names of the data-carrying sections of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PersonalInfo,
    StoreSetup,
    AccountCredentials,
    PaymentInfo,
    ShippingPolicies,
    Verification,
    Terms,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personalInfo",
            Self::StoreSetup => "storeSetup",
            Self::AccountCredentials => "accountCredentials",
            Self::PaymentInfo => "paymentInfo",
            Self::ShippingPolicies => "shippingPolicies",
            Self::Verification => "verification",
            Self::Terms => "terms",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub business_type: Option<BusinessType>,
    pub tax_id: String,
    pub website: String,
    pub business_registration_number: String,
    /// Free text, the form never parses it
    pub year_established: String,
    pub employee_count: Option<EmployeeCount>,
    pub business_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMediaLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSetup {
    pub store_name: String,
    pub store_description: String,
    pub store_category: Option<StoreCategory>,
    pub store_logo: Option<FileHandle>,
    pub store_banner: Option<FileHandle>,
    pub return_policy: String,
    pub customer_service_hours: String,
    pub social_media_links: SocialMediaLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountCredentials {
    pub username: String,
    pub password: String,
    /// Only used for the on-screen match check, never leaves the process
    #[serde(skip)]
    pub confirm_password: String,
    pub security_question: Option<SecurityQuestion>,
    pub security_answer: String,
    pub two_factor_auth: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentInfo {
    pub bank_account: String,
    pub bank_name: String,
    pub account_holder: String,
    pub tax_id_number: String,
    pub payment_method: Option<PaymentMethod>,
    pub swift_code: String,
    pub routing_number: String,
    pub payment_frequency: Option<PaymentFrequency>,
    pub account_type: Option<AccountType>,
    pub minimum_payout: String,
    pub currency: Option<Currency>,
    pub tax_classification: Option<TaxClassification>,
    pub vat_number: String,
    pub sales_tax_registration: Option<SalesTaxRegistration>,
    pub w9_completed: bool,
    pub tax_compliance: bool,
    pub hold_payments: bool,
    pub automatic_tax: bool,
    pub special_instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingPolicies {
    /// Set semantics; ordering carries no meaning
    pub shipping_regions: BTreeSet<String>,
    pub shipping_options: Option<ShippingOption>,
    pub return_policy: String,
    pub delivery_time: Option<DeliveryTime>,
    pub packaging_type: Option<PackagingType>,
    pub international_shipping: bool,
    pub free_shipping_threshold: String,
    pub return_window: Option<ReturnWindow>,
    pub return_shipping: Option<ReturnShipping>,
    pub refund_method: Option<RefundMethod>,
    pub customer_service_hours: Option<ServiceHours>,
    pub response_time: Option<ResponseTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Verification {
    pub business_license: Option<FileHandle>,
    pub identity_proof: Option<FileHandle>,
    pub phone_verified: bool,
    pub email_verified: bool,
    pub address_proof: Option<FileHandle>,
    pub tax_certificate: Option<FileHandle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Terms {
    pub seller_agreement: bool,
    pub privacy_policy: bool,
    pub newsletter: bool,
    pub marketing_emails: bool,
    pub data_processing: bool,
}

impl Terms {
    /// The three mandatory consents; newsletter and marketing emails are optional
    pub fn can_proceed(&self) -> bool {
        self.seller_agreement && self.privacy_policy && self.data_processing
    }
}

/// Everything the wizard collects, one sub-record per data step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub personal_info: PersonalInfo,
    pub store_setup: StoreSetup,
    pub account_credentials: AccountCredentials,
    pub payment_info: PaymentInfo,
    pub shipping_policies: ShippingPolicies,
    pub verification: Verification,
    pub terms: Terms,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_draft_has_every_section_defaulted() {
        let draft = RegistrationDraft::default();
        assert_eq!(draft.personal_info.full_name, "");
        assert_eq!(draft.personal_info.business_type, None);
        assert!(draft.store_setup.store_logo.is_none());
        assert!(!draft.account_credentials.two_factor_auth);
        assert!(draft.shipping_policies.shipping_regions.is_empty());
        assert!(!draft.verification.phone_verified);
        assert_eq!(draft.terms, Terms::default());
    }

    #[test]
    fn test_terms_gate_ignores_optional_consents() {
        let mut terms = Terms {
            newsletter: true,
            marketing_emails: true,
            ..Terms::default()
        };
        assert!(!terms.can_proceed());

        terms.seller_agreement = true;
        terms.privacy_policy = true;
        assert!(!terms.can_proceed());

        terms.data_processing = true;
        terms.newsletter = false;
        terms.marketing_emails = false;
        assert!(terms.can_proceed());
    }

    #[test]
    fn test_serialized_keys_follow_form_field_names() {
        let mut draft = RegistrationDraft::default();
        draft.personal_info.full_name = "Ada".to_string();
        draft.payment_info.w9_completed = true;
        draft.account_credentials.password = "secret".to_string();
        draft.account_credentials.confirm_password = "secret".to_string();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["personalInfo"]["fullName"], "Ada");
        assert_eq!(json["paymentInfo"]["w9Completed"], true);
        assert_eq!(json["accountCredentials"]["password"], "secret");
        assert!(json["accountCredentials"].get("confirmPassword").is_none());
        assert!(json["storeSetup"]["socialMediaLinks"].is_object());
    }

    #[test]
    fn test_section_names() {
        assert_eq!(Section::ShippingPolicies.to_string(), "shippingPolicies");
        assert_eq!(Section::Terms.name(), "terms");
    }
}
