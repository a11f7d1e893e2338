// ABOUTME: Section patches and the draft action union the store reduces
// A patch names only the fields it changes; every other field of the section survives

use std::collections::BTreeSet;

use super::choices::{
    AccountType, BusinessType, Currency, DeliveryTime, EmployeeCount, PackagingType,
    PaymentFrequency, PaymentMethod, RefundMethod, ResponseTime, ReturnShipping, ReturnWindow,
    SalesTaxRegistration, SecurityQuestion, ServiceHours, ShippingOption, StoreCategory,
    TaxClassification,
};
use super::draft::{
    AccountCredentials, FileHandle, PaymentInfo, PersonalInfo, RegistrationDraft, Section,
    ShippingPolicies, SocialMediaLinks, StoreSetup, Terms, Verification,
};

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_type: Option<Option<BusinessType>>,
    pub tax_id: Option<String>,
    pub website: Option<String>,
    pub business_registration_number: Option<String>,
    pub year_established: Option<String>,
    pub employee_count: Option<Option<EmployeeCount>>,
    pub business_description: Option<String>,
}

impl PersonalInfoPatch {
    pub fn apply(self, section: &mut PersonalInfo) {
        merge(&mut section.full_name, self.full_name);
        merge(&mut section.business_name, self.business_name);
        merge(&mut section.email, self.email);
        merge(&mut section.phone, self.phone);
        merge(&mut section.address, self.address);
        merge(&mut section.business_type, self.business_type);
        merge(&mut section.tax_id, self.tax_id);
        merge(&mut section.website, self.website);
        merge(
            &mut section.business_registration_number,
            self.business_registration_number,
        );
        merge(&mut section.year_established, self.year_established);
        merge(&mut section.employee_count, self.employee_count);
        merge(&mut section.business_description, self.business_description);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSetupPatch {
    pub store_name: Option<String>,
    pub store_description: Option<String>,
    pub store_category: Option<Option<StoreCategory>>,
    pub store_logo: Option<Option<FileHandle>>,
    pub store_banner: Option<Option<FileHandle>>,
    pub return_policy: Option<String>,
    pub customer_service_hours: Option<String>,
    /// Replaces the nested record as a whole
    pub social_media_links: Option<SocialMediaLinks>,
}

impl StoreSetupPatch {
    pub fn apply(self, section: &mut StoreSetup) {
        merge(&mut section.store_name, self.store_name);
        merge(&mut section.store_description, self.store_description);
        merge(&mut section.store_category, self.store_category);
        merge(&mut section.store_logo, self.store_logo);
        merge(&mut section.store_banner, self.store_banner);
        merge(&mut section.return_policy, self.return_policy);
        merge(&mut section.customer_service_hours, self.customer_service_hours);
        merge(&mut section.social_media_links, self.social_media_links);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountCredentialsPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub security_question: Option<Option<SecurityQuestion>>,
    pub security_answer: Option<String>,
    pub two_factor_auth: Option<bool>,
}

impl AccountCredentialsPatch {
    pub fn apply(self, section: &mut AccountCredentials) {
        merge(&mut section.username, self.username);
        merge(&mut section.password, self.password);
        merge(&mut section.confirm_password, self.confirm_password);
        merge(&mut section.security_question, self.security_question);
        merge(&mut section.security_answer, self.security_answer);
        merge(&mut section.two_factor_auth, self.two_factor_auth);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentInfoPatch {
    pub bank_account: Option<String>,
    pub bank_name: Option<String>,
    pub account_holder: Option<String>,
    pub tax_id_number: Option<String>,
    pub payment_method: Option<Option<PaymentMethod>>,
    pub swift_code: Option<String>,
    pub routing_number: Option<String>,
    pub payment_frequency: Option<Option<PaymentFrequency>>,
    pub account_type: Option<Option<AccountType>>,
    pub minimum_payout: Option<String>,
    pub currency: Option<Option<Currency>>,
    pub tax_classification: Option<Option<TaxClassification>>,
    pub vat_number: Option<String>,
    pub sales_tax_registration: Option<Option<SalesTaxRegistration>>,
    pub w9_completed: Option<bool>,
    pub tax_compliance: Option<bool>,
    pub hold_payments: Option<bool>,
    pub automatic_tax: Option<bool>,
    pub special_instructions: Option<String>,
}

impl PaymentInfoPatch {
    pub fn apply(self, section: &mut PaymentInfo) {
        merge(&mut section.bank_account, self.bank_account);
        merge(&mut section.bank_name, self.bank_name);
        merge(&mut section.account_holder, self.account_holder);
        merge(&mut section.tax_id_number, self.tax_id_number);
        merge(&mut section.payment_method, self.payment_method);
        merge(&mut section.swift_code, self.swift_code);
        merge(&mut section.routing_number, self.routing_number);
        merge(&mut section.payment_frequency, self.payment_frequency);
        merge(&mut section.account_type, self.account_type);
        merge(&mut section.minimum_payout, self.minimum_payout);
        merge(&mut section.currency, self.currency);
        merge(&mut section.tax_classification, self.tax_classification);
        merge(&mut section.vat_number, self.vat_number);
        merge(&mut section.sales_tax_registration, self.sales_tax_registration);
        merge(&mut section.w9_completed, self.w9_completed);
        merge(&mut section.tax_compliance, self.tax_compliance);
        merge(&mut section.hold_payments, self.hold_payments);
        merge(&mut section.automatic_tax, self.automatic_tax);
        merge(&mut section.special_instructions, self.special_instructions);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingPoliciesPatch {
    pub shipping_regions: Option<BTreeSet<String>>,
    pub shipping_options: Option<Option<ShippingOption>>,
    pub return_policy: Option<String>,
    pub delivery_time: Option<Option<DeliveryTime>>,
    pub packaging_type: Option<Option<PackagingType>>,
    pub international_shipping: Option<bool>,
    pub free_shipping_threshold: Option<String>,
    pub return_window: Option<Option<ReturnWindow>>,
    pub return_shipping: Option<Option<ReturnShipping>>,
    pub refund_method: Option<Option<RefundMethod>>,
    pub customer_service_hours: Option<Option<ServiceHours>>,
    pub response_time: Option<Option<ResponseTime>>,
}

impl ShippingPoliciesPatch {
    pub fn apply(self, section: &mut ShippingPolicies) {
        merge(&mut section.shipping_regions, self.shipping_regions);
        merge(&mut section.shipping_options, self.shipping_options);
        merge(&mut section.return_policy, self.return_policy);
        merge(&mut section.delivery_time, self.delivery_time);
        merge(&mut section.packaging_type, self.packaging_type);
        merge(&mut section.international_shipping, self.international_shipping);
        merge(&mut section.free_shipping_threshold, self.free_shipping_threshold);
        merge(&mut section.return_window, self.return_window);
        merge(&mut section.return_shipping, self.return_shipping);
        merge(&mut section.refund_method, self.refund_method);
        merge(&mut section.customer_service_hours, self.customer_service_hours);
        merge(&mut section.response_time, self.response_time);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationPatch {
    pub business_license: Option<Option<FileHandle>>,
    pub identity_proof: Option<Option<FileHandle>>,
    pub phone_verified: Option<bool>,
    pub email_verified: Option<bool>,
    pub address_proof: Option<Option<FileHandle>>,
    pub tax_certificate: Option<Option<FileHandle>>,
}

impl VerificationPatch {
    pub fn apply(self, section: &mut Verification) {
        merge(&mut section.business_license, self.business_license);
        merge(&mut section.identity_proof, self.identity_proof);
        merge(&mut section.phone_verified, self.phone_verified);
        merge(&mut section.email_verified, self.email_verified);
        merge(&mut section.address_proof, self.address_proof);
        merge(&mut section.tax_certificate, self.tax_certificate);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermsPatch {
    pub seller_agreement: Option<bool>,
    pub privacy_policy: Option<bool>,
    pub newsletter: Option<bool>,
    pub marketing_emails: Option<bool>,
    pub data_processing: Option<bool>,
}

impl TermsPatch {
    pub fn apply(self, section: &mut Terms) {
        merge(&mut section.seller_agreement, self.seller_agreement);
        merge(&mut section.privacy_policy, self.privacy_policy);
        merge(&mut section.newsletter, self.newsletter);
        merge(&mut section.marketing_emails, self.marketing_emails);
        merge(&mut section.data_processing, self.data_processing);
    }
}

/// One action per draft section; the only way the draft changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    PersonalInfo(PersonalInfoPatch),
    StoreSetup(StoreSetupPatch),
    AccountCredentials(AccountCredentialsPatch),
    PaymentInfo(PaymentInfoPatch),
    ShippingPolicies(ShippingPoliciesPatch),
    Verification(VerificationPatch),
    Terms(TermsPatch),
}

impl DraftAction {
    /// The section this action writes to
    pub fn section(&self) -> Section {
        match self {
            Self::PersonalInfo(_) => Section::PersonalInfo,
            Self::StoreSetup(_) => Section::StoreSetup,
            Self::AccountCredentials(_) => Section::AccountCredentials,
            Self::PaymentInfo(_) => Section::PaymentInfo,
            Self::ShippingPolicies(_) => Section::ShippingPolicies,
            Self::Verification(_) => Section::Verification,
            Self::Terms(_) => Section::Terms,
        }
    }

    /// Shallow-merge the patch into its section of `draft`
    pub fn apply_to(self, draft: &mut RegistrationDraft) {
        match self {
            Self::PersonalInfo(patch) => patch.apply(&mut draft.personal_info),
            Self::StoreSetup(patch) => patch.apply(&mut draft.store_setup),
            Self::AccountCredentials(patch) => patch.apply(&mut draft.account_credentials),
            Self::PaymentInfo(patch) => patch.apply(&mut draft.payment_info),
            Self::ShippingPolicies(patch) => patch.apply(&mut draft.shipping_policies),
            Self::Verification(patch) => patch.apply(&mut draft.verification),
            Self::Terms(patch) => patch.apply(&mut draft.terms),
        }
    }
}
