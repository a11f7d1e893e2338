// ABOUTME: Payment and tax panel

use super::{FieldSpec, FieldValue};
use crate::wizard::choices::{
    AccountType, Currency, PaymentFrequency, PaymentMethod, SalesTaxRegistration,
    TaxClassification,
};
use crate::wizard::draft::PaymentInfo;
use crate::wizard::patch::PaymentInfoPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    BankName,
    AccountHolder,
    BankAccount,
    RoutingNumber,
    SwiftCode,
    AccountType,
    PaymentMethod,
    PaymentFrequency,
    MinimumPayout,
    Currency,
    TaxIdNumber,
    TaxClassification,
    VatNumber,
    SalesTaxRegistration,
    W9Completed,
    TaxCompliance,
    HoldPayments,
    AutomaticTax,
    SpecialInstructions,
}

impl PaymentField {
    pub const ALL: &'static [Self] = &[
        Self::BankName,
        Self::AccountHolder,
        Self::BankAccount,
        Self::RoutingNumber,
        Self::SwiftCode,
        Self::AccountType,
        Self::PaymentMethod,
        Self::PaymentFrequency,
        Self::MinimumPayout,
        Self::Currency,
        Self::TaxIdNumber,
        Self::TaxClassification,
        Self::VatNumber,
        Self::SalesTaxRegistration,
        Self::W9Completed,
        Self::TaxCompliance,
        Self::HoldPayments,
        Self::AutomaticTax,
        Self::SpecialInstructions,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::BankName => FieldSpec::text("Bank Name", "Enter your bank name").required(),
            Self::AccountHolder => {
                FieldSpec::text("Account Holder Name", "Full name on bank account").required()
            }
            Self::BankAccount => {
                FieldSpec::masked("Bank Account Number", "Enter account number").required()
            }
            Self::RoutingNumber => {
                FieldSpec::text("Routing Number (US) / Sort Code", "9-digit routing number")
                    .required()
            }
            Self::SwiftCode => {
                FieldSpec::text("SWIFT/BIC Code (International)", "For international transfers")
            }
            Self::AccountType => {
                FieldSpec::choice::<AccountType>("Account Type", "Select account type").required()
            }
            Self::PaymentMethod => FieldSpec::choice::<PaymentMethod>(
                "Preferred Payment Method",
                "Select payment method",
            )
            .required(),
            Self::PaymentFrequency => {
                FieldSpec::choice::<PaymentFrequency>("Payment Frequency", "Select frequency")
                    .required()
            }
            Self::MinimumPayout => FieldSpec::text("Minimum Payout Threshold", "e.g., $100"),
            Self::Currency => FieldSpec::choice::<Currency>("Currency Preference", "Select currency"),
            Self::TaxIdNumber => {
                FieldSpec::masked("Tax ID Number (EIN/SSN)", "Enter tax ID number").required()
            }
            Self::TaxClassification => FieldSpec::choice::<TaxClassification>(
                "Tax Classification",
                "Select classification",
            )
            .required(),
            Self::VatNumber => {
                FieldSpec::text("VAT Number (EU/International)", "Enter VAT number if applicable")
            }
            Self::SalesTaxRegistration => FieldSpec::choice::<SalesTaxRegistration>(
                "Sales Tax Registration",
                "Select status",
            ),
            Self::W9Completed => FieldSpec::toggle("I will provide completed W-9 form (US Sellers)"),
            Self::TaxCompliance => FieldSpec::toggle("I understand my tax obligations as a seller"),
            Self::HoldPayments => {
                FieldSpec::toggle("Hold payments until order delivery confirmation")
            }
            Self::AutomaticTax => FieldSpec::toggle("Enable automatic tax calculation"),
            Self::SpecialInstructions => FieldSpec::text(
                "Special Payment Instructions",
                "Any special instructions for payments, banking, or tax handling",
            ),
        }
    }

    pub fn read(&self, section: &PaymentInfo) -> FieldValue {
        match self {
            Self::BankName => FieldValue::Text(section.bank_name.clone()),
            Self::AccountHolder => FieldValue::Text(section.account_holder.clone()),
            Self::BankAccount => FieldValue::Text(section.bank_account.clone()),
            Self::RoutingNumber => FieldValue::Text(section.routing_number.clone()),
            Self::SwiftCode => FieldValue::Text(section.swift_code.clone()),
            Self::AccountType => FieldValue::choice(section.account_type),
            Self::PaymentMethod => FieldValue::choice(section.payment_method),
            Self::PaymentFrequency => FieldValue::choice(section.payment_frequency),
            Self::MinimumPayout => FieldValue::Text(section.minimum_payout.clone()),
            Self::Currency => FieldValue::choice(section.currency),
            Self::TaxIdNumber => FieldValue::Text(section.tax_id_number.clone()),
            Self::TaxClassification => FieldValue::choice(section.tax_classification),
            Self::VatNumber => FieldValue::Text(section.vat_number.clone()),
            Self::SalesTaxRegistration => FieldValue::choice(section.sales_tax_registration),
            Self::W9Completed => FieldValue::Flag(section.w9_completed),
            Self::TaxCompliance => FieldValue::Flag(section.tax_compliance),
            Self::HoldPayments => FieldValue::Flag(section.hold_payments),
            Self::AutomaticTax => FieldValue::Flag(section.automatic_tax),
            Self::SpecialInstructions => FieldValue::Text(section.special_instructions.clone()),
        }
    }

    pub fn patch(&self, value: FieldValue) -> Option<PaymentInfoPatch> {
        let mut patch = PaymentInfoPatch::default();
        match self {
            Self::BankName => patch.bank_name = Some(value.into_text()?),
            Self::AccountHolder => patch.account_holder = Some(value.into_text()?),
            Self::BankAccount => patch.bank_account = Some(value.into_text()?),
            Self::RoutingNumber => patch.routing_number = Some(value.into_text()?),
            Self::SwiftCode => patch.swift_code = Some(value.into_text()?),
            Self::AccountType => patch.account_type = Some(value.into_choice()?),
            Self::PaymentMethod => patch.payment_method = Some(value.into_choice()?),
            Self::PaymentFrequency => patch.payment_frequency = Some(value.into_choice()?),
            Self::MinimumPayout => patch.minimum_payout = Some(value.into_text()?),
            Self::Currency => patch.currency = Some(value.into_choice()?),
            Self::TaxIdNumber => patch.tax_id_number = Some(value.into_text()?),
            Self::TaxClassification => patch.tax_classification = Some(value.into_choice()?),
            Self::VatNumber => patch.vat_number = Some(value.into_text()?),
            Self::SalesTaxRegistration => {
                patch.sales_tax_registration = Some(value.into_choice()?);
            }
            Self::W9Completed => patch.w9_completed = Some(value.into_flag()?),
            Self::TaxCompliance => patch.tax_compliance = Some(value.into_flag()?),
            Self::HoldPayments => patch.hold_payments = Some(value.into_flag()?),
            Self::AutomaticTax => patch.automatic_tax = Some(value.into_flag()?),
            Self::SpecialInstructions => patch.special_instructions = Some(value.into_text()?),
        }
        Some(patch)
    }
}
