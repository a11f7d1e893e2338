// ABOUTME: Personal and business information panel

use super::{FieldSpec, FieldValue};
use crate::wizard::choices::{BusinessType, EmployeeCount};
use crate::wizard::draft::PersonalInfo;
use crate::wizard::patch::PersonalInfoPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalInfoField {
    FullName,
    Email,
    Phone,
    Address,
    BusinessName,
    BusinessType,
    BusinessRegistrationNumber,
    TaxId,
    YearEstablished,
    EmployeeCount,
    Website,
    BusinessDescription,
}

impl PersonalInfoField {
    pub const ALL: &'static [Self] = &[
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::BusinessName,
        Self::BusinessType,
        Self::BusinessRegistrationNumber,
        Self::TaxId,
        Self::YearEstablished,
        Self::EmployeeCount,
        Self::Website,
        Self::BusinessDescription,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::FullName => FieldSpec::text("Full Legal Name", "Enter your full legal name").required(),
            Self::Email => FieldSpec::text("Email Address", "your.email@example.com").required(),
            Self::Phone => FieldSpec::text("Phone Number", "+1 (555) 123-4567").required(),
            Self::Address => {
                FieldSpec::text("Personal Address", "Street, City, State, Country, Zip").required()
            }
            Self::BusinessName => {
                FieldSpec::text("Legal Business Name", "Enter legal business name").required()
            }
            Self::BusinessType => {
                FieldSpec::choice::<BusinessType>("Business Type", "Select business type").required()
            }
            Self::BusinessRegistrationNumber => FieldSpec::text(
                "Business Registration Number",
                "Business registration/license number",
            ),
            Self::TaxId => FieldSpec::text("Tax ID / EIN", "Enter tax ID or EIN").required(),
            Self::YearEstablished => FieldSpec::text("Year Established", "2020").required(),
            Self::EmployeeCount => {
                FieldSpec::choice::<EmployeeCount>("Number of Employees", "Select employee count")
                    .required()
            }
            Self::Website => FieldSpec::text("Business Website", "https://www.yourwebsite.com"),
            Self::BusinessDescription => FieldSpec::text(
                "Business Description",
                "Describe your business, what you sell and your target market",
            )
            .required(),
        }
    }

    pub fn read(&self, section: &PersonalInfo) -> FieldValue {
        match self {
            Self::FullName => FieldValue::Text(section.full_name.clone()),
            Self::Email => FieldValue::Text(section.email.clone()),
            Self::Phone => FieldValue::Text(section.phone.clone()),
            Self::Address => FieldValue::Text(section.address.clone()),
            Self::BusinessName => FieldValue::Text(section.business_name.clone()),
            Self::BusinessType => FieldValue::choice(section.business_type),
            Self::BusinessRegistrationNumber => {
                FieldValue::Text(section.business_registration_number.clone())
            }
            Self::TaxId => FieldValue::Text(section.tax_id.clone()),
            Self::YearEstablished => FieldValue::Text(section.year_established.clone()),
            Self::EmployeeCount => FieldValue::choice(section.employee_count),
            Self::Website => FieldValue::Text(section.website.clone()),
            Self::BusinessDescription => FieldValue::Text(section.business_description.clone()),
        }
    }

    pub fn patch(&self, value: FieldValue) -> Option<PersonalInfoPatch> {
        let mut patch = PersonalInfoPatch::default();
        match self {
            Self::FullName => patch.full_name = Some(value.into_text()?),
            Self::Email => patch.email = Some(value.into_text()?),
            Self::Phone => patch.phone = Some(value.into_text()?),
            Self::Address => patch.address = Some(value.into_text()?),
            Self::BusinessName => patch.business_name = Some(value.into_text()?),
            Self::BusinessType => patch.business_type = Some(value.into_choice()?),
            Self::BusinessRegistrationNumber => {
                patch.business_registration_number = Some(value.into_text()?);
            }
            Self::TaxId => patch.tax_id = Some(value.into_text()?),
            Self::YearEstablished => patch.year_established = Some(value.into_text()?),
            Self::EmployeeCount => patch.employee_count = Some(value.into_choice()?),
            Self::Website => patch.website = Some(value.into_text()?),
            Self::BusinessDescription => patch.business_description = Some(value.into_text()?),
        }
        Some(patch)
    }
}
