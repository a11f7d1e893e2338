// ABOUTME: Terms panel; three of the five consents gate account creation

use super::{FieldSpec, FieldValue};
use crate::wizard::draft::Terms;
use crate::wizard::patch::TermsPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermsField {
    SellerAgreement,
    PrivacyPolicy,
    DataProcessing,
    Newsletter,
    MarketingEmails,
}

impl TermsField {
    pub const ALL: &'static [Self] = &[
        Self::SellerAgreement,
        Self::PrivacyPolicy,
        Self::DataProcessing,
        Self::Newsletter,
        Self::MarketingEmails,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::SellerAgreement => FieldSpec::toggle("I accept the Seller Agreement").required(),
            Self::PrivacyPolicy => FieldSpec::toggle("I agree to the Privacy Policy").required(),
            Self::DataProcessing => FieldSpec::toggle("I consent to Data Processing").required(),
            Self::Newsletter => FieldSpec::toggle("Seller Newsletter"),
            Self::MarketingEmails => FieldSpec::toggle("Promotional Emails"),
        }
    }

    pub fn read(&self, section: &Terms) -> FieldValue {
        FieldValue::Flag(match self {
            Self::SellerAgreement => section.seller_agreement,
            Self::PrivacyPolicy => section.privacy_policy,
            Self::DataProcessing => section.data_processing,
            Self::Newsletter => section.newsletter,
            Self::MarketingEmails => section.marketing_emails,
        })
    }

    pub fn patch(&self, value: FieldValue) -> Option<TermsPatch> {
        let flag = Some(value.into_flag()?);
        let mut patch = TermsPatch::default();
        match self {
            Self::SellerAgreement => patch.seller_agreement = flag,
            Self::PrivacyPolicy => patch.privacy_policy = flag,
            Self::DataProcessing => patch.data_processing = flag,
            Self::Newsletter => patch.newsletter = flag,
            Self::MarketingEmails => patch.marketing_emails = flag,
        }
        Some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_markers_match_gate() {
        let required: Vec<_> = TermsField::ALL
            .iter()
            .filter(|field| field.spec().required)
            .collect();
        assert_eq!(
            required,
            vec![
                &TermsField::SellerAgreement,
                &TermsField::PrivacyPolicy,
                &TermsField::DataProcessing
            ]
        );
    }

    #[test]
    fn test_toggling_all_required_opens_gate() {
        let mut terms = Terms::default();
        for field in [
            TermsField::SellerAgreement,
            TermsField::PrivacyPolicy,
            TermsField::DataProcessing,
        ] {
            assert!(!terms.can_proceed());
            field.patch(FieldValue::Flag(true)).unwrap().apply(&mut terms);
        }
        assert!(terms.can_proceed());
    }
}
