// ABOUTME: Verification panel: document uploads and the phone/email code checks
// The verified flags are written by the code flow, never typed directly

use super::{FieldSpec, FieldValue};
use crate::collaborators::FileSlot;
use crate::wizard::draft::Verification;
use crate::wizard::patch::VerificationPatch;
use crate::wizard::OtpChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationField {
    BusinessLicense,
    IdentityProof,
    AddressProof,
    TaxCertificate,
    PhoneCode,
    EmailCode,
}

impl VerificationField {
    pub const ALL: &'static [Self] = &[
        Self::BusinessLicense,
        Self::IdentityProof,
        Self::AddressProof,
        Self::TaxCertificate,
        Self::PhoneCode,
        Self::EmailCode,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::BusinessLicense => {
                FieldSpec::file("Business License / Certificate", FileSlot::BusinessLicense)
            }
            Self::IdentityProof => {
                FieldSpec::file("Identity Proof", FileSlot::IdentityProof).required()
            }
            Self::AddressProof => FieldSpec::file("Address Proof", FileSlot::AddressProof),
            Self::TaxCertificate => FieldSpec::file("Tax Certificate", FileSlot::TaxCertificate),
            Self::PhoneCode => {
                FieldSpec::otp("Phone Number Verification", OtpChannel::Phone).required()
            }
            Self::EmailCode => {
                FieldSpec::otp("Email Verification", OtpChannel::Email).required()
            }
        }
    }

    pub fn read(&self, section: &Verification) -> FieldValue {
        match self {
            Self::BusinessLicense => FieldValue::File(section.business_license.clone()),
            Self::IdentityProof => FieldValue::File(section.identity_proof.clone()),
            Self::AddressProof => FieldValue::File(section.address_proof.clone()),
            Self::TaxCertificate => FieldValue::File(section.tax_certificate.clone()),
            Self::PhoneCode => FieldValue::Verified(section.phone_verified),
            Self::EmailCode => FieldValue::Verified(section.email_verified),
        }
    }

    pub fn patch(&self, value: FieldValue) -> Option<VerificationPatch> {
        let mut patch = VerificationPatch::default();
        match self {
            Self::BusinessLicense => patch.business_license = Some(value.into_file()?),
            Self::IdentityProof => patch.identity_proof = Some(value.into_file()?),
            Self::AddressProof => patch.address_proof = Some(value.into_file()?),
            Self::TaxCertificate => patch.tax_certificate = Some(value.into_file()?),
            Self::PhoneCode | Self::EmailCode => return None,
        }
        Some(patch)
    }

    pub fn channel(&self) -> Option<OtpChannel> {
        match self {
            Self::PhoneCode => Some(OtpChannel::Phone),
            Self::EmailCode => Some(OtpChannel::Email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fields_cannot_be_patched_directly() {
        assert!(VerificationField::PhoneCode
            .patch(FieldValue::Verified(true))
            .is_none());
        assert!(VerificationField::EmailCode
            .patch(FieldValue::Flag(true))
            .is_none());
    }

    #[test]
    fn test_code_fields_map_to_channels() {
        assert_eq!(VerificationField::PhoneCode.channel(), Some(OtpChannel::Phone));
        assert_eq!(VerificationField::IdentityProof.channel(), None);
    }
}
