// ABOUTME: Account credentials panel with the masked password pair

use super::{FieldSpec, FieldValue};
use crate::wizard::choices::SecurityQuestion;
use crate::wizard::draft::AccountCredentials;
use crate::wizard::patch::AccountCredentialsPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialsField {
    Username,
    Password,
    ConfirmPassword,
    SecurityQuestion,
    SecurityAnswer,
    TwoFactorAuth,
}

impl CredentialsField {
    pub const ALL: &'static [Self] = &[
        Self::Username,
        Self::Password,
        Self::ConfirmPassword,
        Self::SecurityQuestion,
        Self::SecurityAnswer,
        Self::TwoFactorAuth,
    ];

    pub fn spec(&self) -> FieldSpec {
        match self {
            Self::Username => {
                FieldSpec::text("Store Username (Optional)", "e.g., awesome-electronics-store")
            }
            Self::Password => FieldSpec::masked("Password", "Create a strong password").required(),
            Self::ConfirmPassword => {
                FieldSpec::masked("Confirm Password", "Confirm your password").required()
            }
            Self::SecurityQuestion => FieldSpec::choice::<SecurityQuestion>(
                "Security Question",
                "Choose a security question",
            )
            .required(),
            Self::SecurityAnswer => {
                FieldSpec::text("Security Answer", "Enter your security answer").required()
            }
            Self::TwoFactorAuth => {
                FieldSpec::toggle("Enable Two-Factor Authentication (2FA) - Recommended")
            }
        }
    }

    pub fn read(&self, section: &AccountCredentials) -> FieldValue {
        match self {
            Self::Username => FieldValue::Text(section.username.clone()),
            Self::Password => FieldValue::Text(section.password.clone()),
            Self::ConfirmPassword => FieldValue::Text(section.confirm_password.clone()),
            Self::SecurityQuestion => FieldValue::choice(section.security_question),
            Self::SecurityAnswer => FieldValue::Text(section.security_answer.clone()),
            Self::TwoFactorAuth => FieldValue::Flag(section.two_factor_auth),
        }
    }

    pub fn patch(&self, value: FieldValue) -> Option<AccountCredentialsPatch> {
        let mut patch = AccountCredentialsPatch::default();
        match self {
            Self::Username => patch.username = Some(value.into_text()?),
            Self::Password => patch.password = Some(value.into_text()?),
            Self::ConfirmPassword => patch.confirm_password = Some(value.into_text()?),
            Self::SecurityQuestion => patch.security_question = Some(value.into_choice()?),
            Self::SecurityAnswer => patch.security_answer = Some(value.into_text()?),
            Self::TwoFactorAuth => patch.two_factor_auth = Some(value.into_flag()?),
        }
        Some(patch)
    }
}
