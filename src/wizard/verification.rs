// ABOUTME: Per-channel one-time-code phase machine for phone and email verification
// Only a successful verify reaches the draft; every other phase lives in the UI

use std::fmt;

use super::patch::VerificationPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtpChannel {
    Phone,
    Email,
}

impl OtpChannel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Patch recording a successful verification for this channel
    pub fn verified_patch(&self) -> VerificationPatch {
        match self {
            Self::Phone => VerificationPatch {
                phone_verified: Some(true),
                ..VerificationPatch::default()
            },
            Self::Email => VerificationPatch {
                email_verified: Some(true),
                ..VerificationPatch::default()
            },
        }
    }
}

impl fmt::Display for OtpChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelPhase {
    #[default]
    Idle,
    Sending,
    CodeSent,
    Verifying,
    Verified,
    Failed(String),
}

impl ChannelPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Sending | Self::Verifying)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Idle => "Not verified".to_string(),
            Self::Sending => "Sending code...".to_string(),
            Self::CodeSent => "Code sent".to_string(),
            Self::Verifying => "Checking code...".to_string(),
            Self::Verified => "Verified".to_string(),
            Self::Failed(reason) => format!("Failed: {reason}"),
        }
    }
}

/// One channel's phase plus the code the user is typing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpFlow {
    pub phase: ChannelPhase,
    pub code_input: String,
}

impl OtpFlow {
    /// Whether a send may start; a verified channel is done
    pub fn begin_send(&mut self) -> bool {
        match self.phase {
            ChannelPhase::Sending | ChannelPhase::Verifying | ChannelPhase::Verified => false,
            _ => {
                self.phase = ChannelPhase::Sending;
                true
            }
        }
    }

    pub fn on_sent(&mut self) {
        self.phase = ChannelPhase::CodeSent;
        self.code_input.clear();
    }

    /// The code to check, if a code has been sent and something was typed
    pub fn begin_verify(&mut self) -> Option<String> {
        if self.phase != ChannelPhase::CodeSent || self.code_input.is_empty() {
            return None;
        }
        self.phase = ChannelPhase::Verifying;
        Some(self.code_input.clone())
    }

    /// A wrong code drops back to `CodeSent` without any message
    pub fn on_verified(&mut self, channel: OtpChannel, accepted: bool) -> Option<VerificationPatch> {
        if accepted {
            self.phase = ChannelPhase::Verified;
            Some(channel.verified_patch())
        } else {
            self.phase = ChannelPhase::CodeSent;
            None
        }
    }

    pub fn on_failed(&mut self, reason: impl Into<String>) {
        self.phase = ChannelPhase::Failed(reason.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationFlows {
    pub phone: OtpFlow,
    pub email: OtpFlow,
}

impl VerificationFlows {
    pub fn get(&self, channel: OtpChannel) -> &OtpFlow {
        match channel {
            OtpChannel::Phone => &self.phone,
            OtpChannel::Email => &self.email,
        }
    }

    pub fn get_mut(&mut self, channel: OtpChannel) -> &mut OtpFlow {
        match channel {
            OtpChannel::Phone => &mut self.phone,
            OtpChannel::Email => &mut self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sent_flow(code: &str) -> OtpFlow {
        let mut flow = OtpFlow::default();
        assert!(flow.begin_send());
        flow.on_sent();
        flow.code_input = code.to_string();
        flow
    }

    #[test]
    fn test_happy_path() {
        let mut flow = sent_flow("123456");
        assert_eq!(flow.begin_verify(), Some("123456".to_string()));
        assert_eq!(flow.phase, ChannelPhase::Verifying);

        let patch = flow.on_verified(OtpChannel::Phone, true);
        assert_eq!(flow.phase, ChannelPhase::Verified);
        assert_eq!(patch.and_then(|p| p.phone_verified), Some(true));
    }

    #[test]
    fn test_wrong_code_returns_to_code_sent() {
        let mut flow = sent_flow("000000");
        flow.begin_verify();
        assert_eq!(flow.on_verified(OtpChannel::Email, false), None);
        assert_eq!(flow.phase, ChannelPhase::CodeSent);
    }

    #[test]
    fn test_verify_requires_sent_code() {
        let mut flow = OtpFlow {
            code_input: "123456".to_string(),
            ..OtpFlow::default()
        };
        assert_eq!(flow.begin_verify(), None);
        assert_eq!(flow.phase, ChannelPhase::Idle);

        let mut empty = sent_flow("");
        assert_eq!(empty.begin_verify(), None);
    }

    #[test]
    fn test_failed_channel_can_resend() {
        let mut flow = OtpFlow::default();
        flow.begin_send();
        flow.on_failed("timed out");
        assert!(matches!(flow.phase, ChannelPhase::Failed(_)));
        assert!(flow.begin_send());
    }

    #[test]
    fn test_no_send_while_pending_or_verified() {
        let mut flow = OtpFlow::default();
        flow.begin_send();
        assert!(!flow.begin_send());
        flow.phase = ChannelPhase::Verified;
        assert!(!flow.begin_send());
    }

    #[test]
    fn test_channels_are_independent() {
        let mut flows = VerificationFlows::default();
        flows.get_mut(OtpChannel::Phone).on_sent();
        assert_eq!(flows.get(OtpChannel::Phone).phase, ChannelPhase::CodeSent);
        assert_eq!(flows.get(OtpChannel::Email).phase, ChannelPhase::Idle);
    }
}
