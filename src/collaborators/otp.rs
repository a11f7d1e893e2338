// ABOUTME: One-time code service used by the phone and email verification fields

use async_trait::async_trait;
use tracing::info;

use super::Result;
use crate::wizard::OtpChannel;

/// Acknowledgement that a code was dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpAck {
    pub channel: OtpChannel,
    /// Shown to the user when the service is a demo and has no real transport
    pub hint: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OtpService: Send + Sync {
    async fn send(&self, channel: OtpChannel) -> Result<OtpAck>;

    /// `Ok(false)` for a wrong code; errors are reserved for transport problems
    async fn verify(&self, channel: OtpChannel, code: &str) -> Result<bool>;
}

/// Accepts a single fixed code on every channel and never sends anything
#[derive(Debug, Clone)]
pub struct DemoOtpService {
    code: String,
}

impl DemoOtpService {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Default for DemoOtpService {
    fn default() -> Self {
        Self::new("123456")
    }
}

#[async_trait]
impl OtpService for DemoOtpService {
    async fn send(&self, channel: OtpChannel) -> Result<OtpAck> {
        info!(channel = %channel, "Demo verification code issued");
        Ok(OtpAck {
            channel,
            hint: Some(format!("Demo code: {}", self.code)),
        })
    }

    async fn verify(&self, channel: OtpChannel, code: &str) -> Result<bool> {
        let accepted = code == self.code;
        info!(channel = %channel, accepted, "Demo verification code checked");
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_accepts_only_its_code() {
        let service = DemoOtpService::default();
        assert!(service.verify(OtpChannel::Phone, "123456").await.unwrap());
        assert!(!service.verify(OtpChannel::Phone, "654321").await.unwrap());
        assert!(!service.verify(OtpChannel::Email, "").await.unwrap());
    }

    #[tokio::test]
    async fn test_demo_send_carries_hint() {
        let service = DemoOtpService::new("999000");
        let ack = service.send(OtpChannel::Email).await.unwrap();
        assert_eq!(ack.channel, OtpChannel::Email);
        assert_eq!(ack.hint.as_deref(), Some("Demo code: 999000"));
    }
}
