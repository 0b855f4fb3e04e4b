//! Outbound SMS delivery.
//!
//! [`SmsProvider`] is the seam the server depends on; [`TwilioClient`] is the
//! production implementation speaking Twilio's Messages REST API.

pub mod error;
pub mod outbound_sms;
pub mod sms_provider;
pub mod twilio;

pub use error::{Result, SmsError};
pub use outbound_sms::{OutboundSms, SentMessage};
pub use sms_provider::SmsProvider;
pub use twilio::{TwilioClient, TwilioOptions};
