pub mod send_sms_request;
pub mod send_sms_response;
#[allow(clippy::module_inception)]
pub mod sms;
