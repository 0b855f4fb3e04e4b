mod twilio_client;
mod twilio_options;
mod twilio_response;

pub use twilio_client::TwilioClient;
pub use twilio_options::TwilioOptions;
