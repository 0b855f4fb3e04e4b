pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    sms::{
        send_sms_request::{ContactMessage, SendSmsRequest},
        send_sms_response::SendSmsResponse,
        sms::send_sms,
    },
    users::{
        auth_response::AuthResponse,
        login_request::LoginRequest,
        signup_request::{SignupFields, SignupRequest},
        user_dto::UserDto,
        users::{login, signup},
    },
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use state::{AppState, sms_provider_from_config};
