mod error;
mod requests;
