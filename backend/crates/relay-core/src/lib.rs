pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use store::in_memory_user_store::InMemoryUserStore;
pub use store::user_store::UserStore;
