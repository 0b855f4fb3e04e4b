pub mod in_memory_user_store;
pub mod user_store;
