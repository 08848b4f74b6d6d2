pub mod session_repository;
pub mod user_repository;
