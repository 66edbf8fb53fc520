pub mod avatars;
pub mod docs;
pub mod health_check;
