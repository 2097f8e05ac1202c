pub mod board;
pub mod contacts;
pub mod health;
pub mod users;
