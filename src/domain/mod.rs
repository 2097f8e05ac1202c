pub mod board;
pub mod contact;
pub mod profile_picture;
pub mod shared;
pub mod user;
