pub mod board;
pub mod contacts;
pub mod profile_pictures;
pub mod users;
