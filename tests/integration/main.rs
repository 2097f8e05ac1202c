mod helpers;
mod test_users;
