pub mod browse;
pub mod login;
pub mod logout;
pub mod remove;
