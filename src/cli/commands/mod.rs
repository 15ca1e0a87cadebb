pub mod config;
pub mod login;
pub mod logout;
pub mod punch;
pub mod status;
