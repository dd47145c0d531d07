pub mod install;
pub mod login;
pub mod logout;
pub mod resolve;
