pub mod config;
pub mod form;
pub mod http;
pub mod keywords;
pub mod source;
pub mod types;
pub mod validator;
