pub mod app;
pub mod echo_message;
