pub mod client_error;
pub mod quiz_client;
pub mod trivia_client;
