pub mod error_mw;
pub mod request_mw;
