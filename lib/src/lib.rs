pub mod api;
pub mod attachment;
pub mod config;
pub mod error;
pub mod resend;
pub mod template;

pub use error::Error;
