//! SMS service client: a small worked example of a generated service module
//! built on the core request pipeline.

pub mod models;

pub use models::{SendSmsRequest, SendSmsResponse, SendStatus};
