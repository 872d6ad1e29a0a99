//! External API clients

pub mod client;

pub use client::{HttpClient, PayloadSource};
