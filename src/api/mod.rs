pub mod client;
pub mod employees;
pub mod estimates;
pub mod events;
pub mod schedules;

pub use client::ApiClient;
