pub mod clock;
pub mod config;
pub mod employee;
pub mod event;
pub mod init;
pub mod schedule;
pub mod status;
