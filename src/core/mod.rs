pub mod clock;
pub mod events;
pub mod export;
pub mod profile;
pub mod schedule;
