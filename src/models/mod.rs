pub mod clock_event;
pub mod employee;
pub mod estimate;
pub mod page;
pub mod schedule;
