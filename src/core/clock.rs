//! Clock-in/out decision flow.
//!
//! The employee record carries the current state (`working`); the backend
//! flips it after each clock event. Clocking in is preceded by a
//! work-duration estimate, and the estimate must be accepted before the
//! clock event is sent: if it fails, no event is posted.
//!
//! The backend seam is a trait so the sequencing can be tested with a
//! recording fake instead of a server.

use crate::api::{self, ApiClient};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockRequest;
use crate::models::employee::Employee;
use crate::models::estimate::{self, Estimate};
use crate::utils::tz;

/// The three calls the clock flow needs from the backend.
pub trait ClockApi {
    fn my_employee(&self) -> AppResult<Employee>;
    fn create_estimate(&self, estimate: &Estimate) -> AppResult<()>;
    fn clock_now(&self, request: &ClockRequest) -> AppResult<()>;
}

impl ClockApi for ApiClient {
    fn my_employee(&self) -> AppResult<Employee> {
        api::employees::my_user(self)
    }

    fn create_estimate(&self, estimate: &Estimate) -> AppResult<()> {
        api::estimates::create(self, estimate)
    }

    fn clock_now(&self, request: &ClockRequest) -> AppResult<()> {
        api::events::clock_now(self, request)
    }
}

/// What the flow did, for the success toast.
#[derive(Debug, PartialEq)]
pub enum ClockOutcome {
    /// Was out, estimate submitted, clock-in registered.
    In { estimated_hours: f64 },
    /// Was in, clock-out registered.
    Out,
}

pub struct ClockLogic;

impl ClockLogic {
    pub fn apply(
        backend: &dyn ClockApi,
        hours: Option<f64>,
        default_hours: f64,
        origin: &str,
    ) -> AppResult<ClockOutcome> {
        let me = backend.my_employee()?;

        if me.is_working() {
            // Next event is an exit: no estimate.
            backend.clock_now(&ClockRequest::new(&me.numero, origin))?;
            return Ok(ClockOutcome::Out);
        }

        // Next event is an entry: estimate first, then the event.
        let id = me
            .id
            .ok_or_else(|| AppError::UnknownEmployee(me.numero.clone()))?;

        let estimated_hours = hours.unwrap_or(default_hours);
        if !estimate::is_valid_hours(estimated_hours) {
            return Err(AppError::InvalidHours(estimated_hours.to_string()));
        }

        backend.create_estimate(&Estimate::new(id, estimated_hours, tz::now_utc_string()))?;
        backend.clock_now(&ClockRequest::new(&me.numero, origin))?;

        Ok(ClockOutcome::In { estimated_hours })
    }
}
