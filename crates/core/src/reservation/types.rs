//! Reservation data types.

use chrono::{NaiveDate, NaiveTime};
use pitlane_shared::types::{ClientId, ReservationId};
use serde::{Deserialize, Serialize};

/// Session length assumed when the time window is missing or inverted.
pub const DEFAULT_SESSION_MINUTES: u32 = 30;

/// A booked track session for a principal client and their companions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier.
    pub id: ReservationId,
    /// Principal client (the person who booked).
    pub client_id: ClientId,
    /// Day of the session.
    pub date: NaiveDate,
    /// Start of the time window, if scheduled.
    pub start_time: Option<NaiveTime>,
    /// End of the time window, if scheduled.
    pub end_time: Option<NaiveTime>,
    /// Session duration in minutes; computed from the window when absent.
    pub duration_minutes: u32,
    /// Companion national IDs. Order preserved, duplicates allowed;
    /// identifiers that resolve to no client still count toward headcount.
    pub companions: Vec<ClientId>,
}

impl Reservation {
    /// Total people on the track: the principal plus every companion id.
    #[must_use]
    pub fn headcount(&self) -> u32 {
        1 + u32::try_from(self.companions.len()).unwrap_or(u32::MAX - 1)
    }
}

/// Computes the session length in minutes from a time window.
///
/// Falls back to [`DEFAULT_SESSION_MINUTES`] when either end is missing or
/// the window is non-positive.
#[must_use]
pub fn session_length(start: Option<NaiveTime>, end: Option<NaiveTime>) -> u32 {
    match (start, end) {
        (Some(s), Some(e)) => {
            let minutes = (e - s).num_minutes();
            if minutes > 0 {
                u32::try_from(minutes).unwrap_or(DEFAULT_SESSION_MINUTES)
            } else {
                DEFAULT_SESSION_MINUTES
            }
        }
        _ => DEFAULT_SESSION_MINUTES,
    }
}

/// Input for creating a reservation.
#[derive(Debug, Clone)]
pub struct CreateReservationInput {
    /// Principal client.
    pub client_id: ClientId,
    /// Day of the session.
    pub date: NaiveDate,
    /// Start of the time window.
    pub start_time: Option<NaiveTime>,
    /// End of the time window.
    pub end_time: Option<NaiveTime>,
    /// Explicit duration; computed from the window when `None` or zero.
    pub duration_minutes: Option<u32>,
    /// Companion national IDs.
    pub companions: Vec<ClientId>,
}

/// Partial update for an existing reservation.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationInput {
    /// New session day.
    pub date: Option<NaiveDate>,
    /// New window start.
    pub start_time: Option<NaiveTime>,
    /// New window end.
    pub end_time: Option<NaiveTime>,
    /// Replacement companion list.
    pub companions: Option<Vec<ClientId>>,
}
