//! Measurement — one reading event with three gas sensor values.

use serde::{Deserialize, Serialize};

/// A persisted reading as returned by the store.
///
/// `datetime` is the text rendering of the timestamp the database assigned at
/// insertion time. It is always populated on rows read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub lng: i32,
    pub lpg: i32,
    pub co: i32,
    pub datetime: String,
}

impl Measurement {
    /// The sensor readings of this row, without the timestamp.
    ///
    /// Handy for comparing a stored row against the payload that produced
    /// it, since the database-assigned `datetime` is not known up front.
    #[must_use]
    pub fn readings(&self) -> NewMeasurement {
        NewMeasurement {
            lng: self.lng,
            lpg: self.lpg,
            co: self.co,
        }
    }
}

/// Payload accepted when recording a new reading.
///
/// A `datetime` key in the incoming JSON is ignored: the timestamp is always
/// assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewMeasurement {
    pub lng: i32,
    pub lpg: i32,
    pub co: i32,
}

impl NewMeasurement {
    #[must_use]
    pub fn new(lng: i32, lpg: i32, co: i32) -> Self {
        Self { lng, lpg, co }
    }

    /// Attach the database-assigned timestamp, producing the stored row.
    #[must_use]
    pub fn stamped(self, datetime: impl Into<String>) -> Measurement {
        Measurement {
            lng: self.lng,
            lpg: self.lpg,
            co: self.co,
            datetime: datetime.into(),
        }
    }
}
