//! Given one row of seats as '0' (empty) and '1' (occupied) markers, work
//! out how many more spectators can sit down without anyone ending up
//! directly next to anyone else, and without moving existing occupants.

pub mod availability;
pub mod error;
pub mod row;

pub use availability::{count_available, fill_available};
pub use error::{Result, SeatCounterError};
pub use row::{MAX_SEATS, MIN_SEATS, Seat, SeatRow};
