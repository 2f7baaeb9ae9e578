use crate::row::MAX_SEATS;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeatCounterError>;

#[derive(Error, Debug)]
pub enum SeatCounterError {
    #[error("Invalid seat marker '{found}' at position {position}: expected '0' or '1'")]
    InvalidMarker { position: usize, found: char },

    #[error("Seat row is empty")]
    EmptyRow,

    #[error("Seat row has {len} seats, the maximum is {max}", max = MAX_SEATS)]
    RowTooLong { len: usize },
}
