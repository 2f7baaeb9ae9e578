use crate::error::{Result, SeatCounterError};
use std::fmt;
use std::str::FromStr;

/// Shortest row a `SeatRow` accepts.
pub const MIN_SEATS: usize = 1;
/// Longest row a `SeatRow` accepts.
pub const MAX_SEATS: usize = 10_000;

/// State of one position in a seat row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Empty,
    Occupied,
}

impl Seat {
    /// Parses a marker character, '0' for empty and '1' for occupied.
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '0' => Some(Seat::Empty),
            '1' => Some(Seat::Occupied),
            _ => None,
        }
    }

    /// The marker character for this seat state.
    pub fn marker(self) -> char {
        match self {
            Seat::Empty => '0',
            Seat::Occupied => '1',
        }
    }

    pub fn is_occupied(self) -> bool {
        matches!(self, Seat::Occupied)
    }
}

/// A validated row of seats, `MIN_SEATS` to `MAX_SEATS` positions long.
///
/// Rows only come out of the validating constructors, so downstream code
/// never re-checks lengths or markers. The row itself is immutable; the
/// availability scan works on indices or on its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    seats: Vec<Seat>,
}

impl SeatRow {
    /// Builds a row from already-typed seats, enforcing the length bounds.
    ///
    /// # Errors
    /// `EmptyRow` for zero seats, `RowTooLong` for more than `MAX_SEATS`.
    pub fn new(seats: Vec<Seat>) -> Result<Self> {
        if seats.len() < MIN_SEATS {
            return Err(SeatCounterError::EmptyRow);
        }
        if seats.len() > MAX_SEATS {
            return Err(SeatCounterError::RowTooLong { len: seats.len() });
        }
        Ok(Self { seats })
    }

    /// Rebuilds a row whose seats were derived from an already-validated
    /// row, skipping the length checks.
    pub(crate) fn from_validated(seats: Vec<Seat>) -> Self {
        debug_assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&seats.len()),
            "from_validated called with an out-of-bounds length {}",
            seats.len()
        );
        Self { seats }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn get(&self, index: usize) -> Option<Seat> {
        self.seats.get(index).copied()
    }

    /// Number of seats already taken.
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }
}

impl FromStr for SeatRow {
    type Err = SeatCounterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut seats = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            match Seat::from_marker(c) {
                Some(seat) => seats.push(seat),
                None => return Err(SeatCounterError::InvalidMarker { position, found: c }),
            }
        }
        Self::new(seats)
    }
}

impl fmt::Display for SeatRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seat in &self.seats {
            write!(f, "{}", seat.marker())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_row() {
        let row: SeatRow = "10001".parse().unwrap();
        assert_eq!(row.len(), 5);
        assert!(!row.is_empty());
        assert_eq!(row.occupied_count(), 2);
        assert_eq!(row.get(0), Some(Seat::Occupied));
        assert_eq!(row.get(1), Some(Seat::Empty));
        assert_eq!(row.get(5), None);
    }

    #[test]
    fn test_parse_single_seat_rows() {
        let open: SeatRow = "0".parse().unwrap();
        assert_eq!(open.seats(), &[Seat::Empty]);

        let taken: SeatRow = "1".parse().unwrap();
        assert_eq!(taken.seats(), &[Seat::Occupied]);
    }

    #[test]
    fn test_parse_rejects_invalid_marker() {
        match "10201".parse::<SeatRow>().unwrap_err() {
            SeatCounterError::InvalidMarker { position, found } => {
                assert_eq!(position, 2);
                assert_eq!(found, '2');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_leading_whitespace() {
        match " 10001".parse::<SeatRow>().unwrap_err() {
            SeatCounterError::InvalidMarker { position, found } => {
                assert_eq!(position, 0);
                assert_eq!(found, ' ');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            "".parse::<SeatRow>(),
            Err(SeatCounterError::EmptyRow)
        ));
    }

    #[test]
    fn test_parse_rejects_overlong_row() {
        let input = "0".repeat(MAX_SEATS + 1);
        assert!(matches!(
            input.parse::<SeatRow>(),
            Err(SeatCounterError::RowTooLong { len }) if len == MAX_SEATS + 1
        ));
    }

    #[test]
    fn test_parse_accepts_maximum_length() {
        let input = "01".repeat(MAX_SEATS / 2);
        let row: SeatRow = input.parse().unwrap();
        assert_eq!(row.len(), MAX_SEATS);
        assert_eq!(row.occupied_count(), MAX_SEATS / 2);
    }

    #[test]
    fn test_new_validates_bounds() {
        assert!(SeatRow::new(vec![]).is_err());
        assert!(SeatRow::new(vec![Seat::Empty]).is_ok());
        assert!(SeatRow::new(vec![Seat::Empty; MAX_SEATS]).is_ok());
        assert!(SeatRow::new(vec![Seat::Empty; MAX_SEATS + 1]).is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for input in ["10001", "0101", "0", "1", "00000", "1111"] {
            let row: SeatRow = input.parse().unwrap();
            assert_eq!(row.to_string(), input);
        }
    }

    #[test]
    fn test_seat_marker_round_trip() {
        assert_eq!(Seat::from_marker('0'), Some(Seat::Empty));
        assert_eq!(Seat::from_marker('1'), Some(Seat::Occupied));
        assert_eq!(Seat::from_marker('2'), None);
        assert_eq!(Seat::from_marker(' '), None);
        assert_eq!(Seat::Empty.marker(), '0');
        assert_eq!(Seat::Occupied.marker(), '1');
    }
}
