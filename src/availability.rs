//! The greedy availability scan over a seat row.
//!
//! A single left-to-right pass decides, for every empty seat, whether one
//! more spectator can take it without sitting next to anyone, existing or
//! newly placed. Taking every such seat as soon as it is reachable is
//! optimal: deferring a placement can never buy more than one placement
//! further right.

use crate::row::{Seat, SeatRow};

/// Maximum number of additional spectators that can be seated in `row`.
///
/// Runs the greedy scan without touching the input: instead of marking
/// placements in a working copy, it tracks the index of the most recent
/// occupied seat, original or placed. An empty seat is taken when its left
/// neighbor is not that index and its right neighbor is not originally
/// occupied; a missing neighbor at either end of the row counts as empty.
/// Right-hand checks only ever need the original values because placement
/// proceeds strictly left to right.
///
/// O(n) time, O(1) additional space, pure.
pub fn count_available(row: &SeatRow) -> usize {
    let seats = row.seats();
    let mut placed = 0;
    let mut last_occupied: Option<usize> = None;

    for (index, seat) in seats.iter().enumerate() {
        if seat.is_occupied() {
            last_occupied = Some(index);
            continue;
        }

        let left_free = match last_occupied {
            Some(prev) => prev + 1 != index,
            None => true,
        };
        let right_free = seats.get(index + 1).is_none_or(|next| !next.is_occupied());

        if left_free && right_free {
            placed += 1;
            last_occupied = Some(index);
        }
    }

    placed
}

/// The row after greedily seating every additional spectator.
///
/// Same pass as `count_available`, materialized on a working copy: every
/// seat the scan takes is marked occupied so that later neighbor checks see
/// it. For any row `r`, the number of newly occupied seats equals
/// `count_available(&r)`.
pub fn fill_available(row: &SeatRow) -> SeatRow {
    let mut seats = row.seats().to_vec();

    for index in 0..seats.len() {
        if seats[index].is_occupied() {
            continue;
        }
        let left_free = index == 0 || !seats[index - 1].is_occupied();
        let right_free = index + 1 == seats.len() || !seats[index + 1].is_occupied();
        if left_free && right_free {
            seats[index] = Seat::Occupied;
        }
    }

    SeatRow::from_validated(seats)
}
