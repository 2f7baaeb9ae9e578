use anyhow::{Context, Result};
use log::debug;
use seat_counter::{SeatRow, count_available};
use std::io::{self, BufRead};

fn main() -> Result<()> {
    env_logger::init();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read the seat row from stdin")?;

    // Only the line terminator is stripped; any other stray character is
    // invalid input and should be reported with its position.
    let markers = line.trim_end_matches(['\r', '\n']);
    let row: SeatRow = markers.parse()?;
    debug!(
        "Parsed a row of {} seats, {} already occupied",
        row.len(),
        row.occupied_count()
    );

    println!("{}", count_available(&row));
    Ok(())
}
