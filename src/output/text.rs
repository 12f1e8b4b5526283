use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

/// Writes markup as-is; it already carries its own trailing newline.
pub fn print_block(block: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(block.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
