use std::io::{self, Write};

// Render the terrain grid, top row first.
// Row r, column c is '1' while r + 1 is still below the column's height,
// '0' once it is not.
pub fn render_rows(heights: &[u32], field_height: u32) -> Vec<String> {
    (0..field_height)
        .map(|r| {
            heights
                .iter()
                .map(|&h| if r + 1 < h { '1' } else { '0' })
                .collect()
        })
        .collect()
}

// Write the grid as newline-terminated rows
pub fn write_field<W: Write>(mut out: W, heights: &[u32], field_height: u32) -> io::Result<()> {
    for row in render_rows(heights, field_height) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}
