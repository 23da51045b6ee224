use std::io::{self, Write};

use rand::Rng;

// One falling-block sequence: between 10 and 200 digits, each naming a
// block type in [0, block_types). The length draw and the digit draws all
// come from the same stream, in that order.
pub fn gen_column<R: Rng>(rng: &mut R, block_types: u32) -> String {
    assert!(
        (1..=10).contains(&block_types),
        "block types must be single-digit"
    );
    let cnt = rng.gen_range(10..=200);
    (0..cnt)
        .map(|_| (b'0' + rng.gen_range(0..block_types) as u8) as char)
        .collect()
}

// Write one sequence line per column
pub fn write_columns<W: Write, R: Rng>(
    mut out: W,
    rng: &mut R,
    field_width: u32,
    block_types: u32,
) -> io::Result<()> {
    for _ in 0..field_width {
        writeln!(out, "{}", gen_column(rng, block_types))?;
    }
    Ok(())
}
