use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use veldgen::{FieldParams, gen_heights, write_columns, write_field};

#[derive(Error, Debug)]
enum GenError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid seed `{0}`: expected an integer")]
    InvalidSeed(String),
}

fn run(seed_arg: &str) -> Result<(), GenError> {
    let seed: i64 = seed_arg
        .parse()
        .map_err(|_| GenError::InvalidSeed(seed_arg.to_string()))?;

    // Spread the seed over the 256-bit key, remaining bytes zero. The
    // seed-to-stream mapping is part of the output contract: generated
    // cases for a given seed must stay byte-identical across releases.
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&(seed as u64).to_le_bytes());

    // One stream drives the whole run: parameters first, then the height
    // noise, then the column sequences
    let mut rng = ChaCha8Rng::from_seed(key);
    let params = FieldParams::sample(&mut rng);
    info!("seed {seed}: {params:?}");

    print!("{}", params.report());

    let heights = gen_heights(
        &mut rng,
        params.field_width,
        params.min_height(),
        params.field_height,
        params.smoothness,
    );

    let mut field = BufWriter::new(File::create("speelveld.txt")?);
    write_field(&mut field, &heights, params.field_height)?;
    field.flush()?;
    info!("wrote speelveld.txt ({} rows)", params.field_height);

    let mut columns = BufWriter::new(File::create("kolommen.txt")?);
    write_columns(&mut columns, &mut rng, params.field_width, params.block_types)?;
    columns.flush()?;
    info!("wrote kolommen.txt ({} columns)", params.field_width);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        // Usage goes to stdout; the scripts driving this scrape stdout only
        println!("Usage: generate-field <seed>");
        return ExitCode::from(1);
    }

    match run(&args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("generate-field: {e}");
            ExitCode::from(1)
        }
    }
}
