// crates/sokopack-cli/src/cmd/inspect.rs

use anyhow::Context;
use clap::Args;
use sokopack_core::decode::decode;
use sokopack_core::render::parse_data_block;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// File holding one rendered DATA block (data line + "DATA -1" line)
    #[arg(long)]
    pub data: String,

    /// Level width; fixes how many wall bytes make up one row
    #[arg(long)]
    pub width: usize,

    /// Goal count; the stream does not carry it
    #[arg(long)]
    pub goals: usize,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let text =
        std::fs::read_to_string(&args.data).with_context(|| format!("read data {}", args.data))?;
    let bytes = parse_data_block(&text).with_context(|| format!("parse data {}", args.data))?;
    let level = decode(&bytes, args.width, args.goals)
        .with_context(|| format!("decode level from {}", args.data))?;

    eprintln!("--- inspect ---");
    eprintln!("file        = {}", args.data);
    eprintln!("bytes       = {}", bytes.len());
    eprintln!("size        = {}x{}", level.width, level.height);
    eprintln!("wall_bytes  = {}", level.walls.len());
    eprintln!("boxes       = {}", level.boxes.len());
    eprintln!("goals       = {}", level.goals.len());
    eprintln!("player      = {}", level.player.len());
    if level.boxes.len() != level.goals.len() {
        eprintln!("WARNING: box count != goal count");
    }

    for row in level.to_trimmed_rows() {
        println!("{row}");
    }

    Ok(())
}
