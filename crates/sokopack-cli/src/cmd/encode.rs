// crates/sokopack-cli/src/cmd/encode.rs

use std::collections::HashSet;
use std::io::Write;

use anyhow::Context;
use clap::Args;
use log::{debug, warn};
use sokopack_core::checksum::level_id_hex;
use sokopack_core::{encode_or_skip, DataBlock, EncodeOptions, Outcome, SymbolPolicy};

use crate::io::level_file;

const RULE: &str = "--------------------------------";

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Plain-text level file (levels separated by blank lines, ';' comments)
    #[arg(long)]
    pub r#in: String,

    /// Output path for the DATA blocks. Stdout if omitted.
    #[arg(long)]
    pub out: Option<String>,

    /// Fail a level on symbols outside "# .$*@+" instead of reading them as floor
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Line number of the first DATA line in each block
    #[arg(long, default_value_t = 1000)]
    pub first_line: u32,

    /// Line number increment between the data line and the sentinel line
    #[arg(long, default_value_t = 1)]
    pub step: u32,

    /// Drop levels whose encoding is byte-identical to an earlier one
    #[arg(long, default_value_t = false)]
    pub dedupe: bool,

    /// Print each level's rows above its DATA block
    #[arg(long, default_value_t = false)]
    pub echo: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let levels = level_file::load_levels(&args.r#in)?;

    let opts = EncodeOptions {
        symbol_policy: if args.strict {
            SymbolPolicy::Strict
        } else {
            SymbolPolicy::Permissive
        },
    };
    let block = DataBlock {
        first_line: args.first_line,
        step: args.step,
    };

    let mut text = String::new();
    let mut seen: HashSet<String> = HashSet::new();
    let (mut encoded, mut skipped, mut duplicates, mut failed) = (0usize, 0usize, 0usize, 0usize);

    for (idx, grid) in levels.iter().enumerate() {
        let label = grid
            .title
            .clone()
            .unwrap_or_else(|| format!("#{}", idx + 1));

        let lvl = match encode_or_skip(grid, &opts) {
            Ok(Outcome::Encoded(lvl)) => lvl,
            Ok(Outcome::Skipped(reason)) => {
                warn!("skip level {label}: {reason}");
                skipped += 1;
                continue;
            }
            Err(e) => {
                warn!("encode failed for level {label}: {e}");
                failed += 1;
                continue;
            }
        };

        let id = level_id_hex(&lvl);
        if args.dedupe && !seen.insert(id.clone()) {
            debug!("duplicate level {label}: id={id}");
            duplicates += 1;
            continue;
        }

        debug!(
            "level {label}: {}x{} bytes={} walls={} boxes={} goals={} id={}",
            grid.width,
            grid.height,
            lvl.len(),
            lvl.walls().len(),
            lvl.boxes().len(),
            lvl.goal_count(),
            id
        );

        if args.echo {
            for row in &grid.rows {
                text.push_str(row);
                text.push('\n');
            }
        }
        text.push_str(&lvl.render(&block));
        text.push('\n');
        text.push_str(RULE);
        text.push('\n');
        encoded += 1;
    }

    match args.out.as_deref() {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("write data {path}"))?;
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("write data to stdout")?;
        }
    }

    eprintln!(
        "encode done: in={} levels={} encoded={} skipped={} duplicates={} failed={} out={}",
        args.r#in,
        levels.len(),
        encoded,
        skipped,
        duplicates,
        failed,
        args.out.as_deref().unwrap_or("-")
    );

    if failed > 0 {
        anyhow::bail!("{failed} level(s) failed to encode");
    }
    Ok(())
}
