// crates/sokopack-core/src/grid/align.rs
//
// Right-pad a row with floor so the scanner sees at least `width` columns.
// Existing content is never truncated.

pub const FLOOR: char = ' ';

pub fn align_row(row: &str, width: usize) -> String {
    let len = row.chars().count();
    let pad = width.saturating_sub(len);
    let mut out = String::with_capacity(row.len() + pad);
    out.push_str(row);
    out.extend(std::iter::repeat(FLOOR).take(pad));
    out
}
