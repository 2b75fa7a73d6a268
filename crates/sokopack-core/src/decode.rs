// crates/sokopack-core/src/decode.rs
//
// Inverse of `encode`. The stream carries no goal count, so the caller
// supplies it; everything after the goals is player.

use crate::coord::PackedCoord;
use crate::error::{Result, SokoError};
use crate::grid::{Cell, FLOOR};
use crate::validate::MAX_DIM;

#[inline]
pub fn wall_bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedLevel {
    pub width: usize,
    pub height: usize,
    pub walls: Vec<u8>,
    pub boxes: Vec<PackedCoord>,
    pub goals: Vec<PackedCoord>,
    pub player: Vec<PackedCoord>,
}

impl DecodedLevel {
    pub fn wall_at(&self, col: usize, row: usize) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let b = self.walls[row * wall_bytes_per_row(self.width) + col / 8];
        (b >> (7 - (col % 8))) & 1 == 1
    }

    /// Rebuild the grid picture, `width` characters per row.
    pub fn to_rows(&self) -> Vec<String> {
        let mut cells: Vec<Vec<Cell>> = (0..self.height)
            .map(|r| {
                (0..self.width)
                    .map(|c| if self.wall_at(c, r) { Cell::Wall } else { Cell::Floor })
                    .collect()
            })
            .collect();

        for g in &self.goals {
            cells[g.row() as usize][g.col() as usize] = Cell::Goal;
        }
        for b in &self.boxes {
            let cell = &mut cells[b.row() as usize][b.col() as usize];
            *cell = if cell.is_goal() { Cell::BoxOnGoal } else { Cell::Box };
        }
        for p in &self.player {
            let cell = &mut cells[p.row() as usize][p.col() as usize];
            *cell = if cell.is_goal() { Cell::PlayerOnGoal } else { Cell::Player };
        }

        cells
            .into_iter()
            .map(|row| row.into_iter().map(Cell::symbol).collect())
            .collect()
    }

    /// Like [`to_rows`](Self::to_rows) with trailing floor trimmed.
    pub fn to_trimmed_rows(&self) -> Vec<String> {
        self.to_rows()
            .into_iter()
            .map(|r| r.trim_end_matches(FLOOR).to_string())
            .collect()
    }
}

pub fn decode(bytes: &[u8], width: usize, goal_count: usize) -> Result<DecodedLevel> {
    if width >= MAX_DIM {
        return Err(SokoError::Format(format!(
            "width {width} outside encodable range 0..{MAX_DIM}"
        )));
    }

    let mut i = 0usize;

    let wall_count = read_u8(bytes, &mut i)? as usize;
    let walls = read_slice(bytes, &mut i, wall_count)?.to_vec();
    let box_count = read_u8(bytes, &mut i)? as usize;
    let boxes = read_coords(bytes, &mut i, box_count)?;
    let goals = read_coords(bytes, &mut i, goal_count)?;
    let player: Vec<PackedCoord> = bytes[i..].iter().copied().map(PackedCoord).collect();

    let per_row = wall_bytes_per_row(width);
    let height = if per_row == 0 {
        if wall_count != 0 {
            return Err(SokoError::Format(format!(
                "width 0 but {wall_count} wall bytes"
            )));
        }
        0
    } else {
        if wall_count % per_row != 0 {
            return Err(SokoError::Format(format!(
                "{wall_count} wall bytes is not a multiple of {per_row} (width {width})"
            )));
        }
        wall_count / per_row
    };

    for p in boxes.iter().chain(&goals).chain(&player) {
        if p.col() as usize >= width || p.row() as usize >= height {
            return Err(SokoError::Format(format!(
                "coordinate col={} row={} outside {}x{}",
                p.col(),
                p.row(),
                width,
                height
            )));
        }
    }

    Ok(DecodedLevel {
        width,
        height,
        walls,
        boxes,
        goals,
        player,
    })
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(SokoError::Format(format!(
            "unexpected eof: need {} bytes at offset {}, have {}",
            n,
            i,
            bytes.len()
        )));
    }
    Ok(())
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    need(bytes, *i, 1)?;
    let v = bytes[*i];
    *i += 1;
    Ok(v)
}

fn read_slice<'a>(bytes: &'a [u8], i: &mut usize, n: usize) -> Result<&'a [u8]> {
    need(bytes, *i, n)?;
    let s = &bytes[*i..*i + n];
    *i += n;
    Ok(s)
}

fn read_coords(bytes: &[u8], i: &mut usize, n: usize) -> Result<Vec<PackedCoord>> {
    Ok(read_slice(bytes, i, n)?.iter().copied().map(PackedCoord).collect())
}
