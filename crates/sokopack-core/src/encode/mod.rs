// crates/sokopack-core/src/encode/mod.rs

mod wall_row;

pub use wall_row::WallRowAccumulator;

use crate::coord::PackedCoord;
use crate::error::{Result, SokoError};
use crate::grid::{align_row, Cell, LevelGrid};
use crate::render::DataBlock;
use crate::validate::{eligibility, validate_shape, Eligibility, SkipReason};

/// What to do with symbols outside `# .$*@+`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SymbolPolicy {
    /// Unknown symbols are floor.
    #[default]
    Permissive,
    /// Unknown symbols fail the encode.
    Strict,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub symbol_policy: SymbolPolicy,
}

impl EncodeOptions {
    pub fn strict() -> Self {
        Self {
            symbol_policy: SymbolPolicy::Strict,
        }
    }
}

/// Packed level stream.
///
/// Layout:
/// wall_count:u8
/// walls[wall_count]     (one byte per 8-column block, row-major)
/// box_count:u8
/// boxes[box_count]      (PackedCoord)
/// goals[..]             (PackedCoord, no count prefix)
/// player[..]            (PackedCoord, no count prefix)
///
/// Goal/player boundaries are not recoverable from the stream alone;
/// readers need the goal count out of band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedLevel {
    bytes: Vec<u8>,
    walls: usize,
    boxes: usize,
    goals: usize,
    player: usize,
}

impl EncodedLevel {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn walls(&self) -> &[u8] {
        &self.bytes[1..1 + self.walls]
    }

    pub fn boxes(&self) -> &[u8] {
        let start = 2 + self.walls;
        &self.bytes[start..start + self.boxes]
    }

    pub fn goals(&self) -> &[u8] {
        let start = 2 + self.walls + self.boxes;
        &self.bytes[start..start + self.goals]
    }

    pub fn player(&self) -> &[u8] {
        let start = 2 + self.walls + self.boxes + self.goals;
        &self.bytes[start..start + self.player]
    }

    pub fn goal_count(&self) -> usize {
        self.goals
    }

    pub fn player_count(&self) -> usize {
        self.player
    }

    /// Render as a DATA block (data line + sentinel line).
    pub fn render(&self, block: &DataBlock) -> String {
        block.render(&self.bytes)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Encoded(EncodedLevel),
    Skipped(SkipReason),
}

/// Segment buffers filled by one scan. Owned by a single encode call.
#[derive(Debug, Default)]
struct Segments {
    walls: Vec<u8>,
    boxes: Vec<u8>,
    goals: Vec<u8>,
    player: Vec<u8>,
}

impl Segments {
    fn scan_row(&mut self, row: &str, r: usize, policy: SymbolPolicy) -> Result<()> {
        let mut wall_bits = WallRowAccumulator::new();
        for (c, sym) in row.chars().enumerate() {
            let value = PackedCoord::pack(c, r).byte();
            let cell = match (Cell::from_symbol(sym), policy) {
                (Some(cell), _) => cell,
                (None, SymbolPolicy::Permissive) => Cell::Floor,
                (None, SymbolPolicy::Strict) => {
                    return Err(SokoError::UnknownSymbol {
                        row: r,
                        col: c,
                        symbol: sym,
                    })
                }
            };

            // compound cells land in two segments
            if cell.is_box() {
                self.boxes.push(value);
            }
            if cell.is_goal() {
                self.goals.push(value);
            }
            if cell.is_player() {
                self.player.push(value);
            }

            wall_bits.push(c, cell == Cell::Wall, &mut self.walls);
        }
        wall_bits.finish(&mut self.walls);
        Ok(())
    }

    fn finish(self) -> Result<EncodedLevel> {
        let wall_count = count_prefix("wall", self.walls.len())?;
        let box_count = count_prefix("box", self.boxes.len())?;

        let total = 2 + self.walls.len() + self.boxes.len() + self.goals.len() + self.player.len();
        let mut bytes = Vec::with_capacity(total);
        bytes.push(wall_count);
        bytes.extend_from_slice(&self.walls);
        bytes.push(box_count);
        bytes.extend_from_slice(&self.boxes);
        bytes.extend_from_slice(&self.goals);
        bytes.extend_from_slice(&self.player);

        Ok(EncodedLevel {
            bytes,
            walls: self.walls.len(),
            boxes: self.boxes.len(),
            goals: self.goals.len(),
            player: self.player.len(),
        })
    }
}

#[inline]
fn count_prefix(segment: &'static str, len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| SokoError::SegmentOverflow { segment, len })
}

/// Encode one level with default (permissive) options.
pub fn encode(grid: &LevelGrid) -> Result<EncodedLevel> {
    encode_with(grid, &EncodeOptions::default())
}

/// Encode one level. Ineligible grids (>= 16 in either dimension) are an error here;
/// use [`encode_or_skip`] to treat them as a skip.
pub fn encode_with(grid: &LevelGrid, opts: &EncodeOptions) -> Result<EncodedLevel> {
    if let Eligibility::Ineligible(reason) = eligibility(grid) {
        return Err(SokoError::Ineligible {
            width: reason.width,
            height: reason.height,
        });
    }
    validate_shape(grid)?;

    let mut seg = Segments::default();
    for r in 0..grid.height {
        let row = align_row(grid.row(r), grid.width);
        seg.scan_row(&row, r, opts.symbol_policy)?;
    }
    seg.finish()
}

pub fn encode_or_skip(grid: &LevelGrid, opts: &EncodeOptions) -> Result<Outcome> {
    match eligibility(grid) {
        Eligibility::Ineligible(reason) => Ok(Outcome::Skipped(reason)),
        Eligibility::Eligible => encode_with(grid, opts).map(Outcome::Encoded),
    }
}
