// crates/sokopack-core/src/encode/wall_row.rs

const LEAD_BIT: u8 = 0x80;
const BLOCK_COLS: usize = 8;

/// Per-row wall bit accumulator.
///
/// Bit order is MSB-first and block-relative:
/// - column 0 of each 8-column block lands in bit 7, column 1 in bit 6, ...
/// - on every nonzero multiple of 8 the current byte is flushed and the
///   lead bit resets to 0x80.
/// - the lead bit shifts right after each column and stops at 0.
#[derive(Debug)]
pub struct WallRowAccumulator {
    acc: u8,
    bit: u8,
    cols: usize,
}

impl WallRowAccumulator {
    pub fn new() -> Self {
        Self {
            acc: 0,
            bit: LEAD_BIT,
            cols: 0,
        }
    }

    /// Feed column `col` (scanned left to right from 0).
    pub fn push(&mut self, col: usize, is_wall: bool, out: &mut Vec<u8>) {
        if col > 0 && col % BLOCK_COLS == 0 {
            out.push(self.acc);
            self.acc = 0;
            self.bit = LEAD_BIT;
        }
        if is_wall {
            self.acc |= self.bit;
        }
        self.bit >>= 1;
        self.cols += 1;
    }

    /// Flush the trailing (possibly partial) block. A row with no columns emits nothing.
    pub fn finish(self, out: &mut Vec<u8>) {
        if self.cols > 0 {
            out.push(self.acc);
        }
    }
}

impl Default for WallRowAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(bits: &[bool]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut acc = WallRowAccumulator::new();
        for (c, &w) in bits.iter().enumerate() {
            acc.push(c, w, &mut out);
        }
        acc.finish(&mut out);
        out
    }

    #[test]
    fn first_column_is_msb() {
        assert_eq!(run(&[true]), vec![0b1000_0000]);
        assert_eq!(run(&[false, true]), vec![0b0100_0000]);
        assert_eq!(run(&[true; 5]), vec![0b1111_1000]);
    }

    #[test]
    fn splits_into_blocks_of_eight() {
        let mut bits = vec![true; 8];
        bits.extend([false, true, true]);
        assert_eq!(run(&bits), vec![0xFF, 0b0110_0000]);

        assert_eq!(run(&[true; 8]), vec![0xFF]);
        assert_eq!(run(&[true; 9]), vec![0xFF, 0x80]);
    }

    #[test]
    fn empty_row_emits_nothing() {
        assert!(run(&[]).is_empty());
    }
}
