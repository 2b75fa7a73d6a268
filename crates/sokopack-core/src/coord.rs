// crates/sokopack-core/src/coord.rs

/// Packed cell position: `(col << 4) | (row & 0x0F)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedCoord(pub u8);

impl PackedCoord {
    /// Columns and rows past 15 keep only their low nibble.
    #[inline]
    pub fn pack(col: usize, row: usize) -> Self {
        let c = (col & 0x0F) as u8;
        let r = (row & 0x0F) as u8;
        PackedCoord((c << 4) | r)
    }

    #[inline]
    pub fn col(self) -> u8 {
        (self.0 >> 4) & 0x0F
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 & 0x0F
    }

    #[inline]
    pub fn byte(self) -> u8 {
        self.0
    }
}
