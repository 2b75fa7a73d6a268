// crates/sokopack-core/src/validate.rs

use crate::error::{Result, SokoError};
use crate::grid::LevelGrid;

/// Coordinates are packed into one nibble each, so both dimensions must stay below this.
pub const MAX_DIM: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SkipReason {
    pub width: usize,
    pub height: usize,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} exceeds {}x{} coordinate range",
            self.width,
            self.height,
            MAX_DIM - 1,
            MAX_DIM - 1
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(SkipReason),
}

pub fn eligibility(grid: &LevelGrid) -> Eligibility {
    if grid.width < MAX_DIM && grid.height < MAX_DIM {
        Eligibility::Eligible
    } else {
        Eligibility::Ineligible(SkipReason {
            width: grid.width,
            height: grid.height,
        })
    }
}

/// Rows beyond `height`, or wider than `width`, cannot be encoded without
/// truncation or nibble overflow.
pub fn validate_shape(grid: &LevelGrid) -> Result<()> {
    if grid.rows.len() > grid.height {
        return Err(SokoError::TooManyRows {
            rows: grid.rows.len(),
            height: grid.height,
        });
    }
    for (row, line) in grid.rows.iter().enumerate() {
        let len = line.chars().count();
        if len > grid.width {
            return Err(SokoError::RowTooWide {
                row,
                len,
                width: grid.width,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_is_the_largest_eligible_dimension() {
        let ok = LevelGrid::new(15, 15, vec![]);
        assert_eq!(eligibility(&ok), Eligibility::Eligible);

        let wide = LevelGrid::new(16, 3, vec![]);
        assert_eq!(
            eligibility(&wide),
            Eligibility::Ineligible(SkipReason { width: 16, height: 3 })
        );

        let tall = LevelGrid::new(3, 20, vec![]);
        assert!(matches!(eligibility(&tall), Eligibility::Ineligible(_)));
    }

    #[test]
    fn shape_rejects_overlong_rows_and_extra_rows() {
        let g = LevelGrid::new(3, 2, vec!["###".into(), "#..#".into()]);
        assert_eq!(
            validate_shape(&g),
            Err(SokoError::RowTooWide { row: 1, len: 4, width: 3 })
        );

        let g = LevelGrid::new(3, 1, vec!["###".into(), "###".into()]);
        assert_eq!(
            validate_shape(&g),
            Err(SokoError::TooManyRows { rows: 2, height: 1 })
        );

        let g = LevelGrid::new(4, 3, vec!["##".into()]);
        assert!(validate_shape(&g).is_ok());
    }
}
