// crates/sokopack-core/src/grid/mod.rs

mod align;

pub use align::{align_row, FLOOR};

/// Classified cell of a level grid.
///
/// `BoxOnGoal` and `PlayerOnGoal` are compound: they land in two segments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
}

impl Cell {
    /// Map a grid symbol to its cell kind. `None` for symbols outside the set.
    #[inline]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Floor),
            '.' => Some(Cell::Goal),
            '$' => Some(Cell::Box),
            '*' => Some(Cell::BoxOnGoal),
            '@' => Some(Cell::Player),
            '+' => Some(Cell::PlayerOnGoal),
            _ => None,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => FLOOR,
            Cell::Goal => '.',
            Cell::Box => '$',
            Cell::BoxOnGoal => '*',
            Cell::Player => '@',
            Cell::PlayerOnGoal => '+',
        }
    }

    #[inline]
    pub fn is_goal(self) -> bool {
        matches!(self, Cell::Goal | Cell::BoxOnGoal | Cell::PlayerOnGoal)
    }

    #[inline]
    pub fn is_box(self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnGoal)
    }

    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnGoal)
    }
}

/// One level as handed over by a level source: rows top to bottom plus the
/// declared bounding rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrid {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    /// Free-form label carried along for reporting; never encoded.
    pub title: Option<String>,
}

impl LevelGrid {
    pub fn new(width: usize, height: usize, rows: Vec<String>) -> Self {
        Self {
            width,
            height,
            rows,
            title: None,
        }
    }

    /// Build a grid whose width/height are taken from the rows themselves
    /// (longest row, row count).
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        Self::new(width, height, rows)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Row `r`, or the empty row when the source supplied fewer rows than `height`.
    #[inline]
    pub fn row(&self, r: usize) -> &str {
        self.rows.get(r).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_roundtrip_through_cell() {
        for c in ['#', ' ', '.', '$', '*', '@', '+'] {
            let cell = Cell::from_symbol(c).unwrap();
            assert_eq!(cell.symbol(), c);
        }
        assert_eq!(Cell::from_symbol('-'), None);
        assert_eq!(Cell::from_symbol('_'), None);
    }

    #[test]
    fn compound_cells_have_two_roles() {
        assert!(Cell::BoxOnGoal.is_box() && Cell::BoxOnGoal.is_goal());
        assert!(Cell::PlayerOnGoal.is_player() && Cell::PlayerOnGoal.is_goal());
        assert!(!Cell::Wall.is_goal());
    }

    #[test]
    fn from_rows_measures_longest_row() {
        let g = LevelGrid::from_rows(["###", "#@.##", "#"]);
        assert_eq!(g.width, 5);
        assert_eq!(g.height, 3);
        assert_eq!(g.row(7), "");
    }
}
