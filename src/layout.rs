//! Periodic-table placement.
//!
//! Main-table elements sit at (period - 1, group - 1). The f-block series are
//! pulled out into two extra rows below the table, leaving row 7 as a gap.

use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::Element;

pub const GRID_ROWS: usize = 10;
pub const GRID_COLS: usize = 18;

pub const LANTHANIDE_ROW: usize = 8;
pub const ACTINIDE_ROW: usize = 9;

const LANTHANIDES: std::ops::RangeInclusive<u8> = 57..=71;
const ACTINIDES: std::ops::RangeInclusive<u8> = 89..=103;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

/// Cell an element belongs in, or `None` when its attributes fall outside
/// the 10 x 18 grid.
pub fn grid_position(element: &Element) -> Option<GridPosition> {
    let z = element.atomic_number;
    let (row, col) = if LANTHANIDES.contains(&z) {
        (LANTHANIDE_ROW, usize::from(z - LANTHANIDES.start()))
    } else if ACTINIDES.contains(&z) {
        (ACTINIDE_ROW, usize::from(z - ACTINIDES.start()))
    } else {
        // H (group 1) and He (group 18) land at the two ends of row 0
        // straight from their groups.
        let row = usize::from(element.period).checked_sub(1)?;
        let col = usize::from(element.group).checked_sub(1)?;
        (row, col)
    };

    (row < GRID_ROWS && col < GRID_COLS).then_some(GridPosition { row, col })
}

/// A fixed 10 x 18 table of borrowed elements.
#[derive(Debug, Clone)]
pub struct PeriodicGrid<'a> {
    cells: [[Option<&'a Element>; GRID_COLS]; GRID_ROWS],
}

impl<'a> PeriodicGrid<'a> {
    /// Places every element that has a valid position. Later elements win
    /// when two share a cell.
    pub fn build<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a Element>,
    {
        let mut cells = [[None; GRID_COLS]; GRID_ROWS];
        for element in elements {
            if let Some(pos) = grid_position(element) {
                cells[pos.row][pos.col] = Some(element);
            }
        }
        PeriodicGrid { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&'a Element> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn row(&self, row: usize) -> Option<&[Option<&'a Element>; GRID_COLS]> {
        self.cells.get(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<&'a Element>; GRID_COLS]> {
        self.cells.iter()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (GridPosition, &'a Element)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|e| (GridPosition { row, col }, e)))
        })
    }

    pub fn len(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells claimed by more than one element, as (row, col, (earlier Z, later Z)).
    pub fn collisions(elements: &[Element]) -> Vec<(usize, usize, (u8, u8))> {
        let mut seen: HashMap<GridPosition, u8> = HashMap::new();
        let mut out = Vec::new();
        for element in elements {
            let Some(pos) = grid_position(element) else {
                continue;
            };
            if let Some(previous) = seen.insert(pos, element.atomic_number) {
                out.push((pos.row, pos.col, (previous, element.atomic_number)));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn fixture(z: u8, symbol: &str, period: u8, group: u8) -> Element {
        let mut e = Catalog::builtin().elements[0].clone();
        e.atomic_number = z;
        e.symbol = symbol.to_string();
        e.period = period;
        e.group = group;
        e
    }

    #[test]
    fn test_main_table_positions() {
        for e in &Catalog::builtin().elements {
            if e.is_lanthanide() || e.is_actinide() {
                continue;
            }
            let pos = grid_position(e).expect("main-table element is placed");
            assert_eq!(pos.row, usize::from(e.period) - 1, "{}", e.symbol);
            assert_eq!(pos.col, usize::from(e.group) - 1, "{}", e.symbol);
            assert!(pos.row < GRID_ROWS && pos.col < GRID_COLS);
        }
    }

    #[test]
    fn test_f_block_rows() {
        for e in &Catalog::builtin().elements {
            let z = usize::from(e.atomic_number);
            if e.is_lanthanide() {
                assert_eq!(grid_position(e), Some(GridPosition { row: 8, col: z - 57 }));
            } else if e.is_actinide() {
                assert_eq!(grid_position(e), Some(GridPosition { row: 9, col: z - 89 }));
            }
        }
    }

    #[test]
    fn test_first_row_only_hydrogen_and_helium() {
        let catalog = Catalog::builtin();
        let subset: Vec<&Element> = catalog.elements.iter().take(2).collect();
        let grid = PeriodicGrid::build(subset);

        assert_eq!(grid.cell(0, 0).map(|e| e.symbol.as_str()), Some("H"));
        assert_eq!(grid.cell(0, 17).map(|e| e.symbol.as_str()), Some("He"));
        for col in 1..=16 {
            assert!(grid.cell(0, col).is_none(), "col {col} should be empty");
        }
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_full_table_fills_118_cells() {
        let grid = PeriodicGrid::build(&Catalog::builtin().elements);
        assert_eq!(grid.len(), 118);
        assert!(grid.row(7).unwrap().iter().all(Option::is_none));
        // group 3 of periods 6 and 7 is left for the f-block rows
        assert!(grid.cell(5, 2).is_none());
        assert!(grid.cell(6, 2).is_none());
        assert_eq!(grid.cell(8, 14).map(|e| e.symbol.as_str()), Some("Lu"));
        assert_eq!(grid.cell(9, 0).map(|e| e.symbol.as_str()), Some("Ac"));
    }

    #[test]
    fn test_out_of_range_is_dropped() {
        let bad = [fixture(1, "Xx", 0, 1), fixture(2, "Yy", 11, 1), fixture(3, "Zz", 2, 19)];
        for e in &bad {
            assert!(grid_position(e).is_none(), "{}", e.symbol);
        }
        assert!(PeriodicGrid::build(&bad).is_empty());
        assert!(PeriodicGrid::build(&bad).cell(42, 0).is_none());
    }

    #[test]
    fn test_collision_last_write_wins() {
        let pair = [fixture(1, "Aa", 2, 2), fixture(4, "Bb", 2, 2)];
        let grid = PeriodicGrid::build(&pair);
        assert_eq!(grid.cell(1, 1).map(|e| e.symbol.as_str()), Some("Bb"));
        assert_eq!(PeriodicGrid::collisions(&pair), vec![(1, 1, (1, 4))]);
    }

    #[test]
    fn test_occupied_is_row_major() {
        let grid = PeriodicGrid::build(&Catalog::builtin().elements);
        let positions: Vec<GridPosition> = grid.occupied().map(|(p, _)| p).collect();
        let mut sorted = positions.clone();
        sorted.sort_by_key(|p| (p.row, p.col));
        assert_eq!(positions, sorted);
    }
}
