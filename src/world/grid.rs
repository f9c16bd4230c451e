use once_cell::sync::Lazy;
use thiserror::Error;

/// Wall material stored in a map cell.
///
/// *Guaranteed* stable for the lifetime of the grid; `0` is reserved for
/// walkable floor, every positive id names a wall surface.
pub type MaterialId = u8;

/// Cell value of walkable space.
pub const OPEN: MaterialId = 0;

/// Things that can go wrong when building a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,

    #[error("row {row} holds {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Rectangular table of wall cells, row-major, immutable once built.
///
/// All spatial queries are total: anything outside the table reads as
/// `None` / not walkable, so callers never index past the border even on
/// maps without an enclosing wall.
#[derive(Debug)]
pub struct MapGrid {
    width: usize,
    height: usize,
    cells: Vec<MaterialId>,
}

impl MapGrid {
    /// Build a grid from row slices (row 0 = north edge).
    pub fn from_rows(rows: &[&[MaterialId]]) -> Result<Self, MapError> {
        let height = rows.len();
        if height == 0 || rows[0].is_empty() {
            return Err(MapError::Empty);
        }
        let width = rows[0].len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    got: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Material at `(x, y)`, or `None` outside the table.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<MaterialId> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// True when `(x, y)` lies inside the grid and is walkable.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(OPEN)
    }
}

/// Map the binaries start on: a walled 12×12 room with one pillar of
/// every palette material.
pub fn builtin_map() -> &'static MapGrid {
    static BUILTIN: Lazy<MapGrid> = Lazy::new(|| {
        MapGrid::from_rows(&[
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            &[1, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 1],
            &[1, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 1],
            &[1, 0, 0, 7, 0, 0, 0, 0, 8, 0, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ])
        .expect("builtin map table is rectangular")
    });
    &BUILTIN
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_rejected() {
        let err = MapGrid::from_rows(&[&[1, 1, 1], &[1, 1]]).unwrap_err();
        assert_eq!(
            err,
            MapError::Ragged {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn empty_table_rejected() {
        assert_eq!(MapGrid::from_rows(&[]).unwrap_err(), MapError::Empty);
        assert_eq!(MapGrid::from_rows(&[&[]]).unwrap_err(), MapError::Empty);
    }

    #[test]
    fn cell_lookup_is_total() {
        let g = MapGrid::from_rows(&[&[1, 1], &[1, 0]]).unwrap();
        assert_eq!(g.cell(1, 1), Some(OPEN));
        assert_eq!(g.cell(0, 0), Some(1));
        assert_eq!(g.cell(-1, 0), None);
        assert_eq!(g.cell(0, 2), None);
        assert!(g.is_open(1, 1));
        assert!(!g.is_open(2, 1));
        assert!(!g.is_open(-1, -1));
    }

    #[test]
    fn builtin_map_has_solid_border() {
        let g = builtin_map();
        assert_eq!((g.width(), g.height()), (12, 12));
        for x in 0..g.width() as i32 {
            assert_ne!(g.cell(x, 0), Some(OPEN));
            assert_ne!(g.cell(x, g.height() as i32 - 1), Some(OPEN));
        }
        for y in 0..g.height() as i32 {
            assert_ne!(g.cell(0, y), Some(OPEN));
            assert_ne!(g.cell(g.width() as i32 - 1, y), Some(OPEN));
        }
    }
}
