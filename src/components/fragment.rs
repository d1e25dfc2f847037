use crate::{
    components::canvas::{Canvas, CanvasError},
    constants::scene,
};

/// A static drawing stamped onto the scene, one literal line per canvas row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtFragment {
    pub name: &'static str,
    pub column: usize,
    pub width: usize,
    pub rows: &'static [(usize, &'static str)],
}

pub const CHURCH: ArtFragment =
    ArtFragment { name: "church", column: scene::CHURCH_COLUMN, width: scene::CHURCH_WIDTH, rows: &scene::CHURCH_ROWS };

pub const TREE: ArtFragment =
    ArtFragment { name: "tree", column: scene::TREE_COLUMN, width: scene::TREE_WIDTH, rows: &scene::TREE_ROWS };

/// Everything drawn on top of the snow, left to right.
pub const VILLAGE: [ArtFragment; 2] = [CHURCH, TREE];

impl ArtFragment {
    pub fn line(&self, row: usize) -> Option<&'static str> {
        self.rows.iter().find(|(r, _)| *r == row).map(|(_, text)| *text)
    }

    /// Half-open column range covered on every row the fragment touches.
    pub fn columns(&self) -> std::ops::Range<usize> {
        self.column..self.column + self.width
    }

    /// Checks the table against a canvas of the given size so that stamping can't fail halfway.
    pub fn validate(&self, width: usize, height: usize) -> Result<(), CanvasError> {
        for (row, text) in self.rows {
            if *row >= height {
                return Err(CanvasError::RowOutOfRange { row: *row, height });
            }
            let found = text.chars().count();
            if found != self.width {
                return Err(CanvasError::FragmentWidth { name: self.name, row: *row, expected: self.width, found });
            }
            if self.column.checked_add(self.width).filter(|end| *end <= width).is_none() {
                return Err(CanvasError::OutOfBounds { offset: self.column, len: self.width, width });
            }
        }
        Ok(())
    }

    pub fn stamp(&self, canvas: &mut Canvas, row: usize) -> Result<(), CanvasError> {
        match self.line(row) {
            Some(text) => canvas.write_at(row, self.column, text),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::{HEIGHT, WIDTH};

    #[test]
    fn test_village_fits_the_scene() {
        for fragment in VILLAGE {
            assert_eq!(fragment.validate(WIDTH, HEIGHT), Ok(()), "{}", fragment.name);
        }
    }

    #[test]
    fn test_fragments_do_not_overlap() {
        let church = CHURCH.columns();
        let tree = TREE.columns();
        assert!(church.end <= tree.start);
    }

    #[test]
    fn test_line_lookup() {
        assert_eq!(CHURCH.line(6), Some("    ++     "));
        assert_eq!(CHURCH.line(14), None);
        assert_eq!(TREE.line(14), Some("   /_\\    "));
        assert_eq!(TREE.line(7), None);
    }

    #[test]
    fn test_validate_rejects_wrong_width() {
        const BROKEN: ArtFragment = ArtFragment { name: "broken", column: 0, width: 3, rows: &[(0, "ab")] };
        assert_eq!(
            BROKEN.validate(WIDTH, HEIGHT),
            Err(CanvasError::FragmentWidth { name: "broken", row: 0, expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_overflow() {
        const WIDE: ArtFragment = ArtFragment { name: "wide", column: 58, width: 3, rows: &[(0, "abc")] };
        assert_eq!(WIDE.validate(WIDTH, HEIGHT), Err(CanvasError::OutOfBounds { offset: 58, len: 3, width: WIDTH }));
    }

    #[test]
    fn test_validate_rejects_huge_column() {
        const FAR: ArtFragment = ArtFragment { name: "far", column: usize::MAX, width: 1, rows: &[(0, "x")] };
        assert_eq!(
            FAR.validate(WIDTH, HEIGHT),
            Err(CanvasError::OutOfBounds { offset: usize::MAX, len: 1, width: WIDTH })
        );
    }

    #[test]
    fn test_validate_rejects_low_rows() {
        const LOW: ArtFragment = ArtFragment { name: "low", column: 0, width: 1, rows: &[(HEIGHT, "x")] };
        assert_eq!(LOW.validate(WIDTH, HEIGHT), Err(CanvasError::RowOutOfRange { row: HEIGHT, height: HEIGHT }));
    }

    #[test]
    fn test_stamp_skips_rows_without_art() {
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        TREE.stamp(&mut canvas, 0).unwrap();
        assert_eq!(canvas.row(0).unwrap(), " ".repeat(WIDTH));
    }
}
