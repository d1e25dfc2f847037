use thiserror::Error;

use crate::constants::scene::BLANK;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("row {row} is outside the canvas (height {height})")]
    RowOutOfRange { row: usize, height: usize },
    #[error("writing {len} cells at column {offset} overflows a row of width {width}")]
    OutOfBounds { offset: usize, len: usize, width: usize },
    #[error("fragment `{name}` row {row} is {found} cells wide, expected {expected}")]
    FragmentWidth { name: &'static str, row: usize, expected: usize, found: usize },
}

/// Fixed-size character grid. Rows are never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, cells: vec![vec![BLANK; width]; height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Puts `glyph` at (`column`, `row`) if that cell is still blank.
    ///
    /// Returns `false` when the cell is occupied or lies outside the canvas.
    pub fn plot(&mut self, column: usize, row: usize, glyph: char) -> bool {
        match self.cells.get_mut(row).and_then(|line| line.get_mut(column)) {
            Some(cell) if *cell == BLANK => {
                *cell = glyph;
                true
            },
            _ => false,
        }
    }

    /// Overwrites the cells of `row` starting at `offset` with `text`, whatever they hold.
    pub fn write_at(&mut self, row: usize, offset: usize, text: &str) -> Result<(), CanvasError> {
        let height = self.height();
        let width = self.width;
        let line = self.cells.get_mut(row).ok_or(CanvasError::RowOutOfRange { row, height })?;

        let len = text.chars().count();
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= width)
            .ok_or(CanvasError::OutOfBounds { offset, len, width })?;

        line[offset..end].iter_mut().zip(text.chars()).for_each(|(cell, c)| *cell = c);
        Ok(())
    }

    pub fn get(&self, column: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|line| line.get(column)).copied()
    }

    pub fn row(&self, row: usize) -> Option<String> {
        self.cells.get(row).map(|line| line.iter().collect())
    }

    pub fn into_rows(self) -> Vec<String> {
        self.cells.into_iter().map(|line| line.into_iter().collect()).collect()
    }
}
