use derive_deref::Deref;

use crate::{
    components::{
        canvas::{Canvas, CanvasError},
        fragment::ArtFragment,
        snow::Coordinate,
    },
    constants::{scene::SNOWFLAKE, HEIGHT, WIDTH},
};

/// Finished scene, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Scene(Vec<String>);

impl Scene {
    pub fn into_rows(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SceneComposer {
    width: usize,
    height: usize,
    snowflake: char,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComposer {
    pub fn new() -> Self {
        Self { width: WIDTH, height: HEIGHT, snowflake: SNOWFLAKE }
    }

    /// Lays snow on a blank canvas, then stamps every fragment over it.
    ///
    /// Art always wins over snow. Flakes outside the grid are dropped.
    pub fn render(&self, snow: &[Coordinate], fragments: &[ArtFragment]) -> Result<Scene, CanvasError> {
        for fragment in fragments {
            fragment.validate(self.width, self.height)?;
        }

        let mut canvas = Canvas::new(self.width, self.height);
        let mut dropped = 0;
        for row in 0..self.height {
            for flake in snow.iter().filter(|flake| flake.row == row) {
                if flake.column >= self.width {
                    dropped += 1;
                    continue;
                }
                canvas.plot(flake.column, row, self.snowflake);
            }
            for fragment in fragments {
                fragment.stamp(&mut canvas, row)?;
            }
        }
        dropped += snow.iter().filter(|flake| flake.row >= self.height).count();
        if dropped > 0 {
            tracing::debug!(dropped, "snowflakes outside the scene were skipped");
        }

        Ok(Scene(canvas.into_rows()))
    }
}
