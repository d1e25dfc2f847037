use color_eyre::eyre::{Result, WrapErr};
use rand::Rng;
use tracing::{debug, trace};

use super::{Section, SectionId};
use crate::components::{
    fragment::ArtFragment,
    scene::SceneComposer,
    snow::{Coordinate, SnowGenerator},
};

pub struct SceneSection<R: Rng> {
    generator: SnowGenerator<R>,
    composer: SceneComposer,
    fragments: Vec<ArtFragment>,
    snowflakes: usize,
    snow: Option<Vec<Coordinate>>,
}

impl<R: Rng> SceneSection<R> {
    pub fn new(generator: SnowGenerator<R>, fragments: Vec<ArtFragment>, snowflakes: usize) -> Self {
        SceneSection { generator, composer: SceneComposer::new(), fragments, snowflakes, snow: None }
    }
}

impl<R: Rng> Section for SceneSection<R> {
    fn id(&self) -> SectionId {
        SectionId::Scene
    }

    /// Snow is drawn once; later renders reuse it.
    fn init(&mut self) -> Result<()> {
        if self.snow.is_none() {
            let snow = self.generator.generate(self.snowflakes);
            debug!("Generated {} snowflakes", snow.len());
            self.snow = Some(snow);
        }
        Ok(())
    }

    fn render(&mut self) -> Result<Vec<String>> {
        self.init()?;
        let snow = self.snow.as_deref().unwrap_or_default();
        let scene = self.composer.render(snow, &self.fragments).wrap_err("Failed to compose the scene")?;
        trace!("{:?}", *scene);
        Ok(scene.into_rows())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        components::fragment::VILLAGE,
        constants::{HEIGHT, WIDTH},
    };

    #[test]
    fn test_render_twice_is_identical() {
        let mut section = SceneSection::new(SnowGenerator::seeded(3), VILLAGE.to_vec(), 85);
        let first = section.render().unwrap();
        let second = section.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), HEIGHT);
        assert!(first.iter().all(|row| row.chars().count() == WIDTH));
    }

    #[test]
    fn test_no_snowflakes() {
        let mut section = SceneSection::new(SnowGenerator::seeded(3), VILLAGE.to_vec(), 0);
        let rows = section.render().unwrap();
        assert!(rows.iter().all(|row| !row.contains('.')));
    }

    #[test]
    fn test_bad_fragment_is_an_error() {
        const OFF_EDGE: ArtFragment = ArtFragment { name: "off-edge", column: WIDTH, width: 1, rows: &[(0, "x")] };
        let mut section = SceneSection::new(SnowGenerator::seeded(3), vec![OFF_EDGE], 10);
        let err = section.render().unwrap_err();
        assert!(format!("{err:?}").contains("Failed to compose the scene"));
    }
}
