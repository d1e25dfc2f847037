use color_eyre::eyre::Result;
use strum::Display;

pub mod greeting;
pub mod scene;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Display)]
pub enum SectionId {
    Greeting,
    Scene,
}

/// One block of the printed card. Sections are emitted in the order the app holds them.
pub trait Section {
    fn id(&self) -> SectionId;

    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn render(&mut self) -> Result<Vec<String>>;
}
