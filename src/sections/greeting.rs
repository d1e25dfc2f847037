use color_eyre::eyre::Result;

use super::{Section, SectionId};
use crate::components::greeting::{GreetingBox, GreetingFields};

pub struct GreetingSection {
    fields: GreetingFields,
    greeting_box: GreetingBox,
}

impl GreetingSection {
    pub fn new(fields: GreetingFields, greeting_box: GreetingBox) -> Self {
        GreetingSection { fields, greeting_box }
    }
}

impl Section for GreetingSection {
    fn id(&self) -> SectionId {
        SectionId::Greeting
    }

    fn render(&mut self) -> Result<Vec<String>> {
        // The card starts one line below whatever the prompts left behind.
        let mut lines = vec![String::new()];
        lines.extend(self.greeting_box.render(&self.fields));
        Ok(lines)
    }
}
