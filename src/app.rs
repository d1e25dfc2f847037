use std::io::{BufRead, Write};

use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};

use crate::{
    cli::Cli,
    components::{
        fragment::VILLAGE,
        greeting::{GreetingBox, GreetingFields, GreetingFieldsBuilder},
        snow::{time_seed, SnowGenerator},
    },
    config::Config,
    constants::card,
    sections::{greeting::GreetingSection, scene::SceneSection, Section},
};

pub struct App {
    config: Config,
    cli: Cli,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::new().wrap_err("Failed to load configuration")?;
        Ok(Self::with_config(config, cli))
    }

    pub fn with_config(config: Config, cli: Cli) -> Self {
        Self { config, cli }
    }

    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        if self.cli.print_config {
            write!(output, "{}", self.config.to_yaml()?)?;
            return Ok(());
        }

        let fields = self.read_fields(input, output)?;
        let mut sections = self.sections(fields);

        for section in sections.iter_mut() {
            section.init()?;
        }

        for section in sections.iter_mut() {
            let lines = section.render().wrap_err_with(|| format!("Failed to render {}", section.id()))?;
            debug!("{} section: {} lines", section.id(), lines.len());
            for line in lines {
                writeln!(output, "{line}")?;
            }
        }
        output.flush()?;

        Ok(())
    }

    fn read_fields<I: BufRead, O: Write>(&self, input: &mut I, output: &mut O) -> Result<GreetingFields> {
        let year_prompt = format!("Year [{}]: ", self.config.card.default_year);

        let recipient = prompt(input, output, card::RECIPIENT_PROMPT, self.cli.recipient.clone())?;
        let sender = prompt(input, output, card::SENDER_PROMPT, self.cli.sender.clone())?;
        let message = prompt(input, output, card::MESSAGE_PROMPT, self.cli.message.clone())?;
        let year = prompt(input, output, &year_prompt, self.cli.year.clone())?;

        let fields = GreetingFieldsBuilder::default()
            .recipient(recipient)
            .sender(sender)
            .message(message)
            .year(year)
            .build()?;
        info!("Greeting for {:?} from {:?}", fields.recipient, fields.sender);
        Ok(fields)
    }

    fn sections(&self, fields: GreetingFields) -> Vec<Box<dyn Section>> {
        let seed = self.cli.seed.or(self.config.scene.seed).unwrap_or_else(time_seed);
        let snowflakes = self.cli.snowflakes.unwrap_or(self.config.scene.snowflakes);
        info!("Snow seed {seed}, {snowflakes} snowflakes");

        let greeting_box = GreetingBox::new(&self.config.card.default_year, &self.config.card.default_message);
        vec![
            Box::new(GreetingSection::new(fields, greeting_box)),
            Box::new(SceneSection::new(SnowGenerator::seeded(seed), VILLAGE.to_vec(), snowflakes)),
        ]
    }
}

/// Returns `preset` untouched, or writes `label` and reads one line. End of input reads as an empty line
/// and bytes that are not UTF-8 become U+FFFD.
fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, label: &str, preset: Option<String>) -> Result<String> {
    if let Some(value) = preset {
        return Ok(value);
    }

    write!(output, "{label}")?;
    output.flush()?;

    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf).wrap_err("Failed to read from stdin")?;
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
