use std::path::Path;

use anyhow::Result;
use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use promptml::renderer::XmlRenderer;
use promptml::template::PromptDefinition;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("promptml")
        .about("Render a JSON prompt definition as XML markup")
        .arg(
            Arg::new("input")
                .help("Input JSON prompt definition file")
                .required(true)
                .index(1),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();

    let definition = PromptDefinition::load(Path::new(input_file))?;
    let template = definition.into_template();

    let renderer = XmlRenderer;
    print!("{}", renderer.render(&template));

    Ok(())
}
