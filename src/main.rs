use clap::Parser;
use cmdkit::general::logger;
use cmdkit::utils::{self, Example};
use cmdkit::GlobalFlags;

#[derive(Debug, Parser)]
#[command(name = "cmdkit")]
#[command(about = "Build and render command usage examples")]
struct Cli {
    #[command(flatten)]
    global: GlobalFlags,

    #[arg(
        long = "example",
        value_name = "DESC=COMMAND",
        help = "Usage example as a desc=command pair, repeatable"
    )]
    examples: Vec<String>,

    #[arg(long, help = "Emit examples as JSON instead of help text")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.global.verbose);

    if cli.examples.is_empty() {
        utils::exit_with_error("at least one --example is required");
    }

    let mut examples: Vec<Example> = Vec::with_capacity(cli.examples.len());
    for spec in &cli.examples {
        match spec.parse::<Example>() {
            Ok(example) => examples.push(example),
            Err(e) => utils::exit_with_errorf!("cannot parse --example value: {}", e),
        }
    }
    tracing::debug!("parsed {} example(s)", examples.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&examples)?);
    } else {
        let blocks: Vec<String> = examples.iter().map(|e| e.to_string()).collect();
        println!("{}", blocks.join("\n\n"));
    }

    Ok(())
}
