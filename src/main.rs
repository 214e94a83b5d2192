use std::{
    fs::{self, File},
    io::{self, BufWriter, Read},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rhuff::{encode_with_export, CodeTable, Config, HuffmanEncoder};
use serde_derive::Serialize;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path of a TOML configuration file
    #[arg(short, long, global = true, env = "RHUFF_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the codes and the space separated encoding as JSON
    Encode {
        #[command(flatten)]
        source: Source,

        /// Write the Graphviz export of the tree to this path
        #[arg(long)]
        dot: Option<PathBuf>,
    },
    /// Write the bit-packed encoding, header included
    Pack {
        #[command(flatten)]
        source: Source,

        /// Path of the output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct Source {
    /// Text to encode, read from stdin when neither this nor --input is given
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Path of the input file
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl Source {
    fn read(self) -> anyhow::Result<String> {
        match (self.text, self.input) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("could not read input file {}", path.display())),
            (None, None) => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("could not read stdin")?;
                Ok(text)
            }
        }
    }
}

#[derive(Serialize)]
struct Response<'a> {
    encoded: String,
    codes: &'a CodeTable,
    tree: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::new(path)?,
        None => Config::default(),
    };
    init_logging(&config, args.verbose)?;

    match args.command {
        Commands::Encode { source, dot } => {
            let text = source.read()?;
            let dot = dot.or(config.dot_output);
            let report = encode_with_export(&text, &config.separator, dot.as_deref())?;

            let tree = match report.export {
                Some(Ok(path)) => Some(path.display().to_string()),
                Some(Err(e)) => {
                    warn!("{:#}", anyhow::Error::from(e));
                    None
                }
                None => None,
            };

            let response = Response {
                encoded: report.encoding.encoded,
                codes: &report.encoding.codes,
                tree,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Pack { source, output } => {
            let text = source.read()?;
            let encoder = HuffmanEncoder::new(&text);
            let file = File::create(&output)
                .with_context(|| format!("could not create {}", output.display()))?;
            encoder.encode_packed(&text, &mut BufWriter::new(file))?;
            info!(
                symbols = encoder.codes().len(),
                output = %output.display(),
                "packed input"
            );
        }
    }

    Ok(())
}

fn init_logging(config: &Config, verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::from_str(&config.log_level)
            .with_context(|| format!("invalid log level \"{}\"", config.log_level))?,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
