//! mindmark - XMind outlines to Markdown

use std::fs::{self, File};
use std::io::{self, Cursor, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug, info};

use mindmark::export::{Exporter, Format, MarkdownExporter, XMindExporter};
use mindmark::{Error, Topic, XMindConfig, classify};

#[derive(Parser, Debug)]
#[command(name = "mindmark")]
#[command(version, about = "Convert XMind outlines to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    mindmark notes.xmind               Print notes as Markdown
    mindmark notes.xmind notes.md      Write Markdown to a file
    mindmark content.json out.xmind    Package a topic tree as an archive
    mindmark --graph notes.xmind       Show how each topic was classified")]
struct Cli {
    /// Input file (XMind archive or JSON topic tree)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (.xmind for an archive, anything else for Markdown)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Print the classified node tree as JSON instead of Markdown
    #[arg(long, conflicts_with = "output")]
    graph: bool,

    /// Sheet title for XMind output
    #[arg(long, default_value = "Sheet 1")]
    sheet_title: String,

    /// Root structure class for XMind output
    #[arg(long, default_value = "org.xmind.ui.logic.right")]
    structure_class: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(args:? = cli; "Parsed arguments");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let topic = read_input(&cli.input)?;

    if cli.graph {
        let nodes = classify(&topic.normalize());
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }

    let Some(output) = &cli.output else {
        let mut buffer = Cursor::new(Vec::new());
        MarkdownExporter::new()
            .with_trailing_newline(true)
            .export(&topic, &mut buffer)?;
        io::stdout().write_all(buffer.get_ref())?;
        return Ok(());
    };

    match Format::from_path(output) {
        Some(Format::XMind) => {
            let config = XMindConfig::new()
                .with_sheet_title(&cli.sheet_title)
                .with_structure_class(&cli.structure_class);
            let mut file = File::create(output)?;
            XMindExporter::with_config(config).export(&topic, &mut file)?;
        }
        Some(Format::Json) => {
            return Err(Error::UnsupportedFormat(format!(
                "{output}: JSON output is not supported, use .xmind or .md"
            )));
        }
        Some(Format::Markdown) | None => {
            let mut file = File::create(output)?;
            MarkdownExporter::new()
                .with_trailing_newline(true)
                .export(&topic, &mut file)?;
        }
    }

    info!(input = cli.input, output = output; "Converted");
    if !cli.quiet {
        eprintln!("Wrote {output}");
    }
    Ok(())
}

fn read_input(path: &str) -> Result<Topic, Error> {
    let data = fs::read(path)?;
    let format = Format::from_path(path).or_else(|| Format::sniff(&data));
    debug!(path, format:?; "Reading input");

    match format {
        Some(Format::XMind) => mindmark::xmind::read_xmind_from_reader(Cursor::new(data)),
        Some(Format::Json) => {
            let text = String::from_utf8(data)
                .map_err(|e| Error::UnsupportedFormat(format!("{path}: {e}")))?;
            mindmark::read_topic_json(&text)
        }
        Some(Format::Markdown) | None => Err(Error::UnsupportedFormat(format!(
            "{path}: expected an .xmind archive or a JSON topic tree"
        ))),
    }
}
