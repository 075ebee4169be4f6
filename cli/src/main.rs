//! pospdf CLI - safety-plan PDF renderer

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use log::debug;

use pospdf::{DocumentRequest, JsonFormat, PosRenderer, RenderOptions};

#[derive(Parser)]
#[command(name = "pospdf")]
#[command(version)]
#[command(about = "Render a Piano Operativo di Sicurezza PDF from a JSON payload", long_about = None)]
struct Cli {
    /// Request payload: a JSON object with address, workType, numWorkers, date and content
    #[arg(value_name = "INPUT_JSON")]
    input: String,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Also write the JSON story snapshot to this file
    #[arg(long, value_name = "FILE")]
    story: Option<PathBuf>,

    /// Write page content streams without compression
    #[arg(long, env = "POSPDF_UNCOMPRESSED")]
    uncompressed: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let request = DocumentRequest::from_json(&cli.input)?;
    debug!("decoded request for {:?}", request.address());

    let renderer = PosRenderer::new(RenderOptions::new().with_compression(!cli.uncompressed));

    if let Some(path) = &cli.story {
        write_story(&renderer, &request, path)?;
    }

    let path = renderer.render(&request, &cli.output)?;
    println!("{}", path.display());

    Ok(())
}

fn write_story(
    renderer: &PosRenderer,
    request: &DocumentRequest,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let story = renderer.story(request);
    let json = pospdf::render::to_json(&story, JsonFormat::Pretty)?;
    fs::write(path, json)?;
    debug!("story snapshot saved to {}", path.display());
    Ok(())
}
