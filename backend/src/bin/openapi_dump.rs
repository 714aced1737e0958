//! Print the OpenAPI document as JSON.

use clap::Parser;
use registry_backend::doc::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the OpenAPI dump.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the registry OpenAPI document")]
struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .map_err(std::io::Error::other)?;
    println!("{json}");
    Ok(())
}
