use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use filetype_selector::error::IoError;
use filetype_selector::{cli, logging};
use tracing::info;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let catalog = args.load_catalog()?;
    info!(
        file_types = catalog.file_type_count(),
        format = args.format.as_str(),
        "catalog ready"
    );

    let rendered = cli::render(&args, &catalog)?;

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .map_err(|e| IoError::write_error(path, e))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
