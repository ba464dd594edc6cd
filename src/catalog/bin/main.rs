use std::io;
use std::path::PathBuf;
use clap::Parser;
use tracing::info;
use home_library::catalog::controller::MenuController;
use home_library::catalog::factory::create_catalog_service;
use home_library::core::domain::Configuration;
use home_library::core::library::LibraryResult;
use home_library::utils::logging::setup_tracing;

/// Interactive catalog for a personal book collection.
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about)]
struct Args {
    /// Catalog file, defaults to library.json next to the executable
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Only save when leaving the menu
    #[arg(long)]
    no_autosave: bool,

    /// Log debug diagnostics to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> LibraryResult<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let data_file = args.file.unwrap_or_else(Configuration::default_data_file);
    let config = Configuration::new(data_file.as_path())
        .with_autosave(!args.no_autosave);
    info!("using catalog at {}", config.data_file.display());

    let catalog = create_catalog_service(&config)?;
    let stdin = io::stdin();
    let mut controller = MenuController::new(catalog, stdin.lock(), io::stdout());
    controller.run()
}
