use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use home::home_dir;

use atelier_tui::run_tui;
use atelier_vault::{Store, Vault, ATELIER_FOLDER, SNAPSHOT_FILE};

#[derive(Parser, Debug)]
#[clap(name = "atelier")]
#[clap(about = "Curate a personal portfolio from the terminal", long_about = None)]
struct Cli {
    /// Data directory holding the snapshot and backups
    #[clap(long)]
    root: Option<PathBuf>,

    /// Start in the admin editor instead of the portfolio view
    #[clap(long)]
    admin: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let root = match args.root {
        Some(root) => root,
        None => home_dir()
            .ok_or_else(|| anyhow!("Couldn't retrieve home directory!"))?
            .join(ATELIER_FOLDER),
    };

    let vault = Vault::new("portfolio", &root.join(SNAPSHOT_FILE));
    let store = Store::open(vault);

    run_tui(store, root, args.admin)
}
