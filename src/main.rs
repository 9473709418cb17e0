use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_book::cli::Shell;
use contact_book::config::{ContactPaths, Locale, Settings};
use contact_book::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "CONTACTS_LOG";

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Interactive command-line contact book",
    long_about = "Keeps names, phone numbers and birthdays, and tells you whose \
                  birthday is coming up in the next week. Run without a \
                  subcommand to start the interactive shell."
)]
struct Cli {
    /// Directory holding settings and contact data
    #[arg(long, global = true, env = "CONTACTS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Message language (en, uk); overrides the settings file
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout is reserved for the shell
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let storage = Storage::new(paths)?;
            let store = storage.load()?;
            info!(contacts = store.len(), "starting shell");

            let mut shell = Shell::new(store, settings).with_storage(storage);
            let stdin = io::stdin();
            shell.run(stdin.lock(), io::stdout())?;
        }
        Commands::Init => {
            println!("Initializing contact book at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:                {}", settings.locale);
            println!("  Birthday window (days): {}", settings.birthday_window_days);
            println!("  Save on change:        {}", settings.save_on_change);
            println!("  Initialized:           {}", paths.is_initialized());
        }
    }

    Ok(())
}
