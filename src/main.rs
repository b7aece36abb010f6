use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use convo::ThemeMode;
use convo::core::config::{self, CliOverrides, EnvOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "convo", version, about = "Scrollable conversation viewer with expandable messages")]
struct Args {
    /// Colour scheme (overrides CONVO_THEME and the config file)
    #[arg(short, long, value_enum)]
    theme: Option<ThemeMode>,

    /// JSON file with an array of {"author", "body"} messages
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Config file to use instead of ~/.convo/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to convo.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("convo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .map_err(io::Error::other)?;

    let cli = CliOverrides {
        theme: args.theme,
        messages_file: args.messages,
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &cli);
    log::info!("Convo starting up with {:?}", resolved);

    convo::tui::run(resolved)
}
