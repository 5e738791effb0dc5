use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use friendai::clipboard::copy_suggestion;
use friendai::config::load_config;
use friendai::templates::template_storage::templates_dir;
use friendai::usage::track_usage;
use friendai::{Mode, TemplateStore, generate};

/// Friendly reply suggestions for when you don't know what to say
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Message you received; use "-" to read it from stdin
    message: Option<String>,

    /// warm, confident, simple, smalltalk or calm
    #[arg(short, long)]
    mode: Option<String>,

    /// Directory containing the template JSON files
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Copy suggestion number N to the clipboard
    #[arg(short, long, value_name = "N")]
    copy: Option<usize>,

    /// Don't count this run in the local usage stats
    #[arg(long)]
    no_track: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config();

    let mode = match args.mode.as_deref() {
        Some(mode) => mode.parse::<Mode>()?,
        None => config.generation.default_mode,
    };

    let message = read_message(args.message.as_deref())?;
    if message.is_empty() && mode.requires_message() {
        eprintln!("Please paste a message first, or choose the \"smalltalk\" mode!");
        return Ok(ExitCode::from(2));
    }

    let dir = args
        .templates
        .or(config.templates.dir)
        .or_else(|| templates_dir().filter(|dir| dir.is_dir()));
    TemplateStore::global().load(dir.as_deref()).await;

    let suggestions = generate(mode, &message)?;
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{}. {}", i + 1, suggestion);
    }

    if let Some(number) = args.copy {
        let copied = copy_suggestion(&suggestions, number, config.clipboard.backend)?;
        eprintln!("✅ Copied to clipboard: {}", copied);
    }

    if config.usage.track && !args.no_track {
        if let Some(milestone) = track_usage() {
            eprintln!("{}", milestone);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_message(arg: Option<&str>) -> io::Result<String> {
    let message = match arg {
        Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(text) => text.to_string(),
        None => String::new(),
    };

    Ok(message.trim().to_string())
}
