use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use midcentury_content_config::Config;
use midcentury_content_engine::{io, load_posts, load_posts_with_drafts};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, io::stdout, path::PathBuf, process};

mod app;
mod site;
mod text;

use app::{App, run_app};

const USAGE: &str = "\
Usage:
  midcentury-content [posts-dir]               browse posts
  midcentury-content check [posts-dir]         report posts that fail to load
  midcentury-content render [posts-dir] <out>  write static HTML
  midcentury-content init <posts-dir>          save posts-dir to the config file";

#[derive(Debug, PartialEq)]
enum Command {
    Browse { posts: Option<PathBuf> },
    Check { posts: Option<PathBuf> },
    Render { posts: Option<PathBuf>, out: Option<PathBuf> },
    Init { posts: PathBuf },
}

/// Parses arguments after the program name. `None` means print usage.
fn parse_args(args: &[String]) -> Option<Command> {
    let path = |s: &String| PathBuf::from(s);
    match args {
        [] => Some(Command::Browse { posts: None }),
        [cmd, rest @ ..] if cmd == "check" => match rest {
            [] => Some(Command::Check { posts: None }),
            [posts] => Some(Command::Check {
                posts: Some(path(posts)),
            }),
            _ => None,
        },
        [cmd, rest @ ..] if cmd == "render" => match rest {
            [] => Some(Command::Render {
                posts: None,
                out: None,
            }),
            [out] => Some(Command::Render {
                posts: None,
                out: Some(path(out)),
            }),
            [posts, out] => Some(Command::Render {
                posts: Some(path(posts)),
                out: Some(path(out)),
            }),
            _ => None,
        },
        [cmd, posts] if cmd == "init" => Some(Command::Init { posts: path(posts) }),
        [cmd, ..] if cmd == "init" || cmd.starts_with('-') => None,
        [posts] => Some(Command::Browse {
            posts: Some(path(posts)),
        }),
        _ => None,
    }
}

/// Where the posts live and how to present them, after merging CLI and config.
struct Settings {
    posts_path: PathBuf,
    output_path: Option<PathBuf>,
    show_drafts: bool,
}

fn resolve_settings(posts: Option<PathBuf>) -> Settings {
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let from_config = posts.is_none();
    let settings = match (posts, config) {
        (Some(posts_path), config) => Settings {
            posts_path,
            output_path: config.as_ref().and_then(|c| c.output_path.clone()),
            show_drafts: config.is_some_and(|c| c.show_drafts),
        },
        (None, Some(config)) => Settings {
            posts_path: config.posts_path,
            output_path: config.output_path,
            show_drafts: config.show_drafts,
        },
        (None, None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("{USAGE}");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_posts_dir(&settings.posts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{} is invalid: {e}",
            settings.posts_path.display(),
            source
        );
        process::exit(1);
    }

    settings
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    init_logging(&command);

    match command {
        Command::Browse { posts } => browse(resolve_settings(posts)),
        Command::Check { posts } => check(resolve_settings(posts)),
        Command::Render { posts, out } => render(resolve_settings(posts), out),
        Command::Init { posts } => init(posts),
    }
}

/// The browser owns the terminal, so anything logged to stderr while it runs
/// would draw over the screen. It runs silent; the other commands log at
/// `Info`, overridable by `RUST_LOG`.
fn log_level(command: &Command) -> Option<log::LevelFilter> {
    match command {
        Command::Browse { .. } => None,
        _ => Some(log::LevelFilter::Info),
    }
}

fn init_logging(command: &Command) {
    match log_level(command) {
        Some(level) => env_logger::Builder::from_default_env()
            .filter_level(level)
            .init(),
        None => env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init(),
    }
}

fn browse(settings: Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = App::new(settings.posts_path, settings.show_drafts)
        .and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn check(settings: Settings) -> Result<()> {
    let library = load_posts_with_drafts(&settings.posts_path)?;

    for issue in library.issues() {
        println!("{issue}");
    }
    println!(
        "{} posts loaded, {} issues",
        library.len(),
        library.issues().len()
    );

    if !library.issues().is_empty() {
        process::exit(1);
    }
    Ok(())
}

fn render(settings: Settings, out: Option<PathBuf>) -> Result<()> {
    let Some(out_dir) = out.or(settings.output_path) else {
        eprintln!("Error: No output directory given and none set in the config file");
        eprintln!("{USAGE}");
        process::exit(1);
    };

    let library = if settings.show_drafts {
        load_posts_with_drafts(&settings.posts_path)?
    } else {
        load_posts(&settings.posts_path)?
    };
    let written = site::write_site(&library, &out_dir)?;
    println!("Wrote {written} posts to {}", out_dir.display());
    Ok(())
}

fn init(posts: PathBuf) -> Result<()> {
    if let Err(e) = io::validate_posts_dir(&posts) {
        eprintln!("Error: Posts path '{}' is invalid: {e}", posts.display());
        process::exit(1);
    }
    let posts = posts.canonicalize().unwrap_or(posts);

    let config = match Config::load()? {
        Some(existing) => Config {
            posts_path: posts,
            ..existing
        },
        None => Config::new(posts),
    };
    config.save()?;
    println!("Saved {}", Config::config_path().display());
    Ok(())
}
