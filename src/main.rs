mod app;
mod ui;

use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use pathpick::{export_json, logging, ExportOptions, FilePicker, FileTree, PickerConfig};

use app::App;
use ui::{handle_key, ColorScheme};

#[derive(Parser, Debug)]
#[command(name = "pathpick")]
#[command(version)]
#[command(about = "Pick files and directories from a tree, with search and smart exclusions", long_about = None)]
struct Args {
    /// JSON file describing the tree to pick from
    tree: PathBuf,

    /// Picker configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path expanded when the picker opens
    #[arg(long)]
    initial_path: Option<String>,

    /// Directory name to suggest for exclusion (can be repeated, replaces the defaults)
    #[arg(long = "suggest", action = clap::ArgAction::Append)]
    suggest: Vec<String>,

    /// Do not suggest any exclusions
    #[arg(long, conflicts_with = "suggest")]
    no_suggestions: bool,

    /// Print the selection report as JSON instead of starting the TUI
    #[arg(long)]
    json: bool,

    /// Only list files in the JSON report (with --json)
    #[arg(long)]
    files_only: bool,

    /// Path to select before starting (can be repeated)
    #[arg(short = 's', long = "select", action = clap::ArgAction::Append)]
    select: Vec<String>,

    /// Path to exclude before starting (can be repeated)
    #[arg(short = 'x', long = "exclude", action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Initial search term
    #[arg(long)]
    search: Option<String>,

    /// Color scheme: default, dark, light, colorblind
    #[arg(long)]
    color_scheme: Option<String>,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    /// Load the configuration file, if any, and apply command-line overrides.
    fn resolve_config(&self) -> Result<PickerConfig> {
        let mut config = match &self.config {
            Some(path) => PickerConfig::load(path)?,
            None => PickerConfig::default(),
        };

        if let Some(path) = &self.initial_path {
            config.initial_path = path.clone();
        }
        if self.no_suggestions {
            config.smart_exclude_suggestions.clear();
        } else if !self.suggest.is_empty() {
            config.smart_exclude_suggestions = self.suggest.clone();
        }
        if let Some(name) = &self.color_scheme {
            config.color_scheme = name.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The TUI owns the terminal, so it only logs to a file.
    if args.json || args.log_file.is_some() {
        logging::init(args.log_level.as_deref(), args.log_file.as_deref())?;
    }

    let config = args.resolve_config()?;
    let tree = FileTree::load(&args.tree)?;
    tracing::debug!(nodes = tree.node_count(), "loaded tree");

    let mut picker = FilePicker::from_config(tree, &config);
    apply_presets(&mut picker, &args)?;

    if args.json {
        return run_json_mode(&picker, args.files_only);
    }

    let color_scheme = ColorScheme::from_name(&config.color_scheme, args.no_color);
    run_tui_mode(picker, color_scheme)
}

/// Apply `--exclude`, then `--select`, then `--search`.
fn apply_presets(picker: &mut FilePicker, args: &Args) -> Result<()> {
    for path in &args.exclude {
        picker.set_exclusion(path, true);
    }
    for path in &args.select {
        anyhow::ensure!(
            picker.tree().resolve(path).is_some(),
            "no such path in tree: {}",
            path
        );
        if !picker.toggle_selection(path, true) {
            tracing::warn!(%path, "cannot select an excluded path");
        }
    }
    if let Some(term) = &args.search {
        picker.set_search_term(term.as_str());
    }
    Ok(())
}

fn run_json_mode(picker: &FilePicker, files_only: bool) -> Result<()> {
    let export_options = ExportOptions { files_only };
    let mut stdout = io::stdout();
    export_json(picker, &export_options, &mut stdout).context("writing selection report")?;
    println!(); // Final newline

    Ok(())
}

fn run_tui_mode(picker: FilePicker, color_scheme: ColorScheme) -> Result<()> {
    // Set up panic handler to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(picker, color_scheme);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal before printing anything
    let cleanup_result = cleanup_terminal(&mut terminal);
    result.and(cleanup_result)?;

    if app.finished {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for path in app.reported_selection() {
            writeln!(out, "{}", path)?;
        }
    }
    Ok(())
}

/// Clean up terminal state.
fn cleanup_terminal<B: ratatui::backend::Backend + Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render_ui(frame, app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press, not release
                if key.kind == KeyEventKind::Press {
                    let command = handle_key(key, &app.input_mode);
                    app.handle_command(command);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
