//! Terminal client: argument parsing, wiring and output.
//!
//! Each invocation is one user action. The handler builds an [`App`] over the
//! file store and a [`TerminalPresenter`], performs the action, and maps the
//! outcome to terminal output and an exit code.

mod args;
mod logging;
mod presenter;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use postpad::app::{App, DeleteOutcome, EditOutcome, SubmitOutcome};
use postpad::commands::config::ConfigAction;
use postpad::commands::CmdMessage;
use postpad::config::PostpadConfig;
use postpad::error::{PostpadError, Result};
use postpad::index::{resolve, Selector};
use postpad::store::fs_backend::FsBackend;
use postpad::store::PostStore;
use presenter::{FormSource, ListOutput, TerminalPresenter};
use print::{print_config, print_full_post, print_messages};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

struct AppContext {
    data_dir: PathBuf,
    config: PostpadConfig,
}

impl AppContext {
    fn app(&self, presenter: TerminalPresenter) -> App<FsBackend, TerminalPresenter> {
        let store = PostStore::with_key(
            FsBackend::new(&self.data_dir),
            self.config.storage_key.clone(),
        );
        App::new(store, presenter).with_preview_chars(self.config.preview_chars)
    }

    fn resolve(&self, selector: &str) -> Result<String> {
        let selector: Selector = selector.parse()?;
        let store = PostStore::with_key(
            FsBackend::new(&self.data_dir),
            self.config.storage_key.clone(),
        );
        resolve(&store.load_posts(), &selector)
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { html }) => handle_list(&ctx, html),
        Some(Commands::New {
            title,
            content,
            no_editor,
        }) => handle_new(&ctx, title, content, no_editor),
        Some(Commands::Edit {
            selector,
            title,
            content,
            no_editor,
        }) => handle_edit(&ctx, &selector, title, content, no_editor),
        Some(Commands::View { selector }) => handle_view(&ctx, &selector),
        Some(Commands::Delete { selector, yes }) => handle_delete(&ctx, &selector, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "postpad", "postpad")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                PostpadError::Api(
                    "Could not determine a data directory; pass --data-dir".to_string(),
                )
            })?,
    };
    let config = PostpadConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "context ready");

    Ok(AppContext { data_dir, config })
}

fn handle_list(ctx: &AppContext, html: bool) -> Result<ExitCode> {
    let output = if html {
        ListOutput::Html
    } else {
        ListOutput::Terminal
    };
    ctx.app(TerminalPresenter::new(output)).start();
    Ok(ExitCode::SUCCESS)
}

fn handle_new(
    ctx: &AppContext,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<ExitCode> {
    let source = FormSource::pick(title, content, no_editor, &ctx.config.file_ext);
    let mut app = ctx.app(TerminalPresenter::new(ListOutput::Hidden).with_source(source));
    app.open_new();
    finish_submit(app.submit()?)
}

fn handle_edit(
    ctx: &AppContext,
    selector: &str,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<ExitCode> {
    let id = ctx.resolve(selector)?;
    let source = FormSource::pick(title, content, no_editor, &ctx.config.file_ext);
    let mut app = ctx.app(TerminalPresenter::new(ListOutput::Hidden).with_source(source));

    if app.open_edit(&id) == EditOutcome::Missing {
        return Err(PostpadError::NotFound(id));
    }
    finish_submit(app.submit()?)
}

fn finish_submit(outcome: SubmitOutcome) -> Result<ExitCode> {
    match outcome {
        SubmitOutcome::Created(result) | SubmitOutcome::Updated(result) => {
            print_messages(&result.messages);
            Ok(ExitCode::SUCCESS)
        }
        // the presenter already showed the alert
        SubmitOutcome::Invalid(_) => Ok(ExitCode::FAILURE),
        SubmitOutcome::EditDropped { id } => {
            print_messages(&[CmdMessage::warning(format!(
                "Post {} no longer exists; nothing was saved",
                id
            ))]);
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Ignored => Ok(ExitCode::SUCCESS),
    }
}

fn handle_view(ctx: &AppContext, selector: &str) -> Result<ExitCode> {
    let id = ctx.resolve(selector)?;
    let app = ctx.app(TerminalPresenter::new(ListOutput::Hidden));
    let post = app.view(&id).ok_or(PostpadError::NotFound(id))?;
    print_full_post(&post);
    Ok(ExitCode::SUCCESS)
}

fn handle_delete(ctx: &AppContext, selector: &str, yes: bool) -> Result<ExitCode> {
    let id = ctx.resolve(selector)?;
    let mut app = ctx.app(TerminalPresenter::new(ListOutput::Hidden).assume_yes(yes));

    match app.delete(&id)? {
        DeleteOutcome::Deleted(result) => print_messages(&result.messages),
        DeleteOutcome::Declined => println!("{}", "Cancelled.".dimmed()),
        DeleteOutcome::Missing => print_messages(&[CmdMessage::info("Nothing to delete.")]),
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = postpad::commands::config::run(&ctx.data_dir, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}
