//! CLI smoke entry point.
//!
//! # Responsibility
//! - Assemble the board against one in-memory document and one store.
//! - Submit the project given on the command line and print both lists.
//!
//! Usage: `projboard_cli [--layout <file.json>] [title] [description] [people]`

use log::error;
use projboard_core::{
    default_log_level, init_stderr_logging, install_standard_markup, BoardLayout, Document,
    Notifier, ProjectInput, ProjectList, ProjectStatus, ProjectStore,
};
use std::error::Error;
use std::process::ExitCode;
use std::rc::Rc;

/// Prints notices to stderr; the terminal stands in for a blocking dialog.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

struct CliArgs {
    layout_path: Option<String>,
    title: String,
    description: String,
    people: String,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut layout_path = None;
    let mut positional = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--layout" {
            let path = args
                .next()
                .ok_or_else(|| "--layout requires a file path".to_string())?;
            layout_path = Some(path);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    Ok(CliArgs {
        layout_path,
        title: positional.next().unwrap_or_else(|| "Build X".to_string()),
        description: positional
            .next()
            .unwrap_or_else(|| "a sufficiently long description".to_string()),
        people: positional.next().unwrap_or_else(|| "3".to_string()),
    })
}

fn load_layout(path: Option<&str>) -> Result<BoardLayout, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(BoardLayout::default());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read layout `{path}`: {err}"))?;
    Ok(BoardLayout::from_json_str(&raw)?)
}

fn main() -> ExitCode {
    if let Err(err) = init_stderr_logging(default_log_level()) {
        eprintln!("logging disabled: {err}");
    }

    let result = parse_args(std::env::args().skip(1))
        .map_err(Box::<dyn Error>::from)
        .and_then(|args| run(&args));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let layout = load_layout(args.layout_path.as_deref())?;
    let mut document = Document::new();
    install_standard_markup(&mut document, &layout);

    let store = ProjectStore::new();
    let form = ProjectInput::new(store.clone(), Rc::new(StderrNotifier), &document, &layout)?;
    let active = ProjectList::new(ProjectStatus::Active, store.clone(), &document, &layout)?;
    let finished = ProjectList::new(ProjectStatus::Finished, store, &document, &layout)?;

    form.fill(&args.title, &args.description, &args.people);
    form.submit();

    println!("projboard_core version={}", projboard_core::core_version());
    for list in [&active, &finished] {
        println!("{} projects:", list.status());
        for row in list.rendered_titles() {
            println!("  - {row}");
        }
    }
    Ok(())
}
