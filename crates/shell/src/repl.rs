//! Read-eval loop driving the workbench.
//!
//! One command is dispatched at a time, so at most one request is ever
//! in flight. Request failures are caught here, reported as a blocking
//! notification line, and never abort the loop.

use std::io::{self, BufRead, Write};

use fabula_client::StoryService;
use fabula_core::creation::DEFAULT_CHAPTER_COUNT;
use fabula_session::{ActiveEntry, SessionError, Workbench};

use crate::command::{self, Command};
use crate::render;

/// Outcome of dispatching one command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input.
pub async fn run<S: StoryService>(bench: &mut Workbench<S>) -> io::Result<()> {
    println!("fabula -- story project shell. Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input.
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match command::parse(line) {
            Ok(cmd) => {
                if dispatch(bench, cmd).await? == Flow::Quit {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

async fn dispatch<S: StoryService>(
    bench: &mut Workbench<S>,
    cmd: Command,
) -> io::Result<Flow> {
    match cmd {
        Command::Projects => match bench.refresh_directory().await {
            Ok(()) => println!("{}", render::directory(bench.directory().summaries())),
            Err(err) => notify(&err),
        },

        Command::New { idea } => match bench.create_project(&idea, DEFAULT_CHAPTER_COUNT).await {
            Ok(project) => {
                println!("Created project {}.", project.id);
                print_outline(bench);
            }
            Err(err) => notify(&err),
        },

        Command::Open { id } => match bench.open(&id).await {
            Ok(_) => print_outline(bench),
            Err(err) => notify(&err),
        },

        Command::Close => {
            bench.close();
            println!("Closed.");
        }

        Command::Delete { id } => match bench.delete_project(&id).await {
            Ok(()) => println!("Deleted project {id}."),
            Err(err) => notify(&err),
        },

        Command::Outline => print_outline(bench),

        Command::Synopsis => select(bench, ActiveEntry::Synopsis),
        Command::Style => select(bench, ActiveEntry::Style),
        Command::Character { id } => select(bench, ActiveEntry::Character(id)),
        Command::Chapter { id } => select(bench, ActiveEntry::Chapter(id)),

        Command::Show => print_editor(bench),

        Command::Set { field, value } => {
            if bench.session().is_none() {
                println!("No project is open.");
            } else if bench.edit(field, &value) {
                println!("Edited. Run 'save' to persist.");
            } else {
                println!("The selection has no such field.");
            }
        }

        Command::Save => match bench.save().await {
            Ok(()) => println!("Saved."),
            Err(err) => notify(&err),
        },

        Command::AddCharacter => match bench.add_character().await {
            Ok(()) => print_outline(bench),
            Err(err) => notify(&err),
        },

        Command::DeleteCharacter { id } => match bench.delete_character(id).await {
            Ok(()) => print_outline(bench),
            Err(err) => notify(&err),
        },

        Command::Generate => {
            if confirm("Generating will spend AI quota. Continue? [y/N] ")? {
                match bench.generate_chapter().await {
                    Ok(()) => print_editor(bench),
                    Err(err) => notify(&err),
                }
            } else {
                println!("Cancelled.");
            }
        }

        Command::Help => println!("{}", command::HELP),

        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Blocking user-facing notification for a failed operation. The
/// message carries the server's `detail` text verbatim.
fn notify(err: &SessionError) {
    println!("Error: {err}");
}

fn print_outline<S: StoryService>(bench: &Workbench<S>) {
    match bench.session() {
        Some(session) => println!("{}", render::outline(session.project(), session.active())),
        None => println!("No project is open."),
    }
}

fn print_editor<S: StoryService>(bench: &Workbench<S>) {
    match bench.session() {
        Some(session) => match render::editor(session.project(), session.active()) {
            Some(view) => println!("{view}"),
            None => println!("Nothing is selected."),
        },
        None => println!("No project is open."),
    }
}

fn select<S: StoryService>(bench: &mut Workbench<S>, target: ActiveEntry) {
    if bench.session().is_none() {
        println!("No project is open.");
        return;
    }
    if bench.select_entry(target) {
        print_editor(bench);
    } else {
        println!("No such entry in this project.");
    }
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
