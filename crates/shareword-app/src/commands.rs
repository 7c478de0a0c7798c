use std::{fs, path::Path};

use shareword_core::Puzzle;
use shareword_editor::{EditorSession, EditorSettings, InputAction, InputFrame, WordFinder};
use shareword_finder::Dictionary;

use crate::{
    AppError,
    cli::{Cli, Command},
    render::Rendered,
    script::Script,
};

/// Runs one subcommand and returns what should be printed.
pub fn run(cli: Cli) -> Result<String, AppError> {
    match cli.command {
        Command::New {
            width,
            height,
            title,
            force,
        } => {
            let puzzle = new_puzzle(&cli.puzzle, width.get(), height.get(), &title, force)?;
            Ok(Rendered::puzzle(&puzzle, false).to_string())
        }
        Command::Show { hide_answers } => {
            let puzzle = Puzzle::load(&cli.puzzle)?;
            Ok(Rendered::puzzle(&puzzle, hide_answers).to_string())
        }
        Command::Edit { script, save } => edit(&cli.puzzle, &script, save),
        Command::Find { pattern, limit } => find(&cli.dictionary, &pattern, limit),
    }
}

pub fn new_puzzle(
    path: &Path,
    width: usize,
    height: usize,
    title: &str,
    force: bool,
) -> Result<Puzzle, AppError> {
    if !force && path.exists() {
        return Err(AppError::AlreadyExists {
            path: path.to_owned(),
        });
    }
    let puzzle = Puzzle::new(width, height, title);
    puzzle.save_to(path)?;
    Ok(puzzle)
}

pub fn edit(puzzle_path: &Path, script_path: &Path, save: bool) -> Result<String, AppError> {
    let text = fs::read_to_string(script_path).map_err(|source| AppError::ReadScript {
        path: script_path.to_owned(),
        source,
    })?;
    let script = Script::parse(&text)?;
    log::info!(
        "replaying {} step(s) from {}",
        script.steps().len(),
        script_path.display()
    );

    let mut session = EditorSession::open(puzzle_path, EditorSettings::default())?;
    script.run(&mut session)?;
    if save {
        session.save()?;
    }
    Ok(Rendered::view(&session.view()).to_string())
}

pub fn find(dictionary_path: &Path, pattern: &str, limit: usize) -> Result<String, AppError> {
    let dictionary = Dictionary::load(dictionary_path)?;
    let mut finder = WordFinder::new(dictionary, limit);
    finder.handle(
        &InputFrame::new()
            .with_text(pattern)
            .with_pressed(InputAction::Confirm),
    );

    let mut output = format!("{}\n", finder.display_text());
    for word in finder.matches() {
        output.push_str(word);
        output.push('\n');
    }
    Ok(output)
}
