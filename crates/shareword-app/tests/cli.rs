use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser as _;
use shareword_app::{AppError, Cli, run};
use shareword_core::{Axis, Position, Puzzle};

struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("shareword-cli-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn join(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn run_args(puzzle: &Path, args: &[&str]) -> Result<String, AppError> {
    let mut argv = vec!["shareword", "--puzzle", puzzle.to_str().unwrap()];
    argv.extend_from_slice(args);
    run(Cli::try_parse_from(argv).unwrap())
}

#[test]
fn new_then_show() {
    let dir = TempDir::new("new");
    let path = dir.join("mini.shareword");

    let output = run_args(&path, &["new", "3", "2", "--title", "Mini"]).unwrap();
    assert!(output.starts_with("Mini\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Mini\n3 2\n~~~~~~across:\ndown:\n");

    let err = run_args(&path, &["new", "4", "4"]).unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists { .. }));
    run_args(&path, &["new", "4", "4", "--force"]).unwrap();
    assert_eq!(Puzzle::load(&path).unwrap().grid().width(), 4);

    let shown = run_args(&path, &["show"]).unwrap();
    assert!(shown.contains("Across:\nDown:\n"));
}

#[test]
fn zero_size_is_rejected_by_the_parser() {
    assert!(Cli::try_parse_from(["shareword", "new", "0", "3"]).is_err());
}

#[test]
fn edit_script_and_save() {
    let dir = TempDir::new("edit");
    let path = dir.join("grid.shareword");
    let script = dir.join("steps.txt");
    run_args(&path, &["new", "5", "5", "--title", "Scripted"]).unwrap();
    fs::write(
        &script,
        "click primary 0 4\n\
         type bee\n\
         click primary 0 4\n\
         press enter\n\
         select across 0\n\
         press backspace\n\
         press backspace\n\
         press backspace\n\
         press backspace\n\
         type Buzzer\n\
         press enter\n\
         press save\n",
    )
    .unwrap();

    let output = run_args(&path, &["edit", "--script", script.to_str().unwrap()]).unwrap();
    assert!(output.contains("[B] E  E  #  # \n"), "{output}");

    let puzzle = Puzzle::load(&path).unwrap();
    let across = puzzle.clues().entries(Axis::Across);
    assert_eq!(across.len(), 1);
    assert_eq!(across[0].hint, "Buzzer");
    assert_eq!(across[0].origin, Position::new(0, 4));
    assert_eq!(puzzle.grid().at(Position::new(2, 4)), Some('E'));

    let hidden = run_args(&path, &["show", "--hide-answers"]).unwrap();
    assert!(hidden.contains(" .  .  .  #  # \n"), "{hidden}");
}

#[test]
fn edit_reports_script_errors() {
    let dir = TempDir::new("bad-script");
    let path = dir.join("grid.shareword");
    let script = dir.join("steps.txt");
    run_args(&path, &["new", "2", "2"]).unwrap();
    fs::write(&script, "type ok\nwiggle\n").unwrap();

    let err = run_args(&path, &["edit", "--script", script.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.to_string(), "script line 2: unknown command \"wiggle\"");

    let missing = dir.join("missing.txt");
    let err = run_args(&path, &["edit", "--script", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, AppError::ReadScript { .. }));
}

#[test]
fn show_missing_file_names_it() {
    let dir = TempDir::new("missing");
    let path = dir.join("absent.shareword");
    let err = run_args(&path, &["show"]).unwrap_err();
    assert!(err.to_string().contains("absent.shareword"), "{err}");
}

#[test]
fn find_words() {
    let dir = TempDir::new("find");
    let dictionary = dir.join("words.txt");
    fs::write(&dictionary, "CAT\nCOT\nCUT\nCART\nDOG\n").unwrap();
    let dictionary = dictionary.to_str().unwrap();

    let output = run_args(&dir.join("unused"), &["--dictionary", dictionary, "find", "C?T"]).unwrap();
    assert_eq!(output, "C_T\nCAT\nCOT\nCUT\n");

    let output = run_args(
        &dir.join("unused"),
        &["--dictionary", dictionary, "find", "CA*", "-n", "1"],
    )
    .unwrap();
    assert_eq!(output, "CA*\nCAT\n");
}
