use std::{io, path::PathBuf};

use shareword_core::{LoadError, SaveError};
use shareword_editor::SessionError;
use shareword_finder::DictionaryError;

use crate::script::ScriptError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("{_0}")]
    Load(LoadError),
    #[display("{_0}")]
    Save(SaveError),
    #[display("{_0}")]
    Session(SessionError),
    #[display("{_0}")]
    Dictionary(DictionaryError),
    #[display("{_0}")]
    Script(ScriptError),
    #[display("could not read script {}: {source}", path.display())]
    #[from(ignore)]
    ReadScript { path: PathBuf, source: io::Error },
    #[display("{} already exists; pass --force to overwrite it", path.display())]
    #[from(ignore)]
    AlreadyExists { path: PathBuf },
}
