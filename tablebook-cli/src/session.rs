//! One open address book: the data file path plus the live [`Model`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tablebook_core::{prefs, storage, Model};

use crate::commands::AppCommand;
use crate::render;

#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    model: Model,
}

impl Session {
    /// Open the data file named by `data`, or the one in the user's prefs.
    /// Prefs are written back so a first run leaves a `preferences.json` to edit.
    pub fn open(data: Option<PathBuf>) -> Result<Self> {
        let path = match data {
            Some(path) => path,
            None => {
                let prefs = prefs::load().context("failed to load preferences")?;
                prefs::save(&prefs).context("failed to save preferences")?;
                prefs.address_book_file_path
            }
        };
        Self::open_at(path)
    }

    pub fn open_at(path: PathBuf) -> Result<Self> {
        let book = storage::load_at(&path)
            .with_context(|| format!("failed to load address book from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "session opened");
        Ok(Self {
            path,
            model: Model::new(book),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Execute one command, persist the address book, print the outcome.
    pub fn run(&mut self, command: AppCommand) -> Result<()> {
        let prepared = command.prepare()?;
        tracing::debug!(command = ?prepared.command, "executing");
        let outcome = prepared.command.execute(&mut self.model)?;
        storage::save_at(&self.path, self.model.address_book())
            .with_context(|| format!("failed to save address book to {}", self.path.display()))?;
        render::print_outcome(&self.model, &outcome.feedback, outcome.view, prepared.format)
    }
}
