//! Where the catalogue markup comes from.
//!
//! Fetching and rendering the live page belongs to a browser-automation
//! collaborator outside this crate. Anything that can hand over the finished
//! markup implements [`CatalogueSource`]; a saved page on disk is the built-in
//! case. Standard and blueprint prices are different pages, so a source is
//! always for one of the two.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Provides the fully rendered catalogue page markup.
pub trait CatalogueSource {
    fn fetch(&self) -> Result<String>;
}

/// A catalogue page previously saved to disk
#[derive(Debug, Clone)]
pub struct FileCatalogue {
    path: PathBuf,
}

impl FileCatalogue {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogueSource for FileCatalogue {
    fn fetch(&self) -> Result<String> {
        info!("Reading catalogue page from {}", self.path.display());
        let html = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&html).into_owned())
    }
}
