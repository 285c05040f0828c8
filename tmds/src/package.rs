//! Package of generated modules.

use std::io;

use thiserror::Error;

use crate::table::TableError;
use crate::vir;

#[allow(missing_docs)]
#[allow(variant_size_differences)]
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file system error: {error:?}")]
    Fs { error: io::Error },

    #[error("table error: {error}")]
    Table { error: TableError },

    #[error("module {name} is added to the package multiple times")]
    Duplicate { name: String },
}

/// Package.
#[derive(Debug, Default)]
pub struct Package {
    /// Modules.
    pub modules: Vec<vir::Module>,
}

impl Package {
    /// Adds the given module to package.
    pub fn add(&mut self, module: vir::Module) { self.modules.push(module); }
}
