//! Runtime abstraction for the side effects of the commands.
//!
//! Commands never touch the file system or stdout directly; they go through
//! [`Runtime`] so tests can substitute a mock.
//!
//! # Structure
//!
//! - `fs` - File system operations (write, create directory, existence)
//! - `output` - Standard output

mod fs;
mod output;

use anyhow::Result;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;

    // Output
    fn print(&self, text: &str) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn print(&self, text: &str) -> Result<()> {
        self.print_impl(text)
    }
}
