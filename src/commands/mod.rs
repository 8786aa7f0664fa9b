//! Command orchestration: fetch once, then render or list.

mod list;
mod render;

pub use list::{format_release_lines, list};
pub use render::{RenderOptions, render, render_content};
