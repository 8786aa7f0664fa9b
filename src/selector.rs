//! Archive dropdown state.
//!
//! The archive starts [`Selection::Unselected`] and moves to
//! [`Selection::Selected`] on each explicit pick. Picking another entry
//! replaces the previous one. There is no way back to `Unselected`.

use anyhow::{Result, bail};
use log::debug;

use crate::github::Release;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Placeholder shown, no archive card rendered
    #[default]
    Unselected,
    /// Index into the archive of the card shown below the dropdown
    Selected(usize),
}

/// Selection state over the releases that follow the latest one.
#[derive(Debug, Clone)]
pub struct ArchiveSelector<'a> {
    older: &'a [Release],
    selection: Selection,
}

impl<'a> ArchiveSelector<'a> {
    pub fn new(older: &'a [Release]) -> Self {
        Self {
            older,
            selection: Selection::Unselected,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.older.len()
    }

    pub fn is_empty(&self) -> bool {
        self.older.is_empty()
    }

    /// Dropdown entries in archive order.
    pub fn options(&self) -> impl Iterator<Item = (usize, &'a Release)> + use<'a> {
        self.older.iter().enumerate()
    }

    /// The release whose card is currently shown, if any.
    pub fn selected(&self) -> Option<&'a Release> {
        match self.selection {
            Selection::Unselected => None,
            Selection::Selected(index) => self.older.get(index),
        }
    }

    /// Selects the archive entry at `index`. Out-of-range indices leave the state unchanged.
    pub fn select(&mut self, index: usize) -> Result<&'a Release> {
        let Some(release) = self.older.get(index) else {
            bail!(
                "No archived release at index {} (archive has {} entries)",
                index,
                self.len()
            );
        };
        debug!("Selected archived release {} ({})", index, release.tag_name);
        self.selection = Selection::Selected(index);
        Ok(release)
    }
}
