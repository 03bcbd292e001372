// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure formatting of engine and history results.
//!
//! Every function here returns a `String`; nothing reads the environment
//! or writes to the terminal.

pub mod benchmark;
pub mod compare;
pub mod history;

use crate::color::Palette;
use crate::output::OutputFormat;

/// How comparison differences are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiffMode {
    #[default]
    SideBySide,
    Unified,
    FullWidth,
}

/// Presentation switches. None of them change computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: bool,
    pub detailed: bool,
    pub format: OutputFormat,
    pub timing: bool,
    pub diff: DiffMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { color: false, detailed: false, format: OutputFormat::Table, timing: true, diff: DiffMode::SideBySide }
    }
}

impl RenderConfig {
    pub fn palette(&self) -> Palette {
        Palette::new(self.color)
    }
}
