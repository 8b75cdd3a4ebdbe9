//! `trellis board` — interactive board session.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Args;

use trellis_renderer::BoardRenderer;

use crate::session;

/// Arguments for `trellis board`.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Directory of .tera files overriding the embedded board templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

impl BoardArgs {
    pub fn run(self) -> Result<()> {
        let renderer = BoardRenderer::with_template_dir(self.templates.as_deref())
            .context("failed to load board templates")?;
        let stdin = std::io::stdin();
        session::run(stdin.lock(), Rc::new(renderer))
    }
}
