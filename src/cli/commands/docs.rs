//! Hidden `docs` command: man pages for the CLI.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;

pub fn run_docs_command(output: &Path) -> Result<()> {
    let written = generate_man_pages(Cli::command(), output)?;
    println!(
        "📘 CLI documentation generated in: {} ({} page(s))",
        output.display(),
        written.len()
    );
    Ok(())
}

/// Render one page for the root command and one per visible subcommand.
pub fn generate_man_pages(command: clap::Command, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| {
        format!(
            "failed to create docs output directory {}",
            out_dir.display()
        )
    })?;

    let root = command.get_name().to_string();
    let mut written = vec![render_page(&command, &root, out_dir)?];

    for sub in command.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        let page = format!("{}-{}", root, sub.get_name());
        written.push(render_page(sub, &page, out_dir)?);
    }
    Ok(written)
}

fn render_page(command: &clap::Command, page: &str, out_dir: &Path) -> Result<PathBuf> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command.clone())
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {page}"))?;

    let path = out_dir.join(format!("{page}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}
