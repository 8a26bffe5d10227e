use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use log::info;

use crate::metadata::PostMetadata;

pub(crate) fn save_summary(summary_path: &Path, posts: &[PostMetadata]) -> anyhow::Result<()> {
    if let Some(parent) = summary_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("while creating {}", parent.display()))?;
        }
    }

    let summary_fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(summary_path)
        .with_context(|| format!("while opening {}", summary_path.display()))?;
    let mut writer = BufWriter::new(summary_fd);
    serde_json::to_writer_pretty(&mut writer, posts)?;
    writer.flush()?;
    info!("Summary written to {}", summary_path.display());

    Ok(())
}
