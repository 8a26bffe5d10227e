mod data;
mod utils;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use log::{debug, info};
use scraper::Html;

use crate::{context::Context, metadata::PostMetadata};

use data::ExtractedPost;
use utils::{
    flattened_text, parse_published, sort_post, trimmed_text, BODY_SELECTOR, PUBLISHED_SELECTOR,
    SUBTITLE_SELECTOR, TITLE_SELECTOR,
};

// (file name, path) of each candidate, sorted by file name
fn list_post_files(ctx: &Context, dir: &Path) -> anyhow::Result<Vec<(String, PathBuf)>> {
    let mut entries = vec![];
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("while listing {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != ctx.extension.as_str()) {
            continue;
        }
        let file_name = entry.file_name();
        if file_name
            .as_encoded_bytes()
            .starts_with(ctx.draft_prefix.as_bytes())
        {
            debug!("{}: draft, skipping", file_name.to_string_lossy());
            continue;
        }
        entries.push((file_name, path));
    }
    entries.sort();

    Ok(entries
        .into_iter()
        .map(|(file_name, path)| (file_name.to_string_lossy().to_string(), path))
        .collect())
}

/// Returns `None` when the document lacks any of the required elements.
fn preprocess_document(ctx: &Context, name: &str, html: &str) -> Option<ExtractedPost> {
    let document = Html::parse_document(html);

    let Some(subtitle) = document.select(&SUBTITLE_SELECTOR).next() else {
        debug!("{name}: no subtitle section, skipping");
        return None;
    };
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        debug!("{name}: no body section, skipping");
        return None;
    };
    let Some(title) = document.select(&TITLE_SELECTOR).next() else {
        debug!("{name}: no title, skipping");
        return None;
    };
    let Some(published) = document.select(&PUBLISHED_SELECTOR).next() else {
        debug!("{name}: no published time, skipping");
        return None;
    };

    let title = trimmed_text(title);
    if title.is_empty() {
        debug!("{name}: empty title, skipping");
        return None;
    }

    let datetime = published.value().attr("datetime").map(str::trim);
    let sort_key = datetime.and_then(parse_published);
    let date = match (datetime, sort_key) {
        (Some(datetime), Some(_)) => datetime.to_string(),
        _ => {
            debug!("{name}: no usable datetime ({datetime:?}), using display text");
            trimmed_text(published)
        }
    };

    Some(ExtractedPost {
        meta: PostMetadata {
            title,
            date,
            subtitle: trimmed_text(subtitle),
            path: format!("{}/{}", ctx.path_prefix, name),
            content: flattened_text(body),
        },
        sort_key,
    })
}

/// Reads every post in `ctx.posts_dir`, newest first. Unreadable files abort the run.
pub(crate) fn load_posts(ctx: &Context) -> anyhow::Result<Vec<PostMetadata>> {
    let files = list_post_files(ctx, &ctx.posts_dir)?;
    info!(
        "Found {} candidate files in {}",
        files.len(),
        ctx.posts_dir.display()
    );

    let mut posts = vec![];
    for (name, path) in files {
        let html = std::fs::read_to_string(&path)
            .with_context(|| format!("while reading {}", path.display()))?;
        if let Some(post) = preprocess_document(ctx, &name, &html) {
            posts.push(post);
        }
    }

    posts.sort_by(sort_post);
    info!("Extracted {} posts", posts.len());

    Ok(posts.into_iter().map(|post| post.meta).collect())
}
