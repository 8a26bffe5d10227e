use anyhow::bail;
use clap::{command, Arg};
use context::Context;
use std::path::{Path, PathBuf};

mod context;
mod extractor;
mod metadata;
mod summary;

fn summary_line(count: usize, output_path: &Path) -> String {
    format!("Wrote {} posts to {}", count, output_path.display())
}

// returns the number of posts written
fn run(ctx: &Context) -> anyhow::Result<usize> {
    if !ctx.posts_dir.is_dir() {
        bail!("Posts directory not found: {}", ctx.posts_dir.display());
    }

    let posts = extractor::load_posts(ctx)?;
    summary::save_summary(&ctx.output_path, &posts)?;

    Ok(posts.len())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("posts_dir")
                .help("Directory of exported posts. Defaults to `posts` next to the executable.")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("output")
                .help("Summary JSON to write. Existing contents will be replaced. Defaults to `posts_summary.json` next to the executable.")
                .value_parser(clap::value_parser!(PathBuf)),
        ])
        .get_matches();

    let mut ctx = Context::with_base_dir(&context::program_dir());
    if let Some(posts_dir) = matches.get_one::<PathBuf>("posts_dir") {
        ctx.posts_dir = posts_dir.to_owned();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        ctx.output_path = output.to_owned();
    }

    let count = run(&ctx)?;
    println!("{}", summary_line(count, &ctx.output_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const POST: &str = r#"<html><body>
<h1 class="p-name">Title</h1>
<section data-field="subtitle">Sub</section>
<section data-field="body"><p>Body</p></section>
<time class="dt-published" datetime="2024-06-01T12:00:00Z">June 1, 2024</time>
</body></html>"#;

    #[test]
    fn missing_posts_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::with_base_dir(dir.path());

        let err = run(&ctx).unwrap_err();
        assert!(err.to_string().contains("Posts directory not found"));
        assert!(err.to_string().contains(&ctx.posts_dir.display().to_string()));
        assert!(!ctx.output_path.exists());
    }

    #[test]
    fn empty_posts_dir_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::with_base_dir(dir.path());
        fs::create_dir(&ctx.posts_dir).unwrap();

        let count = run(&ctx).unwrap();
        assert_eq!(count, 0);
        assert_eq!(fs::read_to_string(&ctx.output_path).unwrap(), "[]");
        assert_eq!(
            summary_line(count, Path::new("/srv/posts_summary.json")),
            "Wrote 0 posts to /srv/posts_summary.json"
        );
    }

    #[test]
    fn writes_summary() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::with_base_dir(dir.path());
        fs::create_dir(&ctx.posts_dir).unwrap();
        fs::write(ctx.posts_dir.join("hello.html"), POST).unwrap();
        fs::write(ctx.posts_dir.join("draft_hello.html"), POST).unwrap();

        assert_eq!(run(&ctx).unwrap(), 1);
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&ctx.output_path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "title": "Title",
                "date": "2024-06-01T12:00:00Z",
                "subtitle": "Sub",
                "path": "posts/hello.html",
                "content": "Body",
            }])
        );
    }
}
