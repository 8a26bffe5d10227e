use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub output_path: PathBuf,

    // `path` in the summary is `{path_prefix}/{file name}`
    pub path_prefix: String,
    pub draft_prefix: String,
    pub extension: String,
}

impl Context {
    pub fn new(posts_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            posts_dir,
            output_path,
            path_prefix: "posts".to_string(),
            draft_prefix: "draft_".to_string(),
            extension: "html".to_string(),
        }
    }

    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self::new(base_dir.join("posts"), base_dir.join("posts_summary.json"))
    }
}

// falls back to the current directory
pub(crate) fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_layout() {
        let ctx = Context::with_base_dir(Path::new("/srv/site"));
        assert_eq!(ctx.posts_dir, PathBuf::from("/srv/site/posts"));
        assert_eq!(ctx.output_path, PathBuf::from("/srv/site/posts_summary.json"));
        assert_eq!(ctx.path_prefix, "posts");
        assert_eq!(ctx.draft_prefix, "draft_");
        assert_eq!(ctx.extension, "html");
    }

    #[test]
    fn program_dir_is_a_directory() {
        assert!(program_dir().is_dir());
    }
}
