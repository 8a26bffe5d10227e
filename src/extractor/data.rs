use chrono::{DateTime, Utc};

use crate::metadata::PostMetadata;

#[derive(Debug, Clone)]
pub(super) struct ExtractedPost {
    pub meta: PostMetadata,
    // None sorts below every timestamp
    pub sort_key: Option<DateTime<Utc>>,
}
