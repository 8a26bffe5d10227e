#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostMetadata {
    pub title: String,
    pub date: String,
    pub subtitle: String,
    pub path: String,
    pub content: String,
}
