use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Server-side lifecycle of a project. Only the backend moves it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Queued,
    Processing,
    #[serde(alias = "preview_ready", alias = "exporting")]
    Preview,
    Done,
    #[serde(alias = "failed")]
    Error,
}

impl ProjectStatus {
    /// Polling stops for good once one of these is observed
    pub fn is_terminal(self) -> bool {
        matches!(self, ProjectStatus::Done | ProjectStatus::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Queued => "queued",
            ProjectStatus::Processing => "processing",
            ProjectStatus::Preview => "preview",
            ProjectStatus::Done => "done",
            ProjectStatus::Error => "error",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested highlight clip. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: String,
    pub title: String,
    /// Highlight confidence in `[0, 1]`
    pub score: f32,
    pub thumbnail_url: String,
    pub video_url: String,
    pub transcript_snippet: String,
    /// Length in seconds
    pub duration: f32,
}

impl Clip {
    /// Score as a whole percentage, e.g. `0.92 -> 92`
    pub fn score_percent(&self) -> u32 {
        (self.score.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    pub fn duration_label(&self) -> String {
        format!("{}s", self.duration.max(0.0).round() as u32)
    }
}

/// Snapshot of a project as returned by `GET /jobs/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub status: ProjectStatus,
    /// `None` when the backend sends `null` or a timestamp we cannot read
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clips: Vec<Clip>,
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// RFC 3339, or a timestamp without an offset which is taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    let naive = raw
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match naive {
        Ok(naive) => Some(naive.and_utc()),
        Err(e) => {
            debug!("Ignoring unreadable timestamp {:?}: {}", raw, e);
            None
        }
    }
}

/// Response body of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "projectId", alias = "project_id")]
    pub project_id: String,
}

/// Where the bytes of an upload come from
#[derive(Debug)]
pub enum UploadBody {
    Bytes(Vec<u8>),
    /// Streamed from disk while the request is sent
    File(tokio::fs::File),
}

/// An episode ready to be sent as the multipart `file` part
#[derive(Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    /// Body length in bytes
    pub size: u64,
    pub body: UploadBody,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            size: bytes.len() as u64,
            body: UploadBody::Bytes(bytes),
        }
    }

    /// Open an episode on disk. Nothing is read until the upload runs.
    pub async fn from_path(path: &Path) -> crate::Result<Self> {
        let file = tokio::fs::File::open(path).await?;
        let size = file.metadata().await?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self {
            mime_type: mime_for(&file_name).to_string(),
            file_name,
            size,
            body: UploadBody::File(file),
        })
    }

    pub fn len(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Extensions offered by the file picker
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv"];

fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_snapshot_from_wire() {
        let body = r#"{
            "id": "p1",
            "status": "processing",
            "createdAt": "2024-05-01T12:00:00Z",
            "clips": [{
                "id": "c1",
                "title": "Hook",
                "score": 0.875,
                "thumbnailUrl": "https://cdn/t.jpg",
                "videoUrl": "https://cdn/v.mp4",
                "transcriptSnippet": "so here's the thing",
                "duration": 31.6
            }]
        }"#;

        let job: Job = serde_json::from_str(body).unwrap();
        assert_eq!(job.id, "p1");
        assert_eq!(job.status, ProjectStatus::Processing);
        assert_eq!(job.clips.len(), 1);
        assert_eq!(job.clips[0].score_percent(), 88);
        assert_eq!(job.clips[0].duration_label(), "32s");
    }

    #[test]
    fn test_missing_clips_defaults_empty() {
        let job: Job =
            serde_json::from_str(r#"{"id":"p2","status":"queued","createdAt":"2024-05-01T12:00:00Z"}"#)
                .unwrap();
        assert!(job.clips.is_empty());
    }

    #[test]
    fn test_created_at_without_offset_is_utc() {
        let job: Job = serde_json::from_str(
            r#"{"id":"p1","status":"done","createdAt":"2024-05-01T12:00:00.123456","clips":[]}"#,
        )
        .unwrap();
        let created = job.created_at.unwrap();
        assert_eq!(created.to_rfc3339(), "2024-05-01T12:00:00.123456+00:00");

        let job: Job = serde_json::from_str(
            r#"{"id":"p1","status":"done","createdAt":"2024-05-01 12:00:00"}"#,
        )
        .unwrap();
        assert!(job.created_at.is_some());
    }

    #[test]
    fn test_created_at_null_or_garbage_still_decodes() {
        let job: Job =
            serde_json::from_str(r#"{"id":"p1","status":"processing","createdAt":null}"#).unwrap();
        assert_eq!(job.status, ProjectStatus::Processing);
        assert!(job.created_at.is_none());

        let job: Job =
            serde_json::from_str(r#"{"id":"p1","status":"processing","createdAt":"yesterday"}"#)
                .unwrap();
        assert!(job.created_at.is_none());

        let job: Job = serde_json::from_str(r#"{"id":"p1","status":"processing"}"#).unwrap();
        assert!(job.created_at.is_none());
    }

    #[test]
    fn test_created_at_with_offset_is_normalised() {
        let ts = parse_timestamp("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_backend_status_aliases() {
        let status: ProjectStatus = serde_json::from_str(r#""preview_ready""#).unwrap();
        assert_eq!(status, ProjectStatus::Preview);
        let status: ProjectStatus = serde_json::from_str(r#""failed""#).unwrap();
        assert_eq!(status, ProjectStatus::Error);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ProjectStatus::Done.is_terminal());
        assert!(ProjectStatus::Error.is_terminal());
        assert!(!ProjectStatus::Queued.is_terminal());
        assert!(!ProjectStatus::Processing.is_terminal());
        assert!(!ProjectStatus::Preview.is_terminal());
    }

    #[test]
    fn test_upload_response_accepts_both_spellings() {
        let a: UploadResponse = serde_json::from_str(r#"{"projectId":"p1"}"#).unwrap();
        let b: UploadResponse = serde_json::from_str(r#"{"project_id":"p1"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_from_path_opens_without_buffering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Episode 12.mov");
        std::fs::write(&path, vec![7u8; 4096]).unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "Episode 12.mov");
        assert_eq!(file.mime_type, "video/quicktime");
        assert_eq!(file.len(), 4096);
        assert!(matches!(file.body, UploadBody::File(_)));
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_io_error() {
        let err = UploadFile::from_path(Path::new("/definitely/not/here.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::ClipperError::Io(_)));
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(UploadFile::new("ep.MOV", vec![1]).mime_type, "video/quicktime");
        assert_eq!(UploadFile::new("ep.mp4", vec![1]).mime_type, "video/mp4");
        assert_eq!(UploadFile::new("notes", vec![1]).mime_type, "application/octet-stream");
    }
}
