//! Lesson data as exported by the scheduling API.
//!
//! The API client itself lives elsewhere; the admin panel reads the JSON array
//! of lessons it produces and narrows it with the same client-side filters the
//! web dashboard offers.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::calendar::{LessonRecord, LessonStatus};

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read lessons from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed lesson feed: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_lessons(json: &str) -> FeedResult<Vec<LessonRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub async fn load_lessons(path: impl AsRef<Path>) -> FeedResult<Vec<LessonRecord>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let lessons = parse_lessons(&contents)?;
    debug!(count = lessons.len(), path = %path.display(), "lesson feed loaded");
    Ok(lessons)
}

/// Status and student-name filter applied before the lessons reach the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonFilter {
    pub status: Option<LessonStatus>,
    pub student: String,
}

impl LessonFilter {
    pub fn is_active(&self) -> bool {
        self.status.is_some() || !self.student.trim().is_empty()
    }

    pub fn matches(&self, lesson: &LessonRecord) -> bool {
        if self.status.is_some_and(|status| status != lesson.status) {
            return false;
        }
        let needle = self.student.trim().to_lowercase();
        needle.is_empty() || lesson.student_name.to_lowercase().contains(&needle)
    }

    pub fn apply(&self, lessons: &[LessonRecord]) -> Vec<LessonRecord> {
        lessons
            .iter()
            .filter(|lesson| self.matches(lesson))
            .cloned()
            .collect()
    }
}

/// Number of lessons per status, in [`LessonStatus`] order.
pub fn status_summary<'a>(
    lessons: impl IntoIterator<Item = &'a LessonRecord>,
) -> BTreeMap<LessonStatus, usize> {
    let mut summary = BTreeMap::new();
    for lesson in lessons {
        *summary.entry(lesson.status).or_insert(0) += 1;
    }
    summary
}
