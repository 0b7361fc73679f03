use jiff::civil::{Date, DateTime};
use jiff::{Timestamp, tz::TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::METACRITIC_ORIGIN;

/// Body of a successful posts listing.
///
/// The backend encodes an empty listing as `null`, so a missing or null
/// `posts` field is treated as no posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Option<Vec<PostRecord>>,
}

impl PostsPage {
    /// Normalize every record, preserving server order. Fails on the first
    /// record whose release date cannot be parsed.
    pub fn into_posts(self) -> Result<Vec<Post>, ReleaseDateError> {
        self.posts
            .unwrap_or_default()
            .into_iter()
            .map(Post::try_from)
            .collect()
    }
}

/// A post as it appears on the wire, with the release date still as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub href: String,
    pub score: i32,
    pub description: String,
    pub release_date: String,
    #[serde(default)]
    pub id: Option<i64>,
}

/// A review post ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    /// Path relative to [`METACRITIC_ORIGIN`].
    pub href: String,
    pub score: i32,
    pub description: String,
    pub release_date: Date,
    pub id: Option<i64>,
}

impl Post {
    /// Absolute link to the post's page.
    pub fn redirect_url(&self) -> String {
        format!("{METACRITIC_ORIGIN}{}", self.href)
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = ReleaseDateError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        Ok(Post {
            release_date: parse_release_date(&record.release_date)?,
            title: record.title,
            href: record.href,
            score: record.score,
            description: record.description,
            id: record.id,
        })
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title:       {}", self.title)?;
        writeln!(f, "ReleaseYear: {}", self.release_date.year())?;
        write!(f, "Score:       {}", self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid release date: {0:?}")]
pub struct ReleaseDateError(pub String);

/// Parse a wire release date.
///
/// Timestamps with an offset (the backend sends UTC midnight) resolve to
/// their UTC calendar date. Plain dates and offset-less datetimes keep their
/// calendar date.
pub fn parse_release_date(raw: &str) -> Result<Date, ReleaseDateError> {
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(date) = raw.parse::<Date>() {
        return Ok(date);
    }
    raw.parse::<DateTime>()
        .map(|datetime| datetime.date())
        .map_err(|_| ReleaseDateError(raw.to_string()))
}
