use crate::format::parse_timestamp;
use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A stored timestamp.
///
/// The stored text is kept verbatim and written back unchanged, so a record
/// whose timestamp this program cannot read survives a rewrite of the
/// collection. [`instant`](Timestamp::instant) is the parsed value, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_timestamp(&raw);
        Self { raw, instant }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Millisecond precision, `Z` suffix: `2024-03-01T10:00:00.000Z`.
impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        let at = at.trunc_subsecs(3);
        Self {
            raw: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            instant: Some(at),
        }
    }
}

/// Unreadable timestamps order before every readable one.
impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::parse(String::deserialize(deserializer)?))
    }
}

/// A single post, persisted as `{id, title, content, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
}

/// Title and content as typed by the user, before trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Builds a new post from a draft: trimmed fields, fresh id, both timestamps now.
///
/// Emptiness is not checked here; callers validate first.
pub fn create_post(draft: &PostDraft) -> Post {
    let now = Timestamp::now();
    Post {
        id: Uuid::new_v4().to_string(),
        title: draft.title.trim().to_string(),
        content: draft.content.trim().to_string(),
        created_at: now.clone(),
        updated_at: now,
    }
}

impl Post {
    /// Applies an edit. `id` and `created_at` never change.
    pub fn apply_edit(&mut self, draft: &PostDraft) {
        self.title = draft.title.trim().to_string();
        self.content = draft.content.trim().to_string();
        self.updated_at = next_timestamp(&self.updated_at);
    }
}

/// Current time, bumped past `previous` when the clock has not moved forward.
///
/// An unreadable `previous` is ignored.
pub fn next_timestamp(previous: &Timestamp) -> Timestamp {
    let now = Timestamp::now();
    match (previous.instant(), now.instant()) {
        (Some(prev), Some(current)) if current <= prev => {
            Timestamp::from(prev + Duration::milliseconds(1))
        }
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn create_post_trims_and_stamps() {
        let post = create_post(&PostDraft::new("  Hello  ", "\n body \t"));
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "body");
        assert!(!post.id.is_empty());
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn create_post_generates_distinct_ids() {
        let ids: HashSet<_> = (0..200)
            .map(|i| create_post(&PostDraft::new(format!("t{}", i), "c")).id)
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn apply_edit_keeps_identity() {
        let mut post = create_post(&PostDraft::new("A", "B"));
        let original = post.clone();
        post.apply_edit(&PostDraft::new(" A2 ", "B"));

        assert_eq!(post.id, original.id);
        assert_eq!(post.created_at, original.created_at);
        assert_eq!(post.title, "A2");
        assert!(post.updated_at > original.updated_at);
    }

    #[test]
    fn next_timestamp_moves_past_future_previous() {
        let future = Timestamp::from(Utc::now() + Duration::hours(1));
        let next = next_timestamp(&future);
        assert_eq!(
            next.instant(),
            future.instant().map(|t| t + Duration::milliseconds(1))
        );
    }

    #[test]
    fn next_timestamp_beats_sub_millisecond_previous() {
        let previous = Timestamp::parse("2999-01-01T00:00:00.000500Z");
        assert_eq!(next_timestamp(&previous).as_str(), "2999-01-01T00:00:00.001Z");
    }

    #[test]
    fn next_timestamp_ignores_unreadable_previous() {
        let next = next_timestamp(&Timestamp::parse("not a date"));
        assert!(next.instant().is_some());
    }

    #[test]
    fn new_timestamps_use_millisecond_utc_form() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap() + Duration::microseconds(1500);
        assert_eq!(Timestamp::from(at).as_str(), "2024-03-01T10:00:00.001Z");
    }

    #[test]
    fn unreadable_timestamps_are_kept_verbatim() {
        let json = r#"{"id":"abc","title":"T","content":"C","createdAt":"","updatedAt":"sometime"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.updated_at.instant().is_none());

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["createdAt"], "");
        assert_eq!(value["updatedAt"], "sometime");
    }

    #[test]
    fn missing_timestamps_decode_as_empty() {
        let post: Post = serde_json::from_str(r#"{"id":"a","title":"T","content":"C"}"#).unwrap();
        assert_eq!(post.created_at.as_str(), "");
    }

    #[test]
    fn unreadable_orders_before_readable() {
        let readable = Timestamp::parse("2000-01-01T00:00:00Z");
        assert!(Timestamp::parse("garbage") < readable);
        assert!(Timestamp::parse("") < readable);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let post = create_post(&PostDraft::new("A", "B"));
        let value = serde_json::to_value(&post).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["content", "createdAt", "id", "title", "updatedAt"]);
        assert!(obj["createdAt"].is_string());
    }

    #[test]
    fn deserializes_browser_style_iso_strings() {
        let json = r#"{"id":"abc","title":"T","content":"C",
            "createdAt":"2024-03-01T10:00:00.000Z","updatedAt":"2024-03-02T11:30:00.000Z"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "abc");
        assert!(post.updated_at > post.created_at);
    }
}
