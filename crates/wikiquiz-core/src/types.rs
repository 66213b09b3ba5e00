//! Quiz domain types exchanged with the quiz service
//!
//! All records are owned by the remote service. The client only ever holds
//! short-lived copies, so every type here is plain data. Fields are decoded
//! leniently: a missing `quiz`, `answer` or unreadable timestamp degrades that
//! one field and never fails the whole payload.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::wiki_url::validate_article_url;

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a quiz generation request.
///
/// Can only be built from a valid Wikipedia article URL, so holding one is
/// proof the URL passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRequest {
    url: String,
}

impl QuizRequest {
    pub fn new(url: &str) -> Result<Self, ValidationError> {
        validate_article_url(url)?;
        Ok(Self {
            url: url.trim().to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the quiz history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// `None` when the service sent no readable timestamp.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub date_generated: Option<NaiveDateTime>,
}

/// Sort history rows newest first, ties broken by id (highest first).
///
/// Rows without a timestamp sort after every dated row.
pub fn sort_records_newest_first(records: &mut [QuizRecord]) {
    records.sort_by(|a, b| {
        b.date_generated
            .cmp(&a.date_generated)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Parse the timestamp formats the quiz service is known to emit.
///
/// The service writes naive ISO-8601 (`2024-06-01T12:00:00.123456`).
/// RFC 3339 values are normalised to UTC, bare dates to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_timestamp))
}

// ─────────────────────────────────────────────────────────────────────────────
// Quiz detail
// ─────────────────────────────────────────────────────────────────────────────

/// Named entities extracted from the article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyEntities {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub people: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub organizations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,
}

impl KeyEntities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty() && self.locations.is_empty()
    }
}

/// Full quiz payload, as returned by generation and by detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDetail {
    /// Present on persisted quizzes.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_entities: Option<KeyEntities>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sections: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub related_topics: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub date_generated: Option<NaiveDateTime>,
}

impl QuizDetail {
    /// Summary text, if non-blank.
    pub fn summary(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Entities to display. Absent and empty are treated the same.
    pub fn entities(&self) -> Option<&KeyEntities> {
        self.key_entities.as_ref().filter(|e| !e.is_empty())
    }
}

/// Question difficulty as labelled by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<String>,
    /// Empty when the service omitted it; no option is then marked correct.
    #[serde(default, deserialize_with = "null_as_string")]
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<Difficulty>,
}

impl QuizQuestion {
    /// Index of the option matching `answer`.
    ///
    /// `None` unless exactly one option equals the answer verbatim; a
    /// malformed question is shown without a correct marker.
    pub fn correct_index(&self) -> Option<usize> {
        if self.answer.is_empty() {
            return None;
        }
        let mut matches = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| **option == self.answer);
        let (index, _) = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(index)
    }

    /// Whether the question satisfies the answer/options contract.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.correct_index().is_some()
    }

    /// Difficulty to display; unlabelled questions show as medium.
    pub fn display_difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }
}

/// Letter label for an option position: 0 → `A`, 1 → `B`, ...
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Difficulty::parse))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
