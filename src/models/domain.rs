use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::core::range::PriceRange;

/// Highest selectable star rating
pub const MAX_RATING: u8 = 5;

/// Errors raised when reading a field of a catalog record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("malformed `{field}` on tutor {tutor_id}")]
    Malformed { field: &'static str, tutor_id: String },

    #[error("non-finite `{field}` on tutor {tutor_id}")]
    NonFinite { field: &'static str, tutor_id: String },
}

/// A field value as received from the catalog.
///
/// Values of the expected shape land in `Valid`; anything else is kept
/// verbatim in `Malformed` so it serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Malformed(serde_json::Value),
}

/// The `subject` field is either a single subject or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectField {
    One(String),
    Many(Vec<String>),
}

impl SubjectField {
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            SubjectField::One(subject) => vec![subject.as_str()],
            SubjectField::Many(subjects) => subjects.iter().map(String::as_str).collect(),
        }
    }
}

/// Teaching details attached to a tutor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Lenient<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Lenient<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects_taught: Option<Lenient<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_teaching_exp: Option<Lenient<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_content: Option<Lenient<String>>,
}

/// Tutor entry from the catalog endpoint. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawTutorRecord")]
pub struct TutorRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Lenient<SubjectField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Lenient<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_profile: Option<Lenient<TeacherProfile>>,
}

/// Wire shape of a tutor entry. Document stores send `_id`, some also add a
/// virtual `id`; either may be a string, a number or an object id.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTutorRecord {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(rename = "_id", default)]
    object_id: Option<serde_json::Value>,
    #[serde(default)]
    name: Option<Lenient<String>>,
    #[serde(default)]
    subject: Option<Lenient<SubjectField>>,
    #[serde(default)]
    avatar_url: Option<Lenient<String>>,
    #[serde(default)]
    teacher_profile: Option<Lenient<TeacherProfile>>,
}

impl From<RawTutorRecord> for TutorRecord {
    fn from(raw: RawTutorRecord) -> Self {
        let id = [&raw.id, &raw.object_id]
            .into_iter()
            .flatten()
            .find_map(plain_id)
            .or_else(|| {
                [&raw.id, &raw.object_id]
                    .into_iter()
                    .flatten()
                    .find(|value| !value.is_null())
                    .map(|value| value.to_string())
            })
            .unwrap_or_default();

        Self {
            id,
            name: raw.name,
            subject: raw.subject,
            avatar_url: raw.avatar_url,
            teacher_profile: raw.teacher_profile,
        }
    }
}

/// Text form of a string, number or `{"$oid": ".."}` id
fn plain_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(id) => Some(id.clone()),
        serde_json::Value::Number(id) => Some(id.to_string()),
        serde_json::Value::Object(fields) => fields
            .get("$oid")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn read<'a, T>(
    slot: &'a Option<Lenient<T>>,
    field: &'static str,
    tutor_id: &str,
) -> Result<Option<&'a T>, FieldError> {
    match slot {
        None => Ok(None),
        Some(Lenient::Valid(value)) => Ok(Some(value)),
        Some(Lenient::Malformed(_)) => Err(FieldError::Malformed {
            field,
            tutor_id: tutor_id.to_string(),
        }),
    }
}

fn finite(value: f64, field: &'static str, tutor_id: &str) -> Result<f64, FieldError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError::NonFinite {
            field,
            tutor_id: tutor_id.to_string(),
        })
    }
}

impl TutorRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(Lenient::Valid(name.into())),
            subject: None,
            avatar_url: None,
            teacher_profile: None,
        }
    }

    pub fn with_subject(mut self, subject: SubjectField) -> Self {
        self.subject = Some(Lenient::Valid(subject));
        self
    }

    pub fn with_hourly_rate(self, rate: f64) -> Self {
        self.update_profile(|profile| profile.hourly_rate = Some(Lenient::Valid(rate)))
    }

    pub fn with_rating(self, rating: f64) -> Self {
        self.update_profile(|profile| profile.rating = Some(Lenient::Valid(rating)))
    }

    pub fn with_subjects_taught<I, S>(self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let subjects = subjects.into_iter().map(Into::into).collect();
        self.update_profile(|profile| profile.subjects_taught = Some(Lenient::Valid(subjects)))
    }

    pub fn with_bio(self, bio: impl Into<String>) -> Self {
        let bio = bio.into();
        self.update_profile(|profile| profile.bio_content = Some(Lenient::Valid(bio)))
    }

    fn update_profile(mut self, update: impl FnOnce(&mut TeacherProfile)) -> Self {
        let mut profile = match self.teacher_profile.take() {
            Some(Lenient::Valid(profile)) => profile,
            _ => TeacherProfile::default(),
        };
        update(&mut profile);
        self.teacher_profile = Some(Lenient::Valid(profile));
        self
    }

    /// Display name, empty when absent
    pub fn name(&self) -> Result<&str, FieldError> {
        Ok(read(&self.name, "name", &self.id)?.map_or("", String::as_str))
    }

    /// The `subject` field normalized to a list
    pub fn subject_list(&self) -> Result<Vec<&str>, FieldError> {
        Ok(read(&self.subject, "subject", &self.id)?
            .map(SubjectField::as_list)
            .unwrap_or_default())
    }

    pub fn profile(&self) -> Result<Option<&TeacherProfile>, FieldError> {
        read(&self.teacher_profile, "teacherProfile", &self.id)
    }

    /// Hourly rate, 0 when unset
    pub fn hourly_rate(&self) -> Result<f64, FieldError> {
        let rate = match self.profile()? {
            Some(profile) => read(&profile.hourly_rate, "hourlyRate", &self.id)?.copied(),
            None => None,
        };
        finite(rate.unwrap_or(0.0), "hourlyRate", &self.id)
    }

    /// Average rating, 0 when unset
    pub fn rating(&self) -> Result<f64, FieldError> {
        let rating = match self.profile()? {
            Some(profile) => read(&profile.rating, "rating", &self.id)?.copied(),
            None => None,
        };
        finite(rating.unwrap_or(0.0), "rating", &self.id)
    }

    pub fn subjects_taught(&self) -> Result<&[String], FieldError> {
        let taught = match self.profile()? {
            Some(profile) => read(&profile.subjects_taught, "subjectsTaught", &self.id)?,
            None => None,
        };
        Ok(taught.map_or(&[][..], Vec::as_slice))
    }

    /// Bio text, empty when absent
    pub fn bio(&self) -> Result<&str, FieldError> {
        let bio = match self.profile()? {
            Some(profile) => read(&profile.bio_content, "bioContent", &self.id)?,
            None => None,
        };
        Ok(bio.map_or("", String::as_str))
    }

    /// Every subject the tutor lists: `subject` followed by `subjectsTaught`
    pub fn all_subjects(&self) -> Result<Vec<&str>, FieldError> {
        let mut subjects = self.subject_list()?;
        subjects.extend(self.subjects_taught()?.iter().map(String::as_str));
        Ok(subjects)
    }
}

/// One set of filter choices. The controller keeps two of these: a draft and
/// the committed set used for matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub subjects: BTreeSet<String>,
    pub min_rating: u8,
}

impl FilterCriteria {
    /// The "nothing selected" sentinel
    pub fn unrestricted() -> Self {
        Self {
            price_range: PriceRange::unrestricted(),
            subjects: BTreeSet::new(),
            min_rating: 0,
        }
    }

    /// True when any dimension narrows the catalog
    pub fn is_active(&self) -> bool {
        !self.subjects.is_empty() || self.min_rating > 0 || !self.price_range.is_unrestricted()
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::unrestricted()
    }
}

/// Request to show the detail page of a tutor. Navigation itself is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    #[serde(rename = "tutorId")]
    pub tutor_id: String,
}
