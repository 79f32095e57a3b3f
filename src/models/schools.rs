use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One school as returned by the remote API.
///
/// Only the fields the table shows are modelled. Every field is optional and
/// a field of the wrong JSON type reads as absent, so a record never fails
/// to parse. List elements are parsed one by one: a broken element becomes
/// an empty one without taking its siblings down.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchoolRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub edu_org: Option<EduOrg>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub supplements: Option<Vec<Supplement>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EduOrg {
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<Region>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub post_address: Option<String>,
}

/// Accreditation supplement; carries the list of programs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Supplement {
    #[serde(default, deserialize_with = "lenient_list")]
    pub educational_programs: Option<Vec<EducationalProgram>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationalProgram {
    #[serde(default, deserialize_with = "lenient")]
    pub edu_level: Option<EduLevel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EduLevel {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// An array whose unusable elements fall back to `T::default()`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|items| {
        items
            .iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect()
    }))
}

/// Strings as-is, numbers and booleans as their text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl SchoolRecord {
    /// Parse one list item; anything unusable becomes an empty record.
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    pub fn region_name(&self) -> Option<&str> {
        self.edu_org
            .as_ref()
            .and_then(|org| org.region.as_ref())
            .and_then(|region| non_empty(&region.name))
    }

    pub fn short_name(&self) -> Option<&str> {
        self.edu_org
            .as_ref()
            .and_then(|org| non_empty(&org.short_name))
    }

    pub fn post_address(&self) -> Option<&str> {
        self.edu_org
            .as_ref()
            .and_then(|org| org.contact_info.as_ref())
            .and_then(|info| non_empty(&info.post_address))
    }

    /// Education levels of the programs in the first supplement, classified
    /// and deduplicated in first-seen order.
    pub fn education_levels(&self) -> Vec<EducationLevel> {
        let programs = self
            .supplements
            .as_ref()
            .and_then(|supplements| supplements.first())
            .and_then(|first| first.educational_programs.as_deref())
            .unwrap_or_default();

        let mut levels = Vec::new();
        for program in programs {
            let raw = program
                .edu_level
                .as_ref()
                .and_then(|level| level.name.as_deref());
            let level = EducationLevel::classify(raw);
            if !levels.contains(&level) {
                levels.push(level);
            }
        }
        levels
    }
}

/// Category tag shown in the "education level" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Higher,
    Professional,
    Bachelor,
    Specialist,
    Secondary,
}

/// Level names used by the registry, mapped to their tag. Anything else is
/// `Secondary`.
const LEVEL_NAMES: [(&str, EducationLevel); 4] = [
    ("Высшее образование - магистратура", EducationLevel::Higher),
    ("Высшее профессиональное образование", EducationLevel::Professional),
    ("Высшее образование - бакалавриат", EducationLevel::Bachelor),
    ("Высшее образование - специалитет", EducationLevel::Specialist),
];

impl EducationLevel {
    pub fn classify(raw_name: Option<&str>) -> Self {
        raw_name
            .and_then(|name| {
                LEVEL_NAMES
                    .iter()
                    .find(|(known, _)| *known == name)
                    .map(|(_, level)| *level)
            })
            .unwrap_or(Self::Secondary)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Higher => "Higher",
            Self::Professional => "Professional",
            Self::Bachelor => "Bachelor",
            Self::Specialist => "Specialist",
            Self::Secondary => "Secondary",
        }
    }
}
