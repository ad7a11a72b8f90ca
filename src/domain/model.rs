use serde::{Deserialize, Serialize};
use std::fmt;

/// CRM user identifier (the value written into ASSIGNED_BY_ID downstream).
///
/// Mapping documents carry these either as strings or as bare integers, so
/// deserialization accepts both and normalizes to the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResponsibleId(String);

impl ResponsibleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResponsibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResponsibleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ResponsibleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = ResponsibleId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ResponsibleId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ResponsibleId(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ResponsibleId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Order identifier, used only in diagnostics. Shop platforms emit both
/// numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        OrderId::Number(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId::Text(id.to_string())
    }
}

/// Incoming order record, as handed over by the ingestion side. All rule
/// inputs are optional; an absent field simply fails its rule's guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub shipping_country_code: Option<String>,
    #[serde(default)]
    pub billing_country_code: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
}

impl Order {
    /// Tags from the comma-separated field: trimmed, empties dropped,
    /// original order preserved.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Shipping country wins over billing; empty strings count as absent.
    pub fn country_code(&self) -> Option<&str> {
        self.shipping_country_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.billing_country_code.as_deref().filter(|c| !c.is_empty()))
    }
}

/// Wall-clock time in the business timezone, decomposed for rule evaluation.
/// Weekday 0 is Sunday through 6 Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
}

impl LocalTime {
    pub fn new(weekday: u8, hour: u8, minute: u8) -> Self {
        Self {
            weekday,
            hour,
            minute,
        }
    }
}

/// Which rule in the priority chain produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedBy {
    Schedule,
    Tag,
    Country,
    Source,
    Default,
}

impl fmt::Display for MatchedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchedBy::Schedule => "schedule",
            MatchedBy::Tag => "tag",
            MatchedBy::Country => "country",
            MatchedBy::Source => "source",
            MatchedBy::Default => "default",
        };
        f.write_str(name)
    }
}

/// Outcome of one resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    Resolved {
        id: ResponsibleId,
        matched_by: MatchedBy,
    },
    Unresolved,
}

impl ResolutionResult {
    pub fn resolved(id: ResponsibleId, matched_by: MatchedBy) -> Self {
        ResolutionResult::Resolved { id, matched_by }
    }

    pub fn responsible_id(&self) -> Option<&ResponsibleId> {
        match self {
            ResolutionResult::Resolved { id, .. } => Some(id),
            ResolutionResult::Unresolved => None,
        }
    }

    pub fn matched_by(&self) -> Option<MatchedBy> {
        match self {
            ResolutionResult::Resolved { matched_by, .. } => Some(*matched_by),
            ResolutionResult::Unresolved => None,
        }
    }
}
