//! Records returned by an integration load.

use crate::lenient;
use crate::style::TypeStyle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label shown for records without a name.
pub const UNNAMED_ITEM: &str = "Unnamed Item";

/// The kind of a record, decoded from its `type` field.
///
/// Wire values are case-sensitive: Airtable uses `Base` and `Table`, the
/// other integrations use lowercase names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// HubSpot contact.
    Contact,
    /// HubSpot company.
    Company,
    /// HubSpot deal.
    Deal,
    /// HubSpot object type (container).
    ObjectType,
    /// Airtable base (container).
    Base,
    /// Airtable table.
    Table,
    /// Notion database.
    Database,
    /// Notion page.
    Page,
    /// Any other value, kept verbatim. Empty when the field was missing.
    Other(String),
}

impl RecordKind {
    /// Decodes a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "contact" => Self::Contact,
            "company" => Self::Company,
            "deal" => Self::Deal,
            "object_type" => Self::ObjectType,
            "Base" => Self::Base,
            "Table" => Self::Table,
            "database" => Self::Database,
            "page" => Self::Page,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Contact => "contact",
            Self::Company => "company",
            Self::Deal => "deal",
            Self::ObjectType => "object_type",
            Self::Base => "Base",
            Self::Table => "Table",
            Self::Database => "database",
            Self::Page => "page",
            Self::Other(value) => value,
        }
    }

    /// Whether records of this kind act as grouping buckets.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::ObjectType | Self::Base)
    }

    /// Returns the icon and tones used to display this kind.
    #[must_use]
    pub fn style(&self) -> TypeStyle {
        TypeStyle::for_kind(self)
    }
}

impl Default for RecordKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RecordKind {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl Serialize for RecordKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient::opt_string(deserializer)?
            .map(|value| Self::parse(&value))
            .unwrap_or_default())
    }
}

/// One item returned by a backend load call.
///
/// Every field is optional on the wire. Numeric and boolean scalars are kept
/// as their JSON text; `null` and empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<String>,
    /// Name of the container this record belongs to.
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_path_or_name: Option<String>,
}

impl Record {
    /// Creates a record with the given name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<RecordKind>) -> Self {
        Self {
            name: Some(name.into()),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the parent container name.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_path_or_name = Some(parent.into());
        self
    }

    /// Returns the name, or [`UNNAMED_ITEM`] when it is missing.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_ITEM)
    }

    /// Whether this record is a grouping bucket.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }
}
