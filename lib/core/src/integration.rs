//! Supported integrations and their backend endpoints.
//!
//! Each integration is identified in the UI by its display name and served by
//! the backend under a fixed path segment:
//!
//! | Integration | Endpoint   |
//! |-------------|------------|
//! | Notion      | `notion`   |
//! | Airtable    | `airtable` |
//! | HubSpot     | `hubspot`  |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An external service whose records can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    Notion,
    Airtable,
    HubSpot,
}

impl IntegrationType {
    /// Every supported integration, in menu order.
    pub const ALL: [IntegrationType; 3] = [Self::Notion, Self::Airtable, Self::HubSpot];

    /// Returns the backend path segment serving this integration.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Notion => "notion",
            Self::Airtable => "airtable",
            Self::HubSpot => "hubspot",
        }
    }

    /// Returns the name shown to users.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Notion => "Notion",
            Self::Airtable => "Airtable",
            Self::HubSpot => "HubSpot",
        }
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when an integration name is not in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIntegration {
    /// The name that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnknownIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown integration type '{}'", self.name)
    }
}

impl std::error::Error for UnknownIntegration {}

impl FromStr for IntegrationType {
    type Err = UnknownIntegration;

    /// Parses a display name. Matching is exact, like the endpoint table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|integration| integration.display_name() == s)
            .ok_or_else(|| UnknownIntegration {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_mapping() {
        assert_eq!(IntegrationType::Notion.endpoint(), "notion");
        assert_eq!(IntegrationType::Airtable.endpoint(), "airtable");
        assert_eq!(IntegrationType::HubSpot.endpoint(), "hubspot");
    }

    #[test]
    fn parse_display_names() {
        for integration in IntegrationType::ALL {
            let parsed: IntegrationType = integration
                .display_name()
                .parse()
                .expect("display name should parse");
            assert_eq!(parsed, integration);
        }
    }

    #[test]
    fn parse_unknown_name() {
        let err = "Salesforce"
            .parse::<IntegrationType>()
            .expect_err("unmapped name should not parse");
        assert_eq!(err.name, "Salesforce");
        assert!(err.to_string().contains("Salesforce"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("hubspot".parse::<IntegrationType>().is_err());
        assert!("Hubspot".parse::<IntegrationType>().is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&IntegrationType::HubSpot).expect("serialize");
        assert_eq!(json, "\"HubSpot\"");
    }
}
