use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::record::{Record, RecordField};
use super::threat::ThreatLevel;

/// Filterable fields of an outbound (external) log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExternalField {
    SourceIp,
    DestinationIp,
    Location,
    Domain,
    IntelType,
    Action,
    ThreatLevel,
}

impl RecordField for ExternalField {
    fn all() -> &'static [Self] {
        &[
            Self::SourceIp,
            Self::DestinationIp,
            Self::Location,
            Self::Domain,
            Self::IntelType,
            Self::Action,
            Self::ThreatLevel,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::SourceIp => "Source IP",
            Self::DestinationIp => "Destination IP",
            Self::Location => "Location",
            Self::Domain => "Domain",
            Self::IntelType => "Intel Type",
            Self::Action => "Action",
            Self::ThreatLevel => "Threat",
        }
    }
}

/// Outbound connection from an internal host to a flagged destination
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalLog {
    pub key: String,
    pub event_id: String,
    pub time: DateTime<Utc>,
    pub source_ip: String,
    pub destination_ip: String,
    pub destination_port: u16,
    /// Destination location
    pub location: Option<String>,
    /// Resolved destination domain, when DNS was observed
    pub domain: Option<String>,
    pub intel_type: String,
    pub action: String,
    pub threat_level: ThreatLevel,
    pub bytes_out: u64,
}

impl Record for ExternalLog {
    type Field = ExternalField;

    fn key(&self) -> &str {
        &self.key
    }

    fn field(&self, field: ExternalField) -> Option<Cow<'_, str>> {
        match field {
            ExternalField::SourceIp => Some(Cow::Borrowed(&self.source_ip)),
            ExternalField::DestinationIp => Some(Cow::Borrowed(&self.destination_ip)),
            ExternalField::Location => self.location.as_deref().map(Cow::Borrowed),
            ExternalField::Domain => self.domain.as_deref().map(Cow::Borrowed),
            ExternalField::IntelType => Some(Cow::Borrowed(&self.intel_type)),
            ExternalField::Action => Some(Cow::Borrowed(&self.action)),
            ExternalField::ThreatLevel => Some(Cow::Borrowed(self.threat_level.as_str())),
        }
    }
}
