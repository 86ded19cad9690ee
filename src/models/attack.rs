use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::record::{Record, RecordField};
use super::threat::ThreatLevel;

/// Filterable fields of an attack log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttackField {
    AttackerIp,
    TargetIp,
    Location,
    IntelType,
    Action,
    ThreatLevel,
    Protocol,
}

impl RecordField for AttackField {
    fn all() -> &'static [Self] {
        &[
            Self::AttackerIp,
            Self::TargetIp,
            Self::Location,
            Self::IntelType,
            Self::Action,
            Self::ThreatLevel,
            Self::Protocol,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::AttackerIp => "Attacker IP",
            Self::TargetIp => "Target IP",
            Self::Location => "Location",
            Self::IntelType => "Intel Type",
            Self::Action => "Action",
            Self::ThreatLevel => "Threat",
            Self::Protocol => "Protocol",
        }
    }
}

/// An inbound attack observed by a sensor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackLog {
    pub key: String,
    pub event_id: String,
    pub time: DateTime<Utc>,
    pub attacker_ip: String,
    pub attacker_port: u16,
    pub target_ip: String,
    pub target_port: u16,
    /// Attacker location, absent for private source ranges
    pub location: Option<String>,
    pub intel_type: String,
    pub action: String,
    pub threat_level: ThreatLevel,
    pub protocol: String,
    pub payload: String,
}

impl AttackLog {
    pub fn source(&self) -> String {
        format!("{}:{}", self.attacker_ip, self.attacker_port)
    }

    pub fn destination(&self) -> String {
        format!("{}:{}", self.target_ip, self.target_port)
    }
}

impl Record for AttackLog {
    type Field = AttackField;

    fn key(&self) -> &str {
        &self.key
    }

    fn field(&self, field: AttackField) -> Option<Cow<'_, str>> {
        match field {
            AttackField::AttackerIp => Some(Cow::Borrowed(&self.attacker_ip)),
            AttackField::TargetIp => Some(Cow::Borrowed(&self.target_ip)),
            AttackField::Location => self.location.as_deref().map(Cow::Borrowed),
            AttackField::IntelType => Some(Cow::Borrowed(&self.intel_type)),
            AttackField::Action => Some(Cow::Borrowed(&self.action)),
            AttackField::ThreatLevel => Some(Cow::Borrowed(self.threat_level.as_str())),
            AttackField::Protocol => Some(Cow::Borrowed(&self.protocol)),
        }
    }
}
