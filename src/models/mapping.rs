use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::record::{Record, RecordField};

pub const SCANNER_TYPES: &[&str] = &["Shodan", "Censys", "ZoomEye", "FOFA", "Masscan", "Nmap"];

pub const MAPPING_STATUSES: &[&str] = &["已诱捕", "已封禁", "观察中"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MappingField {
    Ip,
    Port,
    Protocol,
    ScannerType,
    Fingerprint,
    Status,
    Location,
}

impl RecordField for MappingField {
    fn all() -> &'static [Self] {
        &[
            Self::Ip,
            Self::Port,
            Self::Protocol,
            Self::ScannerType,
            Self::Fingerprint,
            Self::Status,
            Self::Location,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Ip => "Scanner IP",
            Self::Port => "Port",
            Self::Protocol => "Protocol",
            Self::ScannerType => "Scanner",
            Self::Fingerprint => "Fingerprint",
            Self::Status => "Status",
            Self::Location => "Location",
        }
    }
}

/// A scanner hitting a decoy asset of the anti-mapping system
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingAsset {
    pub key: String,
    pub last_seen: DateTime<Utc>,
    pub ip: String,
    pub port: u16,
    pub protocol: String,
    pub scanner_type: String,
    /// Fake service fingerprint served to the scanner
    pub fingerprint: Option<String>,
    pub status: String,
    pub location: Option<String>,
    pub probes: u32,
}

impl Record for MappingAsset {
    type Field = MappingField;

    fn key(&self) -> &str {
        &self.key
    }

    fn field(&self, field: MappingField) -> Option<Cow<'_, str>> {
        match field {
            MappingField::Ip => Some(Cow::Borrowed(&self.ip)),
            MappingField::Port => Some(Cow::Owned(self.port.to_string())),
            MappingField::Protocol => Some(Cow::Borrowed(&self.protocol)),
            MappingField::ScannerType => Some(Cow::Borrowed(&self.scanner_type)),
            MappingField::Fingerprint => self.fingerprint.as_deref().map(Cow::Borrowed),
            MappingField::Status => Some(Cow::Borrowed(&self.status)),
            MappingField::Location => self.location.as_deref().map(Cow::Borrowed),
        }
    }
}
