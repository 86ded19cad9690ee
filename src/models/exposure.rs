use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::record::{Record, RecordField};
use super::threat::ThreatLevel;

pub const SERVICES: &[&str] = &["ssh", "rdp", "mysql", "redis", "http", "smb", "telnet", "elasticsearch"];

pub const EXPOSURE_TYPES: &[&str] = &["弱口令", "未授权访问", "高危端口", "过期组件", "信息泄露"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExposureField {
    AssetIp,
    Port,
    Service,
    ExposureType,
    RiskLevel,
    Location,
}

impl RecordField for ExposureField {
    fn all() -> &'static [Self] {
        &[
            Self::AssetIp,
            Self::Port,
            Self::Service,
            Self::ExposureType,
            Self::RiskLevel,
            Self::Location,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Self::AssetIp => "Asset IP",
            Self::Port => "Port",
            Self::Service => "Service",
            Self::ExposureType => "Exposure",
            Self::RiskLevel => "Risk",
            Self::Location => "Location",
        }
    }
}

/// An internet-facing asset with a detected exposure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExposureLog {
    pub key: String,
    pub first_seen: DateTime<Utc>,
    pub asset_ip: String,
    pub port: u16,
    pub service: String,
    pub exposure_type: String,
    pub risk_level: ThreatLevel,
    pub location: Option<String>,
    pub banner: Option<String>,
}

impl Record for ExposureLog {
    type Field = ExposureField;

    fn key(&self) -> &str {
        &self.key
    }

    fn field(&self, field: ExposureField) -> Option<Cow<'_, str>> {
        match field {
            ExposureField::AssetIp => Some(Cow::Borrowed(&self.asset_ip)),
            ExposureField::Port => Some(Cow::Owned(self.port.to_string())),
            ExposureField::Service => Some(Cow::Borrowed(&self.service)),
            ExposureField::ExposureType => Some(Cow::Borrowed(&self.exposure_type)),
            ExposureField::RiskLevel => Some(Cow::Borrowed(self.risk_level.as_str())),
            ExposureField::Location => self.location.as_deref().map(Cow::Borrowed),
        }
    }
}
