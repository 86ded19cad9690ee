//! Threat classification shared by the log pages

/// Threat intelligence categories
pub const INTEL_TYPES: &[&str] = &[
    "僵尸网络",
    "钓鱼攻击",
    "恶意软件",
    "扫描探测",
    "暴力破解",
    "挖矿木马",
    "远控木马",
];

/// Disposition applied by the sensor
pub const ACTIONS: &[&str] = &["阻断", "告警", "放行"];

pub const PROTOCOLS: &[&str] = &["TCP", "UDP", "HTTP", "HTTPS", "DNS", "ICMP"];

/// Threat severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatLevel {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Default for ThreatLevel {
    fn default() -> Self {
        Self::Low
    }
}

impl From<i32> for ThreatLevel {
    fn from(v: i32) -> Self {
        match v {
            2 => Self::High,
            1 => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl ThreatLevel {
    pub fn all() -> &'static [ThreatLevel] {
        &[Self::High, Self::Medium, Self::Low]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "高危",
            Self::Medium => "中危",
            Self::Low => "低危",
        }
    }

    pub fn labels() -> &'static [&'static str] {
        &["高危", "中危", "低危"]
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
