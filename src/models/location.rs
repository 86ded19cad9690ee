//! Hierarchical location values of the form `"<country> | <city>"`

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DOMESTIC_LOCATIONS: &[&str] = &[
    "中国 | 北京",
    "中国 | 上海",
    "中国 | 广州",
    "中国 | 深圳",
    "中国 | 杭州",
    "中国 | 成都",
];

pub const FOREIGN_LOCATIONS: &[&str] = &[
    "美国 | 纽约",
    "美国 | 洛杉矶",
    "俄罗斯 | 莫斯科",
    "德国 | 柏林",
    "日本 | 东京",
    "巴西 | 圣保罗",
    "荷兰 | 阿姆斯特丹",
];

pub const WORLD_REGIONS: &[&str] = &["usa", "europe", "asia", "south-america"];

/// Top level of a location criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationScope {
    World,
    China,
    Foreign,
}

impl LocationScope {
    pub fn all() -> &'static [LocationScope] {
        &[Self::World, Self::China, Self::Foreign]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::World => "world",
            Self::China => "china",
            Self::Foreign => "foreign",
        }
    }

    /// Selectable specific values under this scope
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::World => WORLD_REGIONS,
            Self::China => DOMESTIC_LOCATIONS,
            Self::Foreign => FOREIGN_LOCATIONS,
        }
    }
}

impl std::fmt::Display for LocationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "world" => Ok(Self::World),
            "china" | "domestic" => Ok(Self::China),
            "foreign" => Ok(Self::Foreign),
            other => Err(format!("unknown location scope: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_parses_aliases() {
        assert_eq!("china".parse::<LocationScope>(), Ok(LocationScope::China));
        assert_eq!("Domestic".parse::<LocationScope>(), Ok(LocationScope::China));
        assert!("mars".parse::<LocationScope>().is_err());
    }
}
