//! Seeded mock record factory

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::exposure::{EXPOSURE_TYPES, SERVICES};
use crate::models::location::{DOMESTIC_LOCATIONS, FOREIGN_LOCATIONS};
use crate::models::mapping::{MAPPING_STATUSES, SCANNER_TYPES};
use crate::models::threat::{ACTIONS, INTEL_TYPES, PROTOCOLS};
use crate::models::{AttackLog, ExposureLog, ExternalLog, MappingAsset, ThreatLevel};

const DOMAINS: &[&str] = &[
    "update-check.xyz",
    "cdn-static.top",
    "login-verify.info",
    "pool.minexmr.com",
    "api.telemetry-sync.net",
    "dl.freesoft.cc",
];

const FINGERPRINTS: &[&str] = &[
    "OpenSSH_7.4",
    "Apache/2.4.6 (CentOS)",
    "Microsoft-IIS/8.5",
    "nginx/1.14.0",
    "MySQL 5.5.62",
];

const PAYLOADS: &[&str] = &[
    "GET /wp-login.php HTTP/1.1",
    "POST /cgi-bin/luci HTTP/1.1",
    "SSH-2.0-libssh2_1.8.0",
    "\\x16\\x03\\x01\\x02\\x00\\x01",
    "GET /.env HTTP/1.1",
    "admin:admin123",
];

/// Generates plausible log collections from a seedable RNG
pub struct MockGenerator {
    rng: StdRng,
    /// Timestamps are drawn from the week before this instant
    base_time: DateTime<Utc>,
}

/// Fixed anchor of seeded generators, 2025-01-01T00:00:00Z
const SEEDED_BASE_SECS: i64 = 1_735_689_600;

impl MockGenerator {
    /// Deterministic generator; equal seeds give identical records
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            base_time: Utc.timestamp_opt(SEEDED_BASE_SECS, 0).single().unwrap_or_default(),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            base_time: Utc::now(),
        }
    }

    /// Move the time window so records end at `base_time`
    pub fn anchored_at(mut self, base_time: DateTime<Utc>) -> Self {
        self.base_time = base_time;
        self
    }

    pub fn attack_logs(&mut self, count: usize) -> Vec<AttackLog> {
        let mut logs: Vec<AttackLog> = (0..count)
            .map(|_| AttackLog {
                key: String::new(),
                event_id: self.event_id(),
                time: self.recent_time(),
                attacker_ip: self.public_ip(),
                attacker_port: self.rng.gen_range(1024..=65535),
                target_ip: self.internal_ip(),
                target_port: self.pick(&[22u16, 80, 443, 3306, 3389, 6379, 8080]),
                location: self.location(),
                intel_type: self.pick(INTEL_TYPES).to_string(),
                action: self.pick(ACTIONS).to_string(),
                threat_level: self.threat_level(),
                protocol: self.pick(PROTOCOLS).to_string(),
                payload: self.pick(PAYLOADS).to_string(),
            })
            .collect();

        logs.sort_by(|a, b| b.time.cmp(&a.time));
        for (i, log) in logs.iter_mut().enumerate() {
            log.key = (i + 1).to_string();
        }
        logs
    }

    pub fn external_logs(&mut self, count: usize) -> Vec<ExternalLog> {
        let mut logs: Vec<ExternalLog> = (0..count)
            .map(|_| ExternalLog {
                key: String::new(),
                event_id: self.event_id(),
                time: self.recent_time(),
                source_ip: self.internal_ip(),
                destination_ip: self.public_ip(),
                destination_port: self.pick(&[53u16, 80, 443, 4444, 8443, 3333]),
                location: self.location(),
                domain: self.maybe(0.7, DOMAINS),
                intel_type: self.pick(INTEL_TYPES).to_string(),
                action: self.pick(ACTIONS).to_string(),
                threat_level: self.threat_level(),
                bytes_out: self.rng.gen_range(64..5_000_000),
            })
            .collect();

        logs.sort_by(|a, b| b.time.cmp(&a.time));
        for (i, log) in logs.iter_mut().enumerate() {
            log.key = (i + 1).to_string();
        }
        logs
    }

    pub fn exposure_logs(&mut self, count: usize) -> Vec<ExposureLog> {
        (0..count)
            .map(|i| {
                let service = self.pick(SERVICES);
                ExposureLog {
                    key: (i + 1).to_string(),
                    first_seen: self.recent_time(),
                    asset_ip: self.public_ip(),
                    port: default_port(service),
                    service: service.to_string(),
                    exposure_type: self.pick(EXPOSURE_TYPES).to_string(),
                    risk_level: self.threat_level(),
                    location: Some(self.pick(DOMESTIC_LOCATIONS).to_string()),
                    banner: self.maybe(0.5, FINGERPRINTS),
                }
            })
            .collect()
    }

    pub fn mapping_assets(&mut self, count: usize) -> Vec<MappingAsset> {
        (0..count)
            .map(|i| MappingAsset {
                key: (i + 1).to_string(),
                last_seen: self.recent_time(),
                ip: self.public_ip(),
                port: self.rng.gen_range(1..=65535),
                protocol: self.pick(&["TCP", "UDP"]).to_string(),
                scanner_type: self.pick(SCANNER_TYPES).to_string(),
                fingerprint: self.maybe(0.8, FINGERPRINTS),
                status: self.pick(MAPPING_STATUSES).to_string(),
                location: self.location(),
                probes: self.rng.gen_range(1..500),
            })
            .collect()
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        options[self.rng.gen_range(0..options.len())]
    }

    fn maybe(&mut self, probability: f64, options: &[&str]) -> Option<String> {
        if self.rng.gen_bool(probability) {
            Some(self.pick(options).to_string())
        } else {
            None
        }
    }

    fn event_id(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.gen())
            .into_uuid()
            .to_string()
    }

    fn recent_time(&mut self) -> DateTime<Utc> {
        self.base_time - Duration::seconds(self.rng.gen_range(0..7 * 24 * 3600))
    }

    fn public_ip(&mut self) -> String {
        let first = loop {
            let octet: u8 = self.rng.gen_range(1..=223);
            if octet != 10 && octet != 127 && octet != 192 && octet != 172 {
                break octet;
            }
        };
        format!(
            "{}.{}.{}.{}",
            first,
            self.rng.gen_range(0..=255u8),
            self.rng.gen_range(0..=255u8),
            self.rng.gen_range(1..=254u8)
        )
    }

    fn internal_ip(&mut self) -> String {
        if self.rng.gen_bool(0.5) {
            format!("10.{}.{}.{}", self.rng.gen_range(0..=20u8), self.rng.gen_range(0..=255u8), self.rng.gen_range(1..=254u8))
        } else {
            format!("192.168.{}.{}", self.rng.gen_range(0..=10u8), self.rng.gen_range(1..=254u8))
        }
    }

    /// Roughly half domestic, most of the rest foreign, some unknown
    fn location(&mut self) -> Option<String> {
        match self.rng.gen_range(0..10) {
            0 => None,
            1..=5 => Some(self.pick(DOMESTIC_LOCATIONS).to_string()),
            _ => Some(self.pick(FOREIGN_LOCATIONS).to_string()),
        }
    }

    fn threat_level(&mut self) -> ThreatLevel {
        ThreatLevel::from(self.rng.gen_range(0..3))
    }
}

fn default_port(service: &str) -> u16 {
    match service {
        "ssh" => 22,
        "telnet" => 23,
        "http" => 80,
        "smb" => 445,
        "mysql" => 3306,
        "rdp" => 3389,
        "redis" => 6379,
        "elasticsearch" => 9200,
        _ => 8080,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{filter, Criterion, FilterCriteria};
    use crate::models::{AttackField, Record};

    #[test]
    fn same_seed_same_records() {
        let a = MockGenerator::with_seed(7).attack_logs(30);
        let b = MockGenerator::with_seed(7).attack_logs(30);

        let project = |logs: &[AttackLog]| -> Vec<(String, String, String)> {
            let mut rows: Vec<_> = logs
                .iter()
                .map(|l| (l.event_id.clone(), l.attacker_ip.clone(), l.intel_type.clone()))
                .collect();
            rows.sort();
            rows
        };
        assert_eq!(project(&a), project(&b));
    }

    #[test]
    fn same_seed_gives_identical_collections() {
        let mut a = MockGenerator::with_seed(42);
        let mut b = MockGenerator::with_seed(42);

        assert_eq!(a.attack_logs(20), b.attack_logs(20));
        assert_eq!(a.external_logs(20), b.external_logs(20));
        assert_eq!(a.exposure_logs(10), b.exposure_logs(10));
        assert_eq!(a.mapping_assets(10), b.mapping_assets(10));
    }

    #[test]
    fn times_fall_in_the_week_before_the_anchor() {
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let logs = MockGenerator::with_seed(8).anchored_at(base).attack_logs(50);
        assert!(logs
            .iter()
            .all(|l| l.time <= base && l.time > base - Duration::days(7)));
    }

    #[test]
    fn keys_are_sequential_and_unique() {
        let logs = MockGenerator::with_seed(1).external_logs(50);
        let keys: Vec<&str> = logs.iter().map(|l| l.key()).collect();
        let expected: Vec<String> = (1..=50).map(|i| i.to_string()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn attack_logs_are_newest_first() {
        let logs = MockGenerator::with_seed(3).attack_logs(40);
        assert!(logs.windows(2).all(|w| w[0].time >= w[1].time));
    }

    #[test]
    fn generated_values_come_from_vocabularies() {
        let logs = MockGenerator::with_seed(11).attack_logs(100);
        assert!(logs.iter().all(|l| INTEL_TYPES.contains(&l.intel_type.as_str())));
        assert!(logs.iter().all(|l| ACTIONS.contains(&l.action.as_str())));
        assert!(logs
            .iter()
            .filter_map(|l| l.location.as_deref())
            .all(|loc| DOMESTIC_LOCATIONS.contains(&loc) || FOREIGN_LOCATIONS.contains(&loc)));

        let criteria = FilterCriteria::new().with(AttackField::IntelType, Criterion::contains(INTEL_TYPES[0]));
        let matched = filter(&logs, &criteria);
        assert!(matched.iter().all(|l| l.intel_type == INTEL_TYPES[0]));
    }

    #[test]
    fn other_pages_have_requested_sizes() {
        let mut generator = MockGenerator::with_seed(5);
        assert_eq!(generator.exposure_logs(12).len(), 12);
        assert_eq!(generator.mapping_assets(8).len(), 8);
        assert!(generator.exposure_logs(20).iter().all(|e| e.port == default_port(&e.service)));
    }
}
