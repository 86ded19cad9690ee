//! Favorite IP markers

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{self, KvStore, StoreError};

pub const FAVORITE_IPS_KEY: &str = "favoriteIps";
pub const OUTBOUND_FAVORITE_IPS_KEY: &str = "outboundFavoriteIps";

/// Role the IP played in the event it was favorited from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteRole {
    Attack,
    Target,
    Source,
    Destination,
}

impl std::fmt::Display for FavoriteRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Target => write!(f, "target"),
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Namespace a favorites list lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteScope {
    /// Attack pages: `attack` / `target` roles
    Inbound,
    /// Outbound page: `source` / `destination` roles
    Outbound,
}

impl FavoriteScope {
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::Inbound => FAVORITE_IPS_KEY,
            Self::Outbound => OUTBOUND_FAVORITE_IPS_KEY,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Inbound => "Inbound",
            Self::Outbound => "Outbound",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteIp {
    pub ip: String,
    #[serde(rename = "type")]
    pub role: FavoriteRole,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Favorited,
    Unfavorited,
}

/// Favorite IPs of one scope: an in-memory set mirroring the stored list
pub struct FavoriteStore {
    store: Arc<dyn KvStore>,
    scope: FavoriteScope,
    ips: HashSet<String>,
}

impl FavoriteStore {
    pub fn load(store: Arc<dyn KvStore>, scope: FavoriteScope) -> Self {
        let ips = match store::read_json::<Vec<FavoriteIp>>(store.as_ref(), scope.storage_key()) {
            Ok(list) => list.into_iter().map(|f| f.ip).collect(),
            Err(e) => {
                tracing::error!(key = scope.storage_key(), error = %e, "Failed to load favorites");
                HashSet::new()
            }
        };

        Self { store, scope, ips }
    }

    pub fn scope(&self) -> FavoriteScope {
        self.scope
    }

    pub fn contains(&self, ip: &str) -> bool {
        self.ips.contains(ip)
    }

    pub fn ips(&self) -> &HashSet<String> {
        &self.ips
    }

    /// Persisted list in insertion order
    pub fn list(&self) -> Result<Vec<FavoriteIp>, StoreError> {
        store::read_json(self.store.as_ref(), self.scope.storage_key())
    }

    /// Add `ip` if absent, remove it if present.
    ///
    /// The stored list is re-read and rewritten in full on every call.
    pub fn toggle(&mut self, ip: &str, role: FavoriteRole) -> Result<ToggleOutcome, StoreError> {
        let key = self.scope.storage_key();
        let mut list = self.list()?;

        let outcome = if list.iter().any(|f| f.ip == ip) {
            list.retain(|f| f.ip != ip);
            ToggleOutcome::Unfavorited
        } else {
            list.push(FavoriteIp {
                ip: ip.to_string(),
                role,
                key: ip.to_string(),
            });
            ToggleOutcome::Favorited
        };

        store::write_json(self.store.as_ref(), key, &list)?;
        self.ips = list.into_iter().map(|f| f.ip).collect();

        tracing::info!(key, ip, ?outcome, "Toggled favorite");
        Ok(outcome)
    }

    /// Drop `ip` from the stored list. Returns `false` when it was not there,
    /// in which case nothing is written.
    pub fn remove(&mut self, ip: &str) -> Result<bool, StoreError> {
        let key = self.scope.storage_key();
        let mut list = self.list()?;

        let before = list.len();
        list.retain(|f| f.ip != ip);
        let removed = list.len() != before;

        if removed {
            store::write_json(self.store.as_ref(), key, &list)?;
            tracing::info!(key, ip, "Removed favorite");
        }
        self.ips = list.into_iter().map(|f| f.ip).collect();

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn favorites() -> (Arc<dyn KvStore>, FavoriteStore) {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let favorites = FavoriteStore::load(kv.clone(), FavoriteScope::Inbound);
        (kv, favorites)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let (_, mut favs) = favorites();

        assert_eq!(favs.toggle("1.1.1.1", FavoriteRole::Attack).unwrap(), ToggleOutcome::Favorited);
        assert!(favs.contains("1.1.1.1"));

        assert_eq!(favs.toggle("1.1.1.1", FavoriteRole::Attack).unwrap(), ToggleOutcome::Unfavorited);
        assert!(!favs.contains("1.1.1.1"));
    }

    #[test]
    fn double_toggle_restores_previous_list() {
        let (_, mut favs) = favorites();
        favs.toggle("1.1.1.1", FavoriteRole::Attack).unwrap();
        favs.toggle("2.2.2.2", FavoriteRole::Target).unwrap();
        let before = favs.list().unwrap();

        favs.toggle("3.3.3.3", FavoriteRole::Attack).unwrap();
        favs.toggle("3.3.3.3", FavoriteRole::Attack).unwrap();
        assert_eq!(favs.list().unwrap(), before);

        favs.toggle("1.1.1.1", FavoriteRole::Attack).unwrap();
        favs.toggle("1.1.1.1", FavoriteRole::Attack).unwrap();
        let ips: HashSet<_> = favs.list().unwrap().into_iter().map(|f| f.ip).collect();
        let expected: HashSet<_> = before.into_iter().map(|f| f.ip).collect();
        assert_eq!(ips, expected);
    }

    #[test]
    fn stored_shape_uses_type_and_key() {
        let (kv, mut favs) = favorites();
        favs.toggle("8.8.8.8", FavoriteRole::Target).unwrap();

        let raw: serde_json::Value = store::read_json(kv.as_ref(), FAVORITE_IPS_KEY).unwrap();
        assert_eq!(raw, serde_json::json!([{ "ip": "8.8.8.8", "type": "target", "key": "8.8.8.8" }]));
    }

    #[test]
    fn scopes_are_separate_namespaces() {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let mut inbound = FavoriteStore::load(kv.clone(), FavoriteScope::Inbound);
        let outbound = FavoriteStore::load(kv.clone(), FavoriteScope::Outbound);

        inbound.toggle("9.9.9.9", FavoriteRole::Attack).unwrap();

        assert!(!outbound.contains("9.9.9.9"));
        assert!(outbound.list().unwrap().is_empty());
    }

    #[test]
    fn toggle_sees_writes_from_another_handle() {
        let (kv, mut first) = favorites();
        let mut second = FavoriteStore::load(kv, FavoriteScope::Inbound);

        first.toggle("5.5.5.5", FavoriteRole::Attack).unwrap();
        assert_eq!(second.toggle("5.5.5.5", FavoriteRole::Attack).unwrap(), ToggleOutcome::Unfavorited);
        assert!(first.list().unwrap().is_empty());
    }

    #[test]
    fn remove_never_adds_back() {
        let (kv, mut first) = favorites();
        first.toggle("1.1.1.1", FavoriteRole::Attack).unwrap();
        first.toggle("2.2.2.2", FavoriteRole::Target).unwrap();

        let mut second = FavoriteStore::load(kv, FavoriteScope::Inbound);
        assert!(second.remove("1.1.1.1").unwrap());

        assert!(!first.remove("1.1.1.1").unwrap());
        assert!(!first.contains("1.1.1.1"));
        let ips: Vec<_> = first.list().unwrap().into_iter().map(|f| f.ip).collect();
        assert_eq!(ips, vec!["2.2.2.2".to_string()]);
    }

    #[test]
    fn reload_restores_membership() {
        let (kv, mut favs) = favorites();
        favs.toggle("4.4.4.4", FavoriteRole::Attack).unwrap();

        let reloaded = FavoriteStore::load(kv, FavoriteScope::Inbound);
        assert!(reloaded.contains("4.4.4.4"));
    }
}
