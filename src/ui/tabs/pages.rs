//! Table, form and detail presentation of each log page

use ratatui::{layout::Constraint, widgets::Cell};
use tokio::sync::RwLock;

use super::{Column, FavoriteTarget, LogPage};
use crate::app::state::{AppState, Collection, PageKind};
use crate::engine::{FavoriteRole, FavoriteScope};
use crate::models::exposure::{EXPOSURE_TYPES, SERVICES};
use crate::models::mapping::{MAPPING_STATUSES, SCANNER_TYPES};
use crate::models::threat::{ACTIONS, INTEL_TYPES, PROTOCOLS};
use crate::models::{
    AttackField, AttackLog, ExposureField, ExposureLog, ExternalField, ExternalLog, MappingAsset,
    MappingField, ThreatLevel,
};
use crate::ui::dialogs::filter_form::FormField;
use crate::ui::theme::Theme;
use crate::utils::text::or_dash;
use crate::utils::time::format_age;
use crate::utils::{format_time, truncate};

const TRANSPORTS: &[&str] = &["TCP", "UDP"];

fn location_cell(location: Option<&str>) -> Cell<'static> {
    Cell::from(truncate(or_dash(location), 14))
}

impl LogPage for AttackLog {
    const KIND: PageKind = PageKind::AttackLogs;
    const TITLE: &'static str = "Attack Logs";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Time", Constraint::Length(19)),
            Column::new("Attacker", Constraint::Length(21)),
            Column::new("Target", Constraint::Length(21)),
            Column::new("Location", Constraint::Length(14)),
            Column::new("Intel", Constraint::Length(10)),
            Column::new("Threat", Constraint::Length(6)),
            Column::new("Action", Constraint::Length(6)),
            Column::new("Proto", Constraint::Min(5)),
        ]
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        vec![
            Cell::from(format_time(&self.time)),
            Cell::from(self.source()),
            Cell::from(self.destination()),
            location_cell(self.location.as_deref()),
            Cell::from(self.intel_type.clone()),
            Cell::from(self.threat_level.as_str()).style(theme.threat_style(self.threat_level)),
            Cell::from(self.action.clone()).style(theme.action_style(&self.action)),
            Cell::from(self.protocol.clone()),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Event ID", self.event_id.clone()),
            ("Time", format!("{} ({} ago)", format_time(&self.time), format_age(&self.time))),
            ("Attacker", self.source()),
            ("Target", self.destination()),
            ("Location", or_dash(self.location.as_deref()).to_string()),
            ("Intel Type", self.intel_type.clone()),
            ("Threat Level", self.threat_level.to_string()),
            ("Action", self.action.clone()),
            ("Protocol", self.protocol.clone()),
            ("Payload", self.payload.clone()),
        ]
    }

    fn form_fields() -> Vec<FormField<AttackField>> {
        vec![
            FormField::text(AttackField::AttackerIp),
            FormField::text(AttackField::TargetIp),
            FormField::location(AttackField::Location),
            FormField::choice(AttackField::IntelType, INTEL_TYPES),
            FormField::choice(AttackField::ThreatLevel, ThreatLevel::labels()),
            FormField::choice(AttackField::Action, ACTIONS),
            FormField::choice(AttackField::Protocol, PROTOCOLS),
        ]
    }

    fn search_field() -> AttackField {
        AttackField::AttackerIp
    }

    fn favorite_scope() -> Option<FavoriteScope> {
        Some(FavoriteScope::Inbound)
    }

    fn favorite_targets(&self) -> Vec<FavoriteTarget> {
        vec![
            FavoriteTarget { role: FavoriteRole::Attack, ip: self.attacker_ip.clone() },
            FavoriteTarget { role: FavoriteRole::Target, ip: self.target_ip.clone() },
        ]
    }

    fn collection(state: &AppState) -> &RwLock<Collection<Self>> {
        &state.attack_logs
    }
}

impl LogPage for ExternalLog {
    const KIND: PageKind = PageKind::ExternalLogs;
    const TITLE: &'static str = "External Logs";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Time", Constraint::Length(19)),
            Column::new("Source", Constraint::Length(15)),
            Column::new("Destination", Constraint::Length(21)),
            Column::new("Domain", Constraint::Length(22)),
            Column::new("Location", Constraint::Length(14)),
            Column::new("Intel", Constraint::Length(10)),
            Column::new("Threat", Constraint::Length(6)),
            Column::new("Action", Constraint::Min(6)),
        ]
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        vec![
            Cell::from(format_time(&self.time)),
            Cell::from(self.source_ip.clone()),
            Cell::from(format!("{}:{}", self.destination_ip, self.destination_port)),
            Cell::from(truncate(or_dash(self.domain.as_deref()), 22)),
            location_cell(self.location.as_deref()),
            Cell::from(self.intel_type.clone()),
            Cell::from(self.threat_level.as_str()).style(theme.threat_style(self.threat_level)),
            Cell::from(self.action.clone()).style(theme.action_style(&self.action)),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Event ID", self.event_id.clone()),
            ("Time", format_time(&self.time)),
            ("Source", self.source_ip.clone()),
            ("Destination", format!("{}:{}", self.destination_ip, self.destination_port)),
            ("Domain", or_dash(self.domain.as_deref()).to_string()),
            ("Location", or_dash(self.location.as_deref()).to_string()),
            ("Intel Type", self.intel_type.clone()),
            ("Threat Level", self.threat_level.to_string()),
            ("Action", self.action.clone()),
            ("Bytes Out", self.bytes_out.to_string()),
        ]
    }

    fn form_fields() -> Vec<FormField<ExternalField>> {
        vec![
            FormField::text(ExternalField::SourceIp),
            FormField::text(ExternalField::DestinationIp),
            FormField::text(ExternalField::Domain),
            FormField::location(ExternalField::Location),
            FormField::choice(ExternalField::IntelType, INTEL_TYPES),
            FormField::choice(ExternalField::ThreatLevel, ThreatLevel::labels()),
            FormField::choice(ExternalField::Action, ACTIONS),
        ]
    }

    fn search_field() -> ExternalField {
        ExternalField::DestinationIp
    }

    fn favorite_scope() -> Option<FavoriteScope> {
        Some(FavoriteScope::Outbound)
    }

    fn favorite_targets(&self) -> Vec<FavoriteTarget> {
        vec![
            FavoriteTarget { role: FavoriteRole::Destination, ip: self.destination_ip.clone() },
            FavoriteTarget { role: FavoriteRole::Source, ip: self.source_ip.clone() },
        ]
    }

    fn collection(state: &AppState) -> &RwLock<Collection<Self>> {
        &state.external_logs
    }
}

impl LogPage for ExposureLog {
    const KIND: PageKind = PageKind::ExposureLogs;
    const TITLE: &'static str = "Exposure";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("First Seen", Constraint::Length(19)),
            Column::new("Asset", Constraint::Length(15)),
            Column::new("Port", Constraint::Length(5)),
            Column::new("Service", Constraint::Length(13)),
            Column::new("Exposure", Constraint::Length(10)),
            Column::new("Risk", Constraint::Length(6)),
            Column::new("Location", Constraint::Min(14)),
        ]
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        vec![
            Cell::from(format_time(&self.first_seen)),
            Cell::from(self.asset_ip.clone()),
            Cell::from(self.port.to_string()),
            Cell::from(self.service.clone()),
            Cell::from(self.exposure_type.clone()),
            Cell::from(self.risk_level.as_str()).style(theme.threat_style(self.risk_level)),
            location_cell(self.location.as_deref()),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("First Seen", format_time(&self.first_seen)),
            ("Asset", format!("{}:{}", self.asset_ip, self.port)),
            ("Service", self.service.clone()),
            ("Exposure", self.exposure_type.clone()),
            ("Risk Level", self.risk_level.to_string()),
            ("Location", or_dash(self.location.as_deref()).to_string()),
            ("Banner", or_dash(self.banner.as_deref()).to_string()),
        ]
    }

    fn form_fields() -> Vec<FormField<ExposureField>> {
        vec![
            FormField::text(ExposureField::AssetIp),
            FormField::text(ExposureField::Port),
            FormField::choice(ExposureField::Service, SERVICES),
            FormField::choice(ExposureField::ExposureType, EXPOSURE_TYPES),
            FormField::choice(ExposureField::RiskLevel, ThreatLevel::labels()),
            FormField::location(ExposureField::Location),
        ]
    }

    fn search_field() -> ExposureField {
        ExposureField::AssetIp
    }

    fn collection(state: &AppState) -> &RwLock<Collection<Self>> {
        &state.exposure_logs
    }
}

impl LogPage for MappingAsset {
    const KIND: PageKind = PageKind::AntiMapping;
    const TITLE: &'static str = "Anti-Mapping";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Last Seen", Constraint::Length(19)),
            Column::new("Scanner IP", Constraint::Length(15)),
            Column::new("Port", Constraint::Length(5)),
            Column::new("Proto", Constraint::Length(5)),
            Column::new("Scanner", Constraint::Length(8)),
            Column::new("Fingerprint", Constraint::Length(20)),
            Column::new("Status", Constraint::Length(6)),
            Column::new("Location", Constraint::Min(14)),
        ]
    }

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>> {
        let status_style = match self.status.as_str() {
            "已封禁" => theme.success(),
            "已诱捕" => theme.warning(),
            _ => theme.normal(),
        };

        vec![
            Cell::from(format_time(&self.last_seen)),
            Cell::from(self.ip.clone()),
            Cell::from(self.port.to_string()),
            Cell::from(self.protocol.clone()),
            Cell::from(self.scanner_type.clone()),
            Cell::from(truncate(or_dash(self.fingerprint.as_deref()), 20)),
            Cell::from(self.status.clone()).style(status_style),
            location_cell(self.location.as_deref()),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Last Seen", format_time(&self.last_seen)),
            ("Scanner IP", self.ip.clone()),
            ("Port", format!("{}/{}", self.port, self.protocol)),
            ("Scanner", self.scanner_type.clone()),
            ("Fingerprint", or_dash(self.fingerprint.as_deref()).to_string()),
            ("Status", self.status.clone()),
            ("Location", or_dash(self.location.as_deref()).to_string()),
            ("Probes", self.probes.to_string()),
        ]
    }

    fn form_fields() -> Vec<FormField<MappingField>> {
        vec![
            FormField::text(MappingField::Ip),
            FormField::text(MappingField::Port),
            FormField::choice(MappingField::Protocol, TRANSPORTS),
            FormField::choice(MappingField::ScannerType, SCANNER_TYPES),
            FormField::text(MappingField::Fingerprint),
            FormField::choice(MappingField::Status, MAPPING_STATUSES),
            FormField::location(MappingField::Location),
        ]
    }

    fn search_field() -> MappingField {
        MappingField::Ip
    }

    fn collection(state: &AppState) -> &RwLock<Collection<Self>> {
        &state.mapping_assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenerator;
    use crate::models::RecordField;
    use std::collections::HashSet;

    fn check_page<P: LogPage>(sample: &P) {
        let theme = Theme::default();
        assert_eq!(P::columns().len(), sample.cells(&theme).len(), "{}", P::TITLE);

        let fields: Vec<P::Field> = P::form_fields().iter().map(|f| f.field).collect();
        let unique: HashSet<P::Field> = fields.iter().copied().collect();
        assert_eq!(unique.len(), fields.len(), "duplicate form field on {}", P::TITLE);
        assert_eq!(unique.len(), P::Field::all().len(), "form misses a field on {}", P::TITLE);
        assert!(unique.contains(&P::search_field()));

        assert!(!sample.details().is_empty());
        assert_eq!(P::favorite_scope().is_some(), !sample.favorite_targets().is_empty());
    }

    #[test]
    fn pages_are_consistent() {
        let mut generator = MockGenerator::with_seed(21);
        check_page(&generator.attack_logs(1)[0]);
        check_page(&generator.external_logs(1)[0]);
        check_page(&generator.exposure_logs(1)[0]);
        check_page(&generator.mapping_assets(1)[0]);
    }

    #[test]
    fn favorite_roles_match_scope() {
        let mut generator = MockGenerator::with_seed(22);
        let attacks = generator.attack_logs(1);
        assert_eq!(attacks[0].favorite_targets()[0].role, FavoriteRole::Attack);
        assert_eq!(attacks[0].favorite_targets()[0].ip, attacks[0].attacker_ip);

        let externals = generator.external_logs(1);
        assert_eq!(externals[0].favorite_targets()[0].role, FavoriteRole::Destination);
    }
}
