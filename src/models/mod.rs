pub mod attack;
pub mod exposure;
pub mod external;
pub mod location;
pub mod mapping;
pub mod record;
pub mod threat;

pub use attack::{AttackField, AttackLog};
pub use exposure::{ExposureField, ExposureLog};
pub use external::{ExternalField, ExternalLog};
pub use location::LocationScope;
pub use mapping::{MappingAsset, MappingField};
pub use record::{Record, RecordField};
pub use threat::ThreatLevel;
