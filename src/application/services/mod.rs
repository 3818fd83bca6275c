//! 应用服务

pub mod exporter;
pub mod importer;
pub mod profile_manager;

pub use exporter::Exporter;
pub use importer::{ImportPreview, Importer};
pub use profile_manager::{ImportMode, ImportSummary, ProfileManager};
