// pocketbin services
// File-level concerns around the core pipeline: CSV reading and settings.

pub mod csv_source;
pub mod settings_engine;
