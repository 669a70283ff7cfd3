// pocketbin import pipeline
// The core state machine: CSV shape validation, credential gating, the
// mutable status record, and the sequential submission driver.

pub mod credential_gate;
pub mod csv_validator;
pub mod driver;
pub mod status_model;
