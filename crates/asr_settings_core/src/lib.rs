//! Settings value model, widget tree reconciliation, and persistence for auto splitter scripts.

/// Setting values, widget descriptors, tree reconciliation, change detection, and XML persistence.
pub mod settings;
