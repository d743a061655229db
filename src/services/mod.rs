//! External service clients

pub mod kpi_classifier;

pub use kpi_classifier::{classify_and_update_kpi_class, KpiClass, KpiClient};
