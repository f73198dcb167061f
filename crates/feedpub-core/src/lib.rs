//! Core contracts for feedpub.
//!
//! This crate contains:
//! - Feed configuration model and validation
//! - Checked-in feed registries and their self-check
//! - Export credential gating and the exporter boundary
//! - Response envelope and structured errors

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod exporter;
pub mod feed_config;
pub mod registry;

pub use credentials::{ExportCredentials, REQUIRED_API_KEYS};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use exporter::{
    run_export_if_credentialed, ExportError, ExportOutcome, NoopExporter, PriceExporter,
};
pub use feed_config::{verify_feed_config, AssetRef, FeedConfig, FeedLeg};
pub use registry::{FeedEntry, FeedRegistry, RegistryError, RegistrySource};
