//! HBSA committee application intake.
//!
//! Applicants walk a multi-page [`wizard`], pick committees from the static [`catalog`], and
//! submit through the [`forwarder`], which validates the record and appends it to a
//! spreadsheet via a webhook with bounded retries.

pub mod applications;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forwarder;
pub mod notifications;
pub mod telemetry;
pub mod wizard;
