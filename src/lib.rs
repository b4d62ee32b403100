//! # Spine Labels - Binder Spine Label Generator
//!
//! Builds printable binder spine labels as multi-sheet `.xlsx` workbooks,
//! one sheet per physical copy, each carrying a QR code of its fields.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Label requests, sheet model, layout tables, build states
//! - **Application**: Validation, document assembly, use cases and ports
//! - **Infrastructure**: QR rendering, xlsx serialization, output directory
//! - **API**: HTTP handlers and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use spine_labels::{application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::from_env())
//!     .with_infrastructure()
//!     .await?
//!     .build()?;
//! let app = spine_labels::api::create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, layout, value_objects};
