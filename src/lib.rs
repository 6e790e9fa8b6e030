//! napchart-rs: a client for the napchart.com chart-sharing service.
//!
//! Models a circular/linear day-schedule chart in memory, maps it to the
//! service's JSON document schema, and exposes the two snapshot operations:
//! publish a chart (`upload`) and fetch one by public id (`import`).
//!
//! ```no_run
//! use napchart_rs::{Chart, Element, NapchartClient, time};
//!
//! # fn main() -> napchart_rs::NapchartResult<()> {
//! let mut chart = Chart::new(2).with_name("Biphasic");
//! chart.add_element(
//!     Element::new("1", "blue", time::parse_clock("23:30")?, time::parse_clock("06:30")?, 1)
//!         .with_text("core sleep"),
//! );
//! let link = NapchartClient::default_client()?.upload(&chart)?;
//! println!("{link}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod telemetry;
pub mod time;
pub mod wire;

pub use client::{ClientConfig, NapchartClient};
pub use error::{NapchartError, NapchartResult};
pub use model::{COLOR_PALETTE, Chart, ChartShape, Element};
