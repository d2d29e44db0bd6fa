//! Monthly sunspot dashboard: dataset loading, windowing transforms and the
//! egui front end that draws them.

pub mod app;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::model::{Marker, Record, Table};
pub use data::series::{Series, SeriesStyle};
pub use error::{ErrorKind, Result, SunspotError};
