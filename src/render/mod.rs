//! HTML table fragments for the dashboard.
//!
//! Fragments are askama templates, so every interpolated field is escaped.

pub mod draws;
pub mod ratios;

pub use draws::draws_table;
pub use ratios::{ratio_table, NetTone};
