//! Bike Sharing Dashboard
//!
//! Loads the hourly and daily bike rental tables, summarizes usage and presents
//! it as a desktop dashboard with an exportable browser report.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod stats;
