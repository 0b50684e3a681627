pub mod config;
pub mod logging;

pub mod controller;
pub mod error;
pub mod facet;
pub mod navigation;
pub mod panel;
pub mod query;
pub mod selection;
