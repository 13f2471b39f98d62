//! revu: terminal client for a review-sentiment service
//!
//! Search places or products, read their sentiment summary and submit new
//! reviews for classification.

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod notification;
pub mod panels;
pub mod service;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod test_utils;
