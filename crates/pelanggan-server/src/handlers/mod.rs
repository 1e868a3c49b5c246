//! HTTP handlers

pub mod customers;
