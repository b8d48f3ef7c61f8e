// ABOUTME: Library crate for the crawl wizard exposing the wizard core and TUI pieces for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod wizard;
