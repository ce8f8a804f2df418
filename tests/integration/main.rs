//! Integration tests for Library Desk

mod console_sessions;
mod library_scenarios;
