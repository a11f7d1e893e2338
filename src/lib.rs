// ABOUTME: Library crate for the seller onboarding wizard exposing public API for testing and the binary

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod collaborators;
pub mod components;
pub mod config;
pub mod panels;
pub mod wizard;
