//! UI components and layouts.
//!
//! This module provides Leptos SSR components for the comic reader's
//! presentation layer.
//!
//! # Structure
//!
//! - [`components`]: Reusable primitives (badge, skeleton, spinner, banner)
//! - [`layouts`]: Route-level layout shells
//! - [`loading`]: Per-route skeleton screens
//! - [`errors`]: Chapter error and 404 views
//! - [`pages`]: Complete documents served by the router

pub mod components;
pub mod errors;
pub mod layouts;
pub mod loading;
pub mod pages;
