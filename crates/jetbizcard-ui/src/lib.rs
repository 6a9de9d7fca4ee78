//! JetBizCard UI Components
//!
//! Dioxus rendering of the core view tree. The core decides *what* the
//! card looks like; this crate turns each [`ViewNode`] into a webview
//! element and routes button clicks back as [`Action`]s.
//!
//! [`ViewNode`]: jetbizcard_core::ViewNode
//! [`Action`]: jetbizcard_core::Action

pub mod components;

pub use components::*;
