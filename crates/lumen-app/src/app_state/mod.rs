//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the page webview and the native menu.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod menu;
mod polling;
mod types;
mod webview_bridge;

pub use core::ShellApp;
