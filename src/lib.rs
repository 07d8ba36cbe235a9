//! Taskboard: an observable task board with drag-and-drop transfers.
//!
//! Work items live in a single [`board::services::ItemStore`]. Views
//! subscribe to it and rebuild their subset on every change, and a
//! [`transfer::TransferSession`] moves items between status categories.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: work items and their status, with no infrastructure
//! - **Ports**: traits for identifier sources, listeners and user notices
//! - **Adapters**: concrete implementations of those ports
//! - **Services**: the item store and the form intake
//!
//! # Modules
//!
//! - [`board`]: work-item domain, store and intake
//! - [`transfer`]: the drag-and-drop protocol
//! - [`view`]: list and item views and their rendering
//! - [`validation`]: stateless field validation
//! - [`app`]: the application context tying everything together
//! - [`config`] and [`logging`]: ambient set-up

pub mod app;
pub mod board;
pub mod config;
pub mod logging;
pub mod transfer;
pub mod validation;
pub mod view;
