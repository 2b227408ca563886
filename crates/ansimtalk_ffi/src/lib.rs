//! Flutter-facing bridge over `ansimtalk_core`.

pub mod api;
mod session;
