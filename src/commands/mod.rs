//! CLI commands for graphkit

pub mod connected;
pub mod dispatch;
pub mod edges;
pub mod nine_tail;
pub mod shortest;
pub mod traverse;
