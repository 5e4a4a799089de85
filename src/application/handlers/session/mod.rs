//! Session handlers.

mod start_session;

pub use start_session::{
    DashboardSession, SessionError, SharedSelectionStore, StartSessionCommand,
    StartSessionHandler,
};
