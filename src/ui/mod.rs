//! UI-facing view model.
//!
//! Rendering is left to the host application; this module only defines the
//! display-ready shape it consumes.

pub mod viewmodel;

pub use viewmodel::ListView;
