//! Infrastructure layer - Persistence collaborators and logging

pub mod logging;
pub mod person;
