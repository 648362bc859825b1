// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the service; the console shell talks only to this layer
// - Translates between user input, DTOs and service calls
// - Owns presentation state (the adoption cursor), never list contents

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod session;
pub mod state;

pub use commands::{dispatch, parse, CommandOutput, ShellCommand};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use session::{AdoptionOutcome, AdoptionSession};
pub use state::{open_store, AppState};
