//! Logical navigation
//!
//! - Destination model and lifecycle flags
//! - The state machine that applies, queues or rejects deep links
//! - A mailbox actor serializing events onto one task

mod actor;
mod machine;
mod state;

pub use actor::NavigationHandle;
pub use machine::{NavigationStateMachine, PostInitRouter};
pub use state::{
    AppInitializationState, NavigationEffect, NavigationEvent, NavigationState, RootDestination,
    Tab, TabsState,
};
