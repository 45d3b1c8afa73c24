//! Application context and loop controller.
//!
//! The context replaces ambient globals: it is constructed at startup and
//! passed by reference to the loop controller and the demo installers.

mod ctx;
mod loop_ctrl;

pub use ctx::{Experiments, Interaction, Sandbox};
pub use loop_ctrl::{LoopController, TickOutcome};
