//! Transaction handlers for the tally families.
//!
//! | Family         | Handler                | Verbs                          |
//! |----------------|------------------------|--------------------------------|
//! | `localVote`    | [`VoteHandler::local`] | `set`                          |
//! | `provinceVote` | [`VoteHandler::province`] | `set`                       |
//! | `localDPT`     | [`LocalDptHandler`]    | `ready`, `vote`                |
//! | `provinceDPT`  | [`ProvinceDptHandler`] | `registered`, `ready`, `vote`, `invalid` |
//!
//! Every handler runs the same engine ([`engine::WorkflowHandler`]); the
//! families differ only in their verb set, name rules and transition table.

pub mod engine;
pub mod handler;
pub mod local_dpt;
pub mod province_dpt;
pub mod vote;

pub use engine::{Transition, TransitionFn, Workflow, WorkflowHandler};
pub use handler::TransactionHandler;
pub use local_dpt::{LocalDptHandler, LocalDptWorkflow};
pub use province_dpt::{ProvinceDptHandler, ProvinceDptWorkflow};
pub use vote::{VoteHandler, VoteWorkflow};

use tally_types::Family;

/// Handler for `family`.
pub fn handler_for(family: Family) -> Box<dyn TransactionHandler> {
    match family {
        Family::LocalVote => Box::new(VoteHandler::local()),
        Family::ProvinceVote => Box::new(VoteHandler::province()),
        Family::LocalDpt => Box::new(LocalDptHandler::new()),
        Family::ProvinceDpt => Box::new(ProvinceDptHandler::new()),
    }
}
