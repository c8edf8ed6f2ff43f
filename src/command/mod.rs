mod core;
mod dispatch;
mod types;

pub use dispatch::{CommandDispatchResult, DispatchContext, dispatch};
pub use types::{ActionId, Command, CommandOutcome};
