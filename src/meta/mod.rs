//! Route metadata model - the declaration schema controllers describe
//! themselves with.
//!
//! These are plain immutable value structs; the framework's attribute layer
//! constructs them via the `with_*` builders and attaches them to a type
//! descriptor. Nothing in here touches the filesystem or the table.

mod callback;
mod capability;
mod context;
mod phase;
mod route;

pub use callback::CallbackRef;
pub use capability::Capability;
pub use context::{ContextDeclaration, WEB_CONTEXT};
pub use phase::MiddlewarePhase;
pub use route::RouteDeclaration;
