//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod context;

pub(crate) use check::CheckArgs;
pub(crate) use context::ContextArgs;
