// Gateway module for the runtime - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod oneshot;
mod repl;

// Public re-exports - the ONLY way to access runtime functionality
pub use oneshot::OneShotRunner;
pub use repl::Repl;
