// Gateway module for the module catalog - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod registry;

// Public re-exports - the ONLY way to access catalog functionality
pub use registry::{all, lookup, names, Module};
