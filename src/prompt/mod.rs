// Gateway module for prompt building - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod template;

// Public re-exports - the ONLY way to access prompt functionality
pub use template::MentorPrompt;
