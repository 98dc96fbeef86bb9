/// Constants module to avoid magic numbers and scattered literals

// Network Configuration
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

// Default Model Configuration
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: usize = 1024;

// The mandated out-of-domain reply. Spliced verbatim into every mentor
// prompt; downstream consumers may exact-match it, typographic apostrophe
// included, so it must never be reworded.
pub const REFUSAL_REPLY: &str =
    "Sorry, I don’t know about this question. Please ask something related to the selected module.";

// Transcript export
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
