pub const TITLE_PREFIX: &str = "MERRY CHRISTMAS ";
pub const DEFAULT_YEAR: &str = "2025";
pub const DEFAULT_MESSAGE: &str = "Wishing you a warm, cozy Christmas.";

pub const RECIPIENT_LABEL: &str = "To: ";
pub const SENDER_LABEL: &str = "From: ";

pub const RECIPIENT_PROMPT: &str = "Recipient name: ";
pub const SENDER_PROMPT: &str = "Sender name: ";
pub const MESSAGE_PROMPT: &str = "Custom message: ";
