use std::sync::Arc;

use dunmail::config::Config;
use dunmail::resend::Mailer;

/// Request bodies are small JSON documents; anything bigger is noise.
pub const MAX_BODY_SIZE: u64 = 64 * 1024;

/// Everything the HTTP server needs to run.
pub struct HttpArg {
    pub port: u16,
    pub config: Arc<Config>,
    pub mailer: Arc<dyn Mailer>,
}
