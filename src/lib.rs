pub mod alert;
pub mod config;
pub mod format;
pub mod forward;
pub mod server;

pub use alert::{Alert, AlertBatch};
pub use config::ServerConfig;
pub use format::format_message;
pub use forward::{DiscordForwarder, ForwardPayload};
pub use server::{AppState, build_router};
