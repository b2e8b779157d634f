//! Thin Telegram Bot API transport: long polling in, text replies out.

pub mod client;
pub mod errors;
pub mod types;

pub use client::BotClient;
pub use errors::TelegramError;
pub use types::{Chat, Message, Update, User};
