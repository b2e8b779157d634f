//! Telegram bot that republishes jw.org articles as Telegraph pages.
//!
//! The operator sends a link; the bot fetches the page, pulls the article
//! title and body out with the site's selectors, creates a Telegraph page
//! and replies with its URL.

pub mod access;
pub mod bot;
pub mod config;
pub mod content;
pub mod fetcher;
pub mod links;
pub mod publisher;
pub mod sites;
pub mod telegram;
