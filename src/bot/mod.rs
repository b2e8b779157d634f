pub mod handler;
pub mod poller;
pub mod replies;

pub use handler::{IncomingRequest, MessageHandler};
pub use poller::Poller;
pub use replies::Outcome;
