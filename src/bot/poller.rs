use anyhow::Result;
use std::{sync::Arc, time::Duration};
use tokio::{signal, time::sleep};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{Instrument, debug, error, info, info_span};

use crate::bot::handler::{IncomingRequest, MessageHandler};
use crate::telegram::{BotClient, Update};

/// Pause after a failed `getUpdates` call so a dead network does not spin.
const ERROR_PAUSE: Duration = Duration::from_secs(1);

/// Long-polls Telegram and handles each update in its own task.
pub struct Poller {
    bot: BotClient,
    handler: Arc<MessageHandler>,
    poll_timeout: Duration,
    shutdown_token: CancellationToken,
    tasks: TaskTracker,
}

impl Poller {
    pub fn new(bot: BotClient, handler: Arc<MessageHandler>, poll_timeout: Duration) -> Self {
        Self {
            bot,
            handler,
            poll_timeout,
            shutdown_token: CancellationToken::new(),
            tasks: TaskTracker::new(),
        }
    }

    /// Cancelling this token stops the loop after in-flight updates finish.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Run until Ctrl-C or until the shutdown token is cancelled.
    pub async fn run(self) -> Result<()> {
        info!(
            "Polling for updates (timeout {}s)",
            self.poll_timeout.as_secs()
        );

        let shutdown_token = self.shutdown_token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_token.cancelled() => {}
                result = signal::ctrl_c() => {
                    if let Err(e) = result {
                        error!("Failed to listen for shutdown signal: {}", e);
                        return;
                    }
                    info!("Received shutdown signal, initiating graceful shutdown...");
                    shutdown_token.cancel();
                }
            }
        });

        let mut offset: Option<i64> = None;

        loop {
            let updates = tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                result = self.bot.get_updates(offset, self.poll_timeout) => result,
            };

            match updates {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        self.dispatch(update);
                    }
                }
                Err(e) => {
                    error!("Failed to fetch updates: {}", e);
                    tokio::select! {
                        _ = self.shutdown_token.cancelled() => break,
                        _ = sleep(ERROR_PAUSE) => {}
                    }
                }
            }
        }

        info!("Shutdown initiated, waiting for in-flight messages...");
        self.tasks.close();
        self.tasks.wait().await;
        info!("All messages handled, shutting down");

        Ok(())
    }

    fn dispatch(&self, update: Update) {
        let update_id = update.update_id;
        let Some(request) = IncomingRequest::from_update(&update) else {
            debug!(update_id, "skipping update without text message");
            return;
        };

        let bot = self.bot.clone();
        let handler = self.handler.clone();
        let span = info_span!("update", id = update_id, chat = request.chat_id);

        self.tasks.spawn(
            async move {
                let Some(reply) = handler.handle(&request).await else {
                    return;
                };
                if let Err(e) = bot.send_message(request.chat_id, &reply).await {
                    error!("Failed to send reply: {}", e);
                }
            }
            .instrument(span),
        );
    }
}
