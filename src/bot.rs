use std::sync::Arc;

use anyhow::Result;
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use teloxide::{ApiError, RequestError};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::replies;

/// Commands the dispatcher parses out of incoming messages.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    Start,
}

/// Shared application state
pub struct AppState {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Start the Telegram bot
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let bot = Bot::new(&state.config.telegram.bot_token);

    info!("Starting Telegram bot...");

    // One branch per update kind; anything matching neither falls through to
    // the default handler below.
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(
            Update::filter_callback_query()
                .filter(|q: CallbackQuery| is_continue(q.data.as_deref()))
                .endpoint(on_continue),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Payload predicate for the callback-query branch. Only the Continue
/// button's data reaches `on_continue`; everything else stays unhandled.
fn is_continue(data: Option<&str>) -> bool {
    data == Some(replies::CALLBACK_CONTINUE)
}

/// Telegram rejects an edit that would leave the message unchanged. For this
/// flow that means Continue was pressed again after the download options were
/// already delivered, so the message is in its final state.
fn already_delivered(err: &RequestError) -> bool {
    matches!(err, RequestError::Api(ApiError::MessageNotModified))
}

async fn on_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            info!("Start command from chat {}", msg.chat.id);

            let reply = replies::welcome();
            bot.send_message(msg.chat.id, reply.text)
                .reply_markup(reply.keyboard)
                .await?;
        }
    }

    Ok(())
}

async fn on_continue(bot: Bot, q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    // Clear the client-side loading spinner before touching the message.
    bot.answer_callback_query(q.id.clone()).await?;

    let message = match q.regular_message() {
        Some(message) => message,
        None => {
            warn!("Continue pressed on a message the bot can no longer edit");
            return Ok(());
        }
    };

    let reply = replies::download_ready(&state.config.delivery.download_url);

    match bot
        .edit_message_text(message.chat.id, message.id, reply.text)
        .reply_markup(reply.keyboard)
        .await
    {
        Ok(_) => info!("Download options delivered to chat {}", message.chat.id),
        Err(err) if already_delivered(&err) => {
            debug!(
                "Chat {} already shows the download options",
                message.chat.id
            );
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
