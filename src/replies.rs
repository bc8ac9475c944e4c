use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

/// Callback data carried by the Continue button. The callback-query branch of
/// the dispatch tree matches on exactly this value.
pub const CALLBACK_CONTINUE: &str = "continue";

const WELCOME_TEXT: &str = "👋 Welcome!\n\n\
     You can download the video using this bot.\n\
     Click Continue to proceed.";

const READY_TEXT: &str = "Your video is ready 👇\n\nChoose your download option:";

/// Message text plus the single inline keyboard attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// Greeting sent for /start: welcome text and the Continue button.
pub fn welcome() -> Reply {
    let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "▶️ Continue",
        CALLBACK_CONTINUE,
    )]]);

    Reply {
        text: WELCOME_TEXT.to_string(),
        keyboard,
    }
}

/// Replacement content once Continue is pressed: ready text and the download
/// link button.
pub fn download_ready(download_url: &Url) -> Reply {
    let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        "⬇️ Download Video",
        download_url.clone(),
    )]]);

    Reply {
        text: READY_TEXT.to_string(),
        keyboard,
    }
}
