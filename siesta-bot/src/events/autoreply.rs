use std::collections::HashSet;

use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use siesta_core::Data;
use siesta_core::policy::{is_ignored, should_autoreply};

/// Decide whether an incoming message deserves the canned reply and, if so,
/// send it and stamp the sender's cooldown entry.
///
/// Every rejection is a silent no-op: the responder must be invisible to
/// filtered senders. The only side effects happen after all checks pass.
pub async fn handle_message_autoreply(
    ctx: &serenity::Context,
    data: &Data,
    owners: &HashSet<serenity::UserId>,
    message: &serenity::Message,
) {
    // Direct messages only, never group or guild channels.
    if message.guild_id.is_some() {
        return;
    }

    // Skip ourselves, other automations, and the account owner.
    if message.author.id == ctx.cache.current_user().id
        || message.author.bot
        || message.webhook_id.is_some()
        || owners.contains(&message.author.id)
    {
        return;
    }

    let sender_id = message.author.id.get();
    if is_ignored(&data.config, sender_id, Some(&message.author.name)) {
        return;
    }

    // Capture the clock once so the window check and the cooldown stamp
    // agree on what "now" is.
    let now = chrono::Local::now();
    if !should_autoreply(&data.config, data.state.dnd_enabled(), now.time()) {
        return;
    }

    let now_secs = now.timestamp();
    if data
        .state
        .is_on_cooldown(sender_id, now_secs, data.config.cooldown_secs)
        .await
    {
        return;
    }

    match message.reply(&ctx.http, &data.config.reply_text).await {
        Ok(_) => {
            data.state.record_reply(sender_id, now_secs).await;
            debug!(user_id = %message.author.id, "autoreply sent");
        }
        Err(source) => {
            // No cooldown entry on failure: the sender stays eligible the
            // next time they message us.
            error!(?source, user_id = %message.author.id, "failed to send autoreply");
        }
    }
}
