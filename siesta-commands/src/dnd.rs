use tracing::info;

use crate::CommandMeta;
use siesta_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "dnd",
    desc: "Toggle the do-not-disturb override (autoreply fires regardless of schedule).",
    usage: "/dnd <on|off|status>",
};

/// Owner-only toggle for the manual override flag. The argument grammar is
/// exact: `on`, `off`, or `status`, lowercase.
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn dnd(
    ctx: Context<'_>,
    #[description = "Desired state: on, off, or status"] state: Option<String>,
) -> Result<(), Error> {
    let reply_state = &ctx.data().state;

    match state.as_deref().map(str::trim) {
        Some("on") => {
            reply_state.set_dnd(true);
            info!("do-not-disturb override enabled by owner");
            ctx.say("DND: ON").await?;
        }
        Some("off") => {
            reply_state.set_dnd(false);
            info!("do-not-disturb override disabled by owner");
            ctx.say("DND: OFF").await?;
        }
        Some("status") => {
            let label = if reply_state.dnd_enabled() {
                "ON"
            } else {
                "OFF"
            };
            ctx.say(format!("DND is currently {label}")).await?;
        }
        _ => {
            ctx.say(format!("Usage: `{}`", META.usage)).await?;
        }
    }

    Ok(())
}
