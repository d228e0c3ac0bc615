//! Handles the command logic for `/list` in both delivery modes.

use super::ui;
use crate::AppState;
use crate::database::devices;
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;
use sqlx::SqlitePool;

const STORE_FAILURE: &str = "⚠️ No se pudo leer el registro. Inténtalo de nuevo más tarde.";

pub fn register() -> CreateCommand {
    CreateCommand::new("list").description("Muestra todos los seriales registrados.")
}

async fn listing_response(pool: &SqlitePool) -> String {
    match devices::list_all(pool).await {
        Ok(devices) if devices.is_empty() => ui::EMPTY.to_string(),
        Ok(devices) => ui::format_listing(&devices),
        Err(e) => {
            tracing::error!(error = ?e, "failed to list devices");
            STORE_FAILURE.to_string()
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let content = listing_response(&state.db).await;
    let builder =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));
    if let Err(why) = interaction.create_response(&ctx.http, builder).await {
        println!("Error sending /list response: {:?}", why);
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let content = listing_response(&state.db).await;
    if let Err(why) = msg.channel_id.say(&ctx.http, content).await {
        println!("Error sending /list prefix response: {:?}", why);
    }
}
