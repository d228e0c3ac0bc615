//! Handles the command logic for `/check` in both delivery modes.

use super::logic;
use crate::AppState;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("check")
        .description("Consulta un serial, localmente o en la API externa.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "serial",
                "El serial a consultar.",
            )
            .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let serial = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "serial")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();

    let content = if serial.is_empty() {
        logic::USAGE.to_string()
    } else {
        logic::check_serial(&state.db, &state.lookup, serial).await
    };

    let builder =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));
    if let Err(why) = interaction.create_response(&ctx.http, builder).await {
        println!("Error sending /check response: {:?}", why);
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    // Extra tokens after the serial are ignored.
    let content = match args.first() {
        Some(serial) => logic::check_serial(&state.db, &state.lookup, serial).await,
        None => logic::USAGE.to_string(),
    };

    if let Err(why) = msg.channel_id.say(&ctx.http, content).await {
        println!("Error sending /check prefix response: {:?}", why);
    }
}
