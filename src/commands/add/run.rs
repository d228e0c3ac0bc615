//! Handles the command logic for `/add` in both delivery modes.

use super::logic;
use crate::AppState;
use crate::database::devices::Device;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("add")
        .description("Registra un serial con su marca, modelo y estado.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "serial",
                "El serial del dispositivo.",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "marca", "La marca.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "modelo", "El modelo.")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "estado",
                "Estado del dispositivo (texto libre).",
            )
            .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let option = |name: &str| {
        interaction
            .data
            .options
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.value.as_str())
            .unwrap_or_default()
            .to_string()
    };
    let device = Device {
        serial: option("serial"),
        marca: option("marca"),
        modelo: option("modelo"),
        estado: option("estado"),
    };

    let content = logic::register_device(&state.db, &device).await;
    let builder =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));
    if let Err(why) = interaction.create_response(&ctx.http, builder).await {
        println!("Error sending /add response: {:?}", why);
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let content = match logic::parse_args(&args) {
        Some(device) => logic::register_device(&state.db, &device).await,
        None => logic::USAGE.to_string(),
    };

    if let Err(why) = msg.reply(ctx, content).await {
        println!("Error sending /add prefix response: {:?}", why);
    }
}
