//! Implements the `/start` welcome command.
//!
//! Purely informational: a fixed greeting plus two link buttons. No store or
//! API access.

use crate::constants::{RULES_URL, SITE_URL};
use serenity::builder::{
    CreateActionRow, CreateButton, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

const WELCOME: &str = "👋 Bienvenido a *Kevin Unlock Bot*\n\n\
Usa `/check` para consultar, `/add` para registrar un serial, y `/list` para ver todos.\n\n\
Ejemplo:\n`/check 123456789`\n`/add 111111111 Samsung A14 Liberado`";

pub fn register() -> CreateCommand {
    CreateCommand::new("start").description("Muestra el mensaje de bienvenida y los enlaces del bot.")
}

// One button per row, matching the layout of the original keyboard.
fn link_buttons() -> Vec<CreateActionRow> {
    vec![
        CreateActionRow::Buttons(vec![CreateButton::new_link(SITE_URL).label("🌐 Kevin Unlock")]),
        CreateActionRow::Buttons(vec![
            CreateButton::new_link(RULES_URL).label("📜 Reglas del grupo"),
        ]),
    ]
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(WELCOME)
            .components(link_buttons()),
    );
    if let Err(why) = interaction.create_response(&ctx.http, builder).await {
        println!("Error sending /start response: {:?}", why);
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let builder = CreateMessage::new()
        .content(WELCOME)
        .components(link_buttons());
    if let Err(why) = msg.channel_id.send_message(&ctx.http, builder).await {
        println!("Error sending /start prefix response: {:?}", why);
    }
}
