use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;

use unlock_bot::services::lookup::SerialApi;
use unlock_bot::{AppState, constants, database, handler};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let database_path =
        env::var("DATABASE_PATH").unwrap_or_else(|_| constants::DEFAULT_DATABASE_PATH.to_string());
    let api_url = env::var("SERIAL_API_URL")
        .unwrap_or_else(|_| constants::DEFAULT_SERIAL_API_URL.to_string());

    let db = database::init::connect(&database_path)
        .await
        .expect("Error opening the serial registry database.");

    let app_state = Arc::new(AppState {
        db,
        lookup: SerialApi::new(api_url),
    });

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    println!("🤖 Bot de Kevin Unlock con base de datos iniciado...");

    if let Err(why) = client.start().await {
        println!("Client error: {:?}", why);
    }
}
