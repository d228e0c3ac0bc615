use crate::{commands, constants::COMMAND_PREFIX};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command as GlobalCommand, Interaction};
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use std::str::FromStr;

enum Command {
    Start,
    Add,
    Check,
    List,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Command::Start),
            "add" => Ok(Command::Add),
            "check" => Ok(Command::Check),
            "list" => Ok(Command::List),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "start" => commands::start::run_slash(&ctx, command).await,
                "add" => commands::add::run::run_slash(&ctx, command).await,
                "check" => commands::check::run::run_slash(&ctx, command).await,
                "list" => commands::list::run::run_slash(&ctx, command).await,
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(command_body) = msg.content.strip_prefix(COMMAND_PREFIX) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Start => commands::start::run_prefix(&ctx, &msg).await,
            Command::Add => commands::add::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Check => commands::check::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::List => commands::list::run::run_prefix(&ctx, &msg).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        println!("{} is connected and ready!", ready.user.name);
        let commands_to_register = vec![
            commands::start::register(),
            commands::add::register(),
            commands::check::register(),
            commands::list::register(),
        ];
        if let Err(e) = GlobalCommand::set_global_commands(&ctx.http, commands_to_register).await {
            println!("[HANDLER] Error creating global commands: {:?}", e);
        }
        println!("[HANDLER] Successfully registered global commands.");
    }
}
