//! Main chat loop orchestration.
//!
//! Reads input, dispatches slash commands, sends each turn with the full
//! history to the relay, and rolls the turn back when no reply arrives.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::cli::client::{RelayClient, UNAVAILABLE_MESSAGE};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::history::Conversation;
use super::input::{ChatInput, InputEvent};

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message("NeuroBot is thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Send one user message and print the outcome.
async fn send_turn(client: &RelayClient, conversation: &mut Conversation, chat_input: &mut ChatInput, text: &str) {
    let payload = conversation.begin_turn(text);
    let spinner = thinking_spinner();
    let start = Instant::now();
    let result = client.send(&payload).await;
    spinner.finish_and_clear();

    match result {
        Ok(reply) => {
            debug!(elapsed_ms = start.elapsed().as_millis() as u64, "reply received");
            println!("\n  {} {}", style("NeuroBot").cyan().bold(), reply.trim());
            println!();
            conversation.complete_turn(reply);
        }
        Err(e) => {
            warn!(error = %e, "chat turn failed");
            conversation.abort_turn();
            chat_input.remember(text);
            eprintln!("\n  {} {}", style("!").red().bold(), UNAVAILABLE_MESSAGE);
            eprintln!(
                "  {}",
                style("Your message was kept: /retry to resend, or press up to edit.").dim()
            );
            println!();
        }
    }
}

/// Run the interactive chat loop against the relay at `url`.
pub async fn run_chat_loop(url: &str, system: Option<&str>) -> anyhow::Result<()> {
    let client = RelayClient::new(url)?;
    let mut conversation = Conversation::new(system);

    print_welcome_banner(client.url(), system.is_some());

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                let Some(cmd) = commands::parse(&text) else {
                    send_turn(&client, &mut conversation, &mut chat_input, &text).await;
                    continue;
                };

                match cmd {
                    ChatCommand::Help => commands::print_help(),
                    ChatCommand::Clear => chat_input.clear(),
                    ChatCommand::Exit => {
                        println!("\n  {}", style("Session ended.").dim());
                        break;
                    }
                    ChatCommand::Reset => {
                        conversation.reset();
                        println!("\n  {}\n", style("Conversation cleared.").dim());
                    }
                    ChatCommand::History => {
                        println!();
                        for turn in conversation.turns() {
                            let label = match turn.role {
                                neurosync_types::chat::ChatRole::User => style("You").green(),
                                _ => style("NeuroBot").cyan(),
                            };
                            let preview: String = turn.content.chars().take(100).collect();
                            let ellipsis = if turn.content.chars().count() > 100 { "..." } else { "" };
                            println!("  {} {preview}{ellipsis}", label.bold());
                        }
                        println!();
                    }
                    ChatCommand::Retry => match conversation.take_unsent() {
                        Some(unsent) => {
                            send_turn(&client, &mut conversation, &mut chat_input, &unsent).await;
                        }
                        None => println!("\n  {}\n", style("Nothing to retry.").dim()),
                    },
                    ChatCommand::Unknown(name) => {
                        println!(
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(name).dim()
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
