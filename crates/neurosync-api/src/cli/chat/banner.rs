//! Welcome banner display for chat sessions.

use console::style;

/// Local greeting shown at the start of a session. It is not sent to the relay.
pub const GREETING: &str = "Hello, I am NeuroBot. How can I assist you today?";

pub fn print_welcome_banner(url: &str, has_system_prompt: bool) {
    println!();
    println!("  {} {}", style("🧠").bold(), style("NeuroBot").cyan().bold());
    println!();
    println!("  {}  {}", style("Relay:").bold(), style(url).dim());
    if has_system_prompt {
        println!("  {} {}", style("System:").bold(), style("custom prompt set").dim());
    }
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
    println!("  {} {}", style("NeuroBot").cyan().bold(), GREETING);
    println!();
}
