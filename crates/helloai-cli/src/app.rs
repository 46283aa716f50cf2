use anyhow::Result;
use helloai_core::{Conversation, IntentRouter, Settings};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(settings: &Settings, prompt: &str) -> Result<()> {
    let router = IntentRouter::from_settings(settings)?;
    let reply = router.route(prompt).await;
    println!("{}", reply.text());
    Ok(())
}

// ── Interactive mode ────────────────────────────────────────────────────

pub async fn run_repl(settings: &Settings) -> Result<()> {
    let conversation = Conversation::new(IntentRouter::from_settings(settings)?);

    println!("Hello-World-AI. Type a message, or 'exit' to quit.");
    println!(
        "Commands: docs <topic>, save snippet <name> <code>, fetch snippet <name>, \
         delete snippet <name>, list snippets, review code <code>"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        // Each line is awaited before the next is read, so submissions never overlap.
        let reply = conversation.submit(&line).await?;
        println!(
            "[{}] {}\n",
            reply.timestamp().with_timezone(&chrono::Local).format("%H:%M:%S"),
            reply.text()
        );
    }

    Ok(())
}
