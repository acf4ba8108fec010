//! Support assistant chat command.

use anyhow::Result;
use dialoguer::{Input, Select};
use fithaven_commerce::assistant::{ChatOption, ScriptedAssistant};

use super::ChatArgs;
use crate::context::Context;

const START_OVER: &str = "Start over";
const CLOSE_CHAT: &str = "Close chat";

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let mut assistant = store.assistant();
    let mut shown = 0;

    assistant.open();
    show_new(ctx, &assistant, &mut shown);

    let scripted = !args.topics.is_empty() || args.email.is_some();
    if scripted || !ctx.output.is_interactive() {
        run_scripted(args, ctx, &mut assistant, &mut shown)?;
    } else {
        run_interactive(ctx, &mut assistant, &mut shown)?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "phase": assistant.phase().as_str(),
            "messages": assistant.messages(),
        }));
    }
    Ok(())
}

/// Ask the given topics in order, then optionally hand off to support.
fn run_scripted(
    args: ChatArgs,
    ctx: &Context,
    assistant: &mut ScriptedAssistant,
    shown: &mut usize,
) -> Result<()> {
    for topic in &args.topics {
        assistant.select_topic(topic)?;
        show_new(ctx, assistant, shown);
    }

    if let Some(email) = args.email {
        assistant.select_contact_support()?;
        show_new(ctx, assistant, shown);
        let handoff = assistant.submit_email(&email, &args.message)?;
        show_new(ctx, assistant, shown);
        ctx.output.notice(&handoff.notice);
    }
    Ok(())
}

/// Menu-driven conversation until the shopper closes the chat.
fn run_interactive(
    ctx: &Context,
    assistant: &mut ScriptedAssistant,
    shown: &mut usize,
) -> Result<()> {
    loop {
        if assistant.show_email_form() {
            let email: String = Input::new()
                .with_prompt("Your email address")
                .allow_empty(true)
                .interact_text()?;
            let message: String = Input::new()
                .with_prompt("Additional message (optional)")
                .allow_empty(true)
                .interact_text()?;
            match assistant.submit_email(&email, &message) {
                Ok(handoff) => {
                    show_new(ctx, assistant, shown);
                    ctx.output.notice(&handoff.notice);
                }
                Err(e) => ctx.output.error(&e.to_string()),
            }
            continue;
        }

        // The confirmation after a hand-off carries no buttons.
        let options = match assistant.current_options() {
            [] => assistant.answers().follow_up_menu(),
            options => options.to_vec(),
        };
        let mut labels: Vec<&str> = options.iter().map(ChatOption::label).collect();
        labels.extend([START_OVER, CLOSE_CHAT]);

        let selection = Select::new()
            .with_prompt("How can we help?")
            .items(&labels)
            .default(0)
            .interact()?;

        match options.get(selection) {
            Some(ChatOption::Topic(topic)) => {
                assistant.select_topic(topic)?;
            }
            Some(ChatOption::ContactSupport) => {
                assistant.select_contact_support()?;
            }
            None if labels[selection] == START_OVER => {
                assistant.reset();
                *shown = 0;
                assistant.open();
            }
            None => {
                assistant.close();
                ctx.output.info("Chat closed");
                return Ok(());
            }
        }
        show_new(ctx, assistant, shown);
    }
}

/// Print messages appended since the last call.
fn show_new(ctx: &Context, assistant: &ScriptedAssistant, shown: &mut usize) {
    let messages = assistant.messages();
    for message in messages.iter().skip(*shown) {
        ctx.output.chat_line(&message.text, message.is_user);
    }
    *shown = messages.len();
}
