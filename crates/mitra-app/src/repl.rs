//! Terminal chat loop.
//!
//! The hero screen comes first. Starting the chat from it opens the
//! conversation, where typed lines are sent as messages and a line starting
//! with `/` is a command. Replies and speech results are printed as they
//! arrive.

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use mitra_chat::{ChatSession, Update};
use mitra_core::i18n::{text, TextKey};
use mitra_core::{Locale, Message, Sender};

const HELP: &str = "\
Commands:
  /lang <en|hi|or>  switch language
  /mic              start or stop voice input
  /stop             stop voice input
  /history          reprint the conversation
  /help             show this help
  /quit             leave
An empty line sends the current draft (e.g. recognized speech).";

const HERO_FEATURES: [TextKey; 3] = [
    TextKey::FeatureAlwaysAvailable,
    TextKey::FeatureMultiLanguage,
    TextKey::FeaturePersonalCare,
];

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Send(String),
    SendDraft,
    Lang(Locale),
    Mic,
    Stop,
    History,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Input, String> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        if trimmed.is_empty() {
            return Ok(Input::SendDraft);
        }
        return Ok(Input::Send(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("lang"), Some(code)) => code.parse().map(Input::Lang).map_err(|e| e.to_string()),
        (Some("lang"), None) => Err("usage: /lang <en|hi|or>".to_string()),
        (Some("mic"), _) => Ok(Input::Mic),
        (Some("stop"), _) => Ok(Input::Stop),
        (Some("history"), _) => Ok(Input::History),
        (Some("help"), _) => Ok(Input::Help),
        (Some("quit" | "exit"), _) => Ok(Input::Quit),
        _ => Err(format!("unknown command: /{command} (try /help)")),
    }
}

/// Format a message for the terminal.
pub fn render(message: &Message) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Assistant => text(message.locale, TextKey::ChatTitle),
    };
    format!(
        "[{}] {}: {}",
        message.created_at.with_timezone(&Local).format("%H:%M:%S"),
        who,
        message.text
    )
}

fn banner(locale: Locale) -> String {
    format!(
        "{} - {}\n{}\n{} | {}\n(/help for commands)",
        text(locale, TextKey::AppName),
        text(locale, TextKey::ChatHeading),
        text(locale, TextKey::ChatSubheading),
        text(locale, TextKey::EmergencyContact),
        text(locale, TextKey::HelplineContact),
    )
}

fn start_prompt(locale: Locale) -> String {
    format!("[{}: Enter]", text(locale, TextKey::StartChat))
}

fn hero(locale: Locale) -> String {
    let features: Vec<String> = HERO_FEATURES
        .iter()
        .map(|key| format!("  * {}", text(locale, *key)))
        .collect();
    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}",
        text(locale, TextKey::AppName),
        text(locale, TextKey::Tagline),
        text(locale, TextKey::HeroTitle),
        text(locale, TextKey::HeroSubtitle),
        features.join("\n"),
        start_prompt(locale),
    )
}

/// True when a line entered on the hero screen starts the chat.
fn opens_chat(input: &Input) -> bool {
    matches!(input, Input::Send(_) | Input::SendDraft)
}

fn print_last_user_message(session: &ChatSession, sent: bool) {
    if !sent {
        return;
    }
    if let Some(message) = session.conversation().last() {
        println!("{}", render(message));
    }
}

fn send_typed(session: &mut ChatSession, typed: String) {
    if session.input_mut().type_text(typed) {
        let sent = session.submit_draft().is_some();
        print_last_user_message(session, sent);
    } else {
        println!("{}", text(session.locale(), TextKey::Listening));
    }
}

fn open_chat(session: &ChatSession) {
    println!("{}", banner(session.locale()));
    for message in session.messages() {
        println!("{}", render(message));
    }
    println!("{}", text(session.locale(), TextKey::Placeholder));
}

/// Show the hero screen until the chat is started. Returns false when the
/// user leaves from here. Text typed on the hero screen becomes the first
/// message.
async fn hero_screen(
    session: &mut ChatSession,
    lines: &mut Lines<BufReader<Stdin>>,
) -> std::io::Result<bool> {
    println!("{}", hero(session.locale()));
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            return Ok(false);
        };
        match parse_line(&line) {
            Ok(Input::Quit) => return Ok(false),
            Ok(Input::Lang(next)) => {
                session.set_locale(next);
                println!("{}", hero(next));
            }
            Ok(Input::Help) => println!("{HELP}"),
            Ok(input) if opens_chat(&input) => {
                tracing::debug!("Chat opened from hero screen");
                open_chat(session);
                if let Input::Send(typed) = input {
                    send_typed(session, typed);
                }
                return Ok(true);
            }
            Ok(_) => println!("{}", start_prompt(session.locale())),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Run the chat until stdin closes, `/quit`, or Ctrl-C.
pub async fn run(mut session: ChatSession) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !hero_screen(&mut session, &mut lines).await? {
        session.shutdown();
        return Ok(());
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let locale = session.locale();
                match parse_line(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Send(typed)) => send_typed(&mut session, typed),
                    Ok(Input::SendDraft) => {
                        let sent = session.submit_draft().is_some();
                        print_last_user_message(&session, sent);
                    }
                    Ok(Input::Lang(next)) => {
                        session.set_locale(next);
                        println!("{}", next.native_name());
                    }
                    Ok(Input::Mic) => {
                        if !session.input().voice_available() {
                            println!("{}", text(locale, TextKey::VoiceUnavailable));
                        } else if session.input_mut().toggle_listening() {
                            println!("{}", text(locale, TextKey::Listening));
                        }
                    }
                    Ok(Input::Stop) => session.input_mut().stop_listening(),
                    Ok(Input::History) => {
                        for message in session.messages() {
                            println!("{}", render(message));
                        }
                    }
                    Ok(Input::Help) => println!("{HELP}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
            update = session.next_update() => match update {
                Update::Reply(id) => {
                    if let Some(message) = session.conversation().get(id) {
                        println!("{}", render(message));
                    }
                }
                Update::DraftFromSpeech => {
                    println!(
                        "> {}  [{}: Enter]",
                        session.input().draft().text(),
                        text(session.locale(), TextKey::Send)
                    );
                }
                Update::ListeningEnded => {
                    tracing::debug!("Listening ended without a transcript");
                }
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    session.shutdown();
    Ok(())
}
