//! Chat command parsing and the registered command menu.

use std::str::FromStr;

use super::types::BotCommand;

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Ask,
    Guess,
    Namelist,
    Next,
    History,
    Scorecard,
    End,
    Summary,
    Help,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Command::Start),
            "ask" => Ok(Command::Ask),
            "guess" => Ok(Command::Guess),
            "namelist" => Ok(Command::Namelist),
            "next" => Ok(Command::Next),
            "history" => Ok(Command::History),
            "scorecard" => Ok(Command::Scorecard),
            "end" => Ok(Command::End),
            "summary" => Ok(Command::Summary),
            "help" => Ok(Command::Help),
            _ => Err(()),
        }
    }
}

/// Split a message like `/ask@whodis_bot Is it a man?` into the command
/// and its argument text.
///
/// Returns `None` for non-command messages and unknown commands. A
/// `@botname` suffix on the command word is stripped (Telegram appends it
/// in group chats).
pub fn parse(text: &str) -> Option<(Command, &str)> {
    let text = text.trim();
    let rest = text.strip_prefix('/')?;

    let (head, args) = match rest.split_once(char::is_whitespace) {
        Some((head, args)) => (head, args.trim()),
        None => (rest, ""),
    };
    let name = head.split('@').next().unwrap_or(head);

    let command = name.to_lowercase().parse().ok()?;
    Some((command, args))
}

/// The menu registered with Telegram at startup.
pub fn command_menu() -> Vec<BotCommand> {
    vec![
        BotCommand { command: "start", description: "Start a new game" },
        BotCommand { command: "ask", description: "Ask a yes/no question" },
        BotCommand { command: "guess", description: "Make a guess" },
        BotCommand { command: "namelist", description: "Show the list of people" },
        BotCommand { command: "next", description: "Next page of names" },
        BotCommand { command: "history", description: "View previous questions & guesses" },
        BotCommand { command: "scorecard", description: "Show the game scorecard" },
        BotCommand { command: "end", description: "End the game" },
        BotCommand { command: "summary", description: "See AI thoughts and answers" },
        BotCommand { command: "help", description: "Show this help message" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command() {
        assert_eq!(parse("/start"), Some((Command::Start, "")));
        assert_eq!(parse("/namelist"), Some((Command::Namelist, "")));
    }

    #[test]
    fn test_command_with_args() {
        assert_eq!(parse("/ask Is it a man?"), Some((Command::Ask, "Is it a man?")));
        assert_eq!(parse("/guess  jose mourinho "), Some((Command::Guess, "jose mourinho")));
    }

    #[test]
    fn test_bot_mention_stripped() {
        assert_eq!(
            parse("/ask@whodis_bot Is it a woman?"),
            Some((Command::Ask, "Is it a woman?"))
        );
        assert_eq!(parse("/start@whodis_bot"), Some((Command::Start, "")));
    }

    #[test]
    fn test_case_insensitive_command_word() {
        assert_eq!(parse("/Start"), Some((Command::Start, "")));
    }

    #[test]
    fn test_non_commands_ignored() {
        assert_eq!(parse("hello there"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("/unknowncmd"), None);
    }

    #[test]
    fn test_menu_covers_every_command() {
        let menu = command_menu();
        assert_eq!(menu.len(), 10);
        for entry in &menu {
            assert!(entry.command.parse::<Command>().is_ok(), "{}", entry.command);
        }
    }
}
