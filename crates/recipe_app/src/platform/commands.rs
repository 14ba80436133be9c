/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Select the queue entry at this 1-based position.
    Select(usize),
    /// Search for the text after `/`, verbatim. Empty shows everything.
    Search(String),
    Reload,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> UserCommand {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if let Some(keyword) = line.strip_prefix('/') {
        return UserCommand::Search(keyword.to_string());
    }

    let trimmed = line.trim();
    match trimmed {
        "" => UserCommand::Empty,
        "q" | "quit" => UserCommand::Quit,
        "r" | "reload" => UserCommand::Reload,
        "?" | "h" | "help" => UserCommand::Help,
        _ => trimmed
            .parse::<usize>()
            .map(UserCommand::Select)
            .unwrap_or_else(|_| UserCommand::Unknown(trimmed.to_string())),
    }
}

pub const HELP: &str = "\
Commands:
  <n>         show recipe number n
  /<keyword>  search titles (and ingredients); / alone shows all
  r           reload the recipe list
  q           quit";
