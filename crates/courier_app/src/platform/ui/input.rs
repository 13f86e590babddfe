/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Title(String),
    Author(String),
    File(String),
    Submit,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses a raw stdin line into a command. Field commands take the rest of
/// the line as their value, so an argument-less `title` sets an empty title;
/// the form does not validate what the user typed.
pub fn parse_line(line: &str) -> LineCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineCommand::Empty;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "title" => LineCommand::Title(rest.to_string()),
        "author" => LineCommand::Author(rest.to_string()),
        "file" => LineCommand::File(rest.to_string()),
        "submit" if rest.is_empty() => LineCommand::Submit,
        "help" if rest.is_empty() => LineCommand::Help,
        "quit" if rest.is_empty() => LineCommand::Quit,
        _ => LineCommand::Unknown(word.to_string()),
    }
}
