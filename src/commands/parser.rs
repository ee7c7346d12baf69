use super::types::Command;

/// Recognize a chat built-in.
///
/// A bare word (`summary`) must be the whole input so ordinary sentences that
/// start with one are still chat. With a leading `/`, `save` also takes a
/// filename argument.
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    let (slashed, body) = match trimmed.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut parts = body.splitn(2, char::is_whitespace);
    let cmd = parts.next()?.to_lowercase();
    let args = parts.next().unwrap_or("").trim();

    if !args.is_empty() && !(slashed && cmd == "save") {
        return None;
    }

    match cmd.as_str() {
        "summary" => Some(Command::Summary),
        "save" => Some(Command::Save {
            filename: if args.is_empty() {
                None
            } else {
                Some(args.to_string())
            },
        }),
        "clear" => Some(Command::Clear),
        "help" | "?" if slashed || cmd == "help" => Some(Command::Help),
        "exit" | "quit" | "bye" => Some(Command::Exit),
        _ => None,
    }
}
