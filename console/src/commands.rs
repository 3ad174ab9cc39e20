use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  file <path>        select a PDF to upload
  upload             upload and index the selected PDF
  ask <question>     set the question
  query [question]   run the question (optionally setting it first)
  show               redraw the view
  help               show this help
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectFile(PathBuf),
    Upload,
    Ask(String),
    Query(Option<String>),
    Show,
    Help,
    Quit,
}

/// Parses one line of input. `Err` carries a message for the user.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "file" | "f" => {
            let path = rest.trim();
            if path.is_empty() {
                return Err("usage: file <path>".to_string());
            }
            Command::SelectFile(PathBuf::from(path))
        }
        "upload" | "u" => Command::Upload,
        "ask" | "a" => Command::Ask(rest.to_string()),
        "query" | "q" => {
            if rest.trim().is_empty() {
                Command::Query(None)
            } else {
                Command::Query(Some(rest.to_string()))
            }
        }
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {:?}, try `help`", other)),
    };

    Ok(Some(command))
}
