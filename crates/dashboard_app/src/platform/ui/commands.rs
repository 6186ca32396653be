use dashboard_core::{KeywordId, Msg};

pub const HELP: &str = "\
Commands:
  add <term>     track a new keyword
  del <id>       delete keyword #id
  crawl <id>     crawl news for keyword #id
  select <id>    show articles and trend for keyword #id
  clear          deselect the current keyword
  show           redraw the dashboard
  help           show this help
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(KeywordId),
    Crawl(KeywordId),
    Select(KeywordId),
    Clear,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Messages the command feeds into the update loop. `Show`, `Help` and
    /// `Quit` are handled by the front end itself.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            // Mirrors typing into the input box and pressing Add.
            Command::Add(term) => vec![Msg::TermInputChanged(term), Msg::AddKeywordClicked],
            Command::Delete(id) => vec![Msg::DeleteKeywordClicked(id)],
            Command::Crawl(id) => vec![Msg::CrawlKeywordClicked(id)],
            Command::Select(id) => vec![Msg::KeywordSelected(Some(id))],
            Command::Clear => vec![Msg::KeywordSelected(None)],
            Command::Show | Command::Help | Command::Quit => Vec::new(),
        }
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Command::Add(rest.to_string()),
        "del" | "delete" | "rm" => Command::Delete(parse_id(verb, rest)?),
        "crawl" | "c" => Command::Crawl(parse_id(verb, rest)?),
        "select" | "s" => Command::Select(parse_id(verb, rest)?),
        "clear" => Command::Clear,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

fn parse_id(verb: &str, rest: &str) -> Result<KeywordId, String> {
    let digits = rest.strip_prefix('#').unwrap_or(rest);
    digits
        .parse()
        .map_err(|_| format!("'{verb}' needs a keyword id, got '{rest}'"))
}
