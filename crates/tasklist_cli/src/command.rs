//! Line command parsing.

pub const HELP: &str = "\
commands:
  list <name>   create a list
  task <name>   add a task to the selected list
  select <n>    select the n-th list
  click-blank   click empty space in the list column
  delete        delete the selected list
  show          print the screen
  help          print this help
  quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewList(String),
    NewTask(String),
    /// 1-based row in the list column.
    Select(usize),
    ClickBlank,
    Delete,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Names keep their inner spacing; blank names
    /// are passed through so the core decides how to treat them.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "list" => Ok(Self::NewList(rest.to_string())),
            "task" => Ok(Self::NewTask(rest.to_string())),
            "select" => rest
                .parse::<usize>()
                .ok()
                .filter(|row| *row > 0)
                .map(Self::Select)
                .ok_or_else(|| format!("select expects a row number, got `{rest}`")),
            "click-blank" => Ok(Self::ClickBlank),
            "delete" => Ok(Self::Delete),
            "show" | "" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `{other}`; type `help`")),
        }
    }
}
