//! Line-oriented menu over an [`AvlTree<i64>`].
//!
//! The shell owns the only tree handle; each command is parsed from one input
//! line and applied through [`Shell::execute`].

use log::{debug, info};
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::render;
use crate::tree::AvlTree;

const HELP: &str = "\
Commands:
  1 <key> | insert <key>   insert a key
  2 <key> | delete <key>   remove a key
  3       | list           print the keys in order
  4       | show           print the tree sideways
  outline                  print the tree top-down with heights
  help                     show this message
  5       | quit           release the tree and exit
";

/// Printed when an insert or delete arrives without its key.
const KEY_PROMPT: &str = "key: ";

/// Convenience alias for shell results.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors raised while reading, parsing or answering commands.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    UnknownCommand(String),
    #[error("`{0}` needs a key")]
    MissingKey(String),
    #[error("`{0}` is not a valid key")]
    InvalidKey(String),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A single parsed menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    Delete(i64),
    InOrder,
    Show,
    Outline,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Accepts both the numeric menu choices and
    /// command words.
    pub fn parse(line: &str) -> ShellResult<Command> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err(ShellError::UnknownCommand(String::new()));
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "1" | "i" | "insert" => Command::Insert(Self::parse_key(word, parts.next())?),
            "2" | "d" | "delete" | "remove" => Command::Delete(Self::parse_key(word, parts.next())?),
            "3" | "l" | "list" => Command::InOrder,
            "4" | "s" | "show" => Command::Show,
            "o" | "outline" => Command::Outline,
            "h" | "?" | "help" => Command::Help,
            "5" | "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ShellError::UnknownCommand(word.to_string())),
        };
        Ok(command)
    }

    fn parse_key(word: &str, arg: Option<&str>) -> ShellResult<i64> {
        let arg = arg.ok_or_else(|| ShellError::MissingKey(word.to_string()))?;
        arg.parse()
            .map_err(|_| ShellError::InvalidKey(arg.to_string()))
    }
}

/// Whether the shell should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Printed before every line read by [`Shell::run`].
    pub prompt: String,
    /// Columns per level in the sideways rendering.
    pub indent: usize,
    /// Repeat each input line to the output, for scripted sessions.
    pub echo: bool,
    /// Print the command list when [`Shell::run`] starts.
    pub menu: bool,
    /// Keys inserted when the shell starts.
    pub preload: Vec<i64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            indent: render::DEFAULT_INDENT,
            echo: false,
            menu: true,
            preload: Vec::new(),
        }
    }
}

/// Interactive menu state: the configuration and the tree it edits.
#[derive(Debug)]
pub struct Shell {
    config: ShellConfig,
    tree: AvlTree<i64>,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let tree: AvlTree<i64> = config.preload.iter().copied().collect();
        if !tree.is_empty() {
            debug!("preloaded {} keys", tree.len());
        }
        Self { config, tree }
    }

    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Applies `command` to the tree and writes its response to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> ShellResult<Flow> {
        match command {
            Command::Insert(key) => {
                if self.tree.insert(key) {
                    writeln!(out, "inserted {}", key)?;
                } else {
                    writeln!(out, "{} already present", key)?;
                }
            }
            Command::Delete(key) => {
                if self.tree.remove(key) {
                    writeln!(out, "removed {}", key)?;
                } else {
                    writeln!(out, "{} not found", key)?;
                }
            }
            Command::InOrder => {
                writeln!(out, "{}", render::in_order_line(&self.tree))?;
            }
            Command::Show => {
                write!(out, "{}", render::sideways(&self.tree, self.config.indent))?;
            }
            Command::Outline => {
                write!(out, "{}", render::outline(&self.tree))?;
            }
            Command::Help => {
                write!(out, "{}", HELP)?;
            }
            Command::Quit => {
                let released = self.tree.clear();
                info!("released {} nodes on exit", released);
                writeln!(out, "bye")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Reads commands from `input` until `quit` or end of input.
    ///
    /// When `menu` is set the command list is printed once before the first
    /// prompt. An insert or delete typed without its key asks for the key on
    /// the next line. Parse errors are reported on `out` and do not stop the
    /// loop; I/O errors do.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> ShellResult<()> {
        if self.config.menu {
            write!(out, "{}", HELP)?;
        }
        loop {
            let Some(line) = self.prompt_line(&self.config.prompt, &mut input, &mut out)? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            let parsed = match Command::parse(&line) {
                Err(ShellError::MissingKey(word)) => {
                    let Some(key) = self.prompt_line(KEY_PROMPT, &mut input, &mut out)? else {
                        break;
                    };
                    Command::parse(&format!("{} {}", word, key))
                }
                parsed => parsed,
            };
            let command = match parsed {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };
            if self.execute(command, &mut out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line, `None` at end of input.
    fn prompt_line<R: BufRead, W: Write>(
        &self,
        prompt: &str,
        input: &mut R,
        out: &mut W,
    ) -> ShellResult<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let trimmed = line.trim();
        if self.config.echo {
            writeln!(out, "{}", trimmed)?;
        }
        Ok(Some(trimmed.to_string()))
    }
}
