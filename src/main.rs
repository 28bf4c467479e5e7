use clap::Parser;
use rustavl::render::{DEFAULT_INDENT, MAX_INDENT};
use rustavl::{Shell, ShellConfig, ShellResult};
use std::io::{stdin, stdout};

/// Interactive AVL tree menu.
#[derive(Debug, Parser)]
#[command(name = "rustavl", version, about)]
struct Args {
    /// Prompt printed before each command.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Columns per tree level in the `show` output.
    #[arg(long, default_value_t = DEFAULT_INDENT, value_parser = parse_indent)]
    indent: usize,

    /// Echo every input line, useful when piping a script in.
    #[arg(long)]
    echo: bool,

    /// Skip the command list printed at startup.
    #[arg(long)]
    no_menu: bool,

    /// Keys to insert before reading commands, e.g. `--preload -1,5,10`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    preload: Vec<i64>,
}

fn parse_indent(arg: &str) -> Result<usize, String> {
    let indent: usize = arg.parse().map_err(|err| format!("{}", err))?;
    if indent > MAX_INDENT {
        return Err(format!("indent must be at most {}", MAX_INDENT));
    }
    Ok(indent)
}

impl From<Args> for ShellConfig {
    fn from(args: Args) -> Self {
        ShellConfig {
            prompt: args.prompt,
            indent: args.indent,
            echo: args.echo,
            menu: !args.no_menu,
            preload: args.preload,
        }
    }
}

fn main() -> ShellResult<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    log::debug!("starting with {:?}", args);

    let mut shell = Shell::new(args.into());
    println!("AVL tree shell.");
    shell.run(stdin().lock(), stdout().lock())
}
