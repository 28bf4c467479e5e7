use std::io::Cursor;

use rustavl::{Command, Flow, Shell, ShellConfig, ShellError, ShellResult};

fn quiet_config() -> ShellConfig {
    ShellConfig {
        prompt: String::new(),
        menu: false,
        ..ShellConfig::default()
    }
}

#[test]
fn parses_menu_numbers_and_words() -> ShellResult<()> {
    assert_eq!(Command::parse("1 42")?, Command::Insert(42));
    assert_eq!(Command::parse("insert -7")?, Command::Insert(-7));
    assert_eq!(Command::parse("2 5")?, Command::Delete(5));
    assert_eq!(Command::parse("REMOVE 5")?, Command::Delete(5));
    assert_eq!(Command::parse("3")?, Command::InOrder);
    assert_eq!(Command::parse("list")?, Command::InOrder);
    assert_eq!(Command::parse("4")?, Command::Show);
    assert_eq!(Command::parse("outline")?, Command::Outline);
    assert_eq!(Command::parse("?")?, Command::Help);
    assert_eq!(Command::parse("5")?, Command::Quit);
    assert_eq!(Command::parse("exit")?, Command::Quit);
    Ok(())
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(
        Command::parse("frobnicate"),
        Err(ShellError::UnknownCommand(word)) if word == "frobnicate"
    ));
    assert!(matches!(
        Command::parse("insert"),
        Err(ShellError::MissingKey(word)) if word == "insert"
    ));
    assert!(matches!(
        Command::parse("1 ten"),
        Err(ShellError::InvalidKey(arg)) if arg == "ten"
    ));
}

#[test]
fn execute_reports_outcomes() -> ShellResult<()> {
    let mut shell = Shell::new(quiet_config());
    let mut out = Vec::new();

    assert_eq!(shell.execute(Command::Insert(3), &mut out)?, Flow::Continue);
    shell.execute(Command::Insert(3), &mut out)?;
    shell.execute(Command::Delete(4), &mut out)?;
    shell.execute(Command::Delete(3), &mut out)?;

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "inserted 3\n3 already present\n4 not found\nremoved 3\n"
    );
    assert!(shell.tree().is_empty());
    Ok(())
}

#[test]
fn quit_releases_the_tree() -> ShellResult<()> {
    let mut shell = Shell::new(ShellConfig {
        preload: vec![9, 5, 10],
        ..quiet_config()
    });
    assert_eq!(shell.tree().len(), 3);

    let mut out = Vec::new();
    assert_eq!(shell.execute(Command::Quit, &mut out)?, Flow::Quit);
    assert!(shell.tree().is_empty());
    Ok(())
}

#[test]
fn run_processes_a_script() -> ShellResult<()> {
    let script = "1 10\n1 20\n\n1 30\n3\nbogus\n4\n5\n1 99\n";
    let mut shell = Shell::new(ShellConfig {
        indent: 2,
        ..quiet_config()
    });
    let mut out = Vec::new();
    shell.run(Cursor::new(script), &mut out)?;

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "inserted 10\n\
         inserted 20\n\
         inserted 30\n\
         10 20 30\n\
         unknown command `bogus`, type `help` for the list of commands\n\
         \n  30\n\n20\n\n  10\n\
         bye\n"
    );
    assert!(!shell.tree().contains(&99));
    Ok(())
}

#[test]
fn run_stops_at_end_of_input_and_echoes() -> ShellResult<()> {
    let mut shell = Shell::new(ShellConfig {
        prompt: "> ".to_string(),
        echo: true,
        menu: false,
        ..ShellConfig::default()
    });
    let mut out = Vec::new();
    shell.run(Cursor::new("i 1\n"), &mut out)?;

    assert_eq!(String::from_utf8(out).unwrap(), "> i 1\ninserted 1\n> ");
    assert_eq!(shell.tree().in_order(), vec![1]);
    Ok(())
}

#[test]
fn run_asks_for_a_missing_key() -> ShellResult<()> {
    let mut shell = Shell::new(quiet_config());
    let mut out = Vec::new();
    shell.run(Cursor::new("1\n42\n2\nforty\n2\n"), &mut out)?;

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "key: inserted 42\n\
         key: `forty` is not a valid key\n\
         key: "
    );
    assert_eq!(shell.tree().in_order(), vec![42]);
    Ok(())
}

#[test]
fn run_prints_the_menu_once() -> ShellResult<()> {
    let mut shell = Shell::new(ShellConfig {
        prompt: String::new(),
        ..ShellConfig::default()
    });
    let mut out = Vec::new();
    shell.run(Cursor::new("3\n3\n"), &mut out)?;

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Commands:\n"));
    assert_eq!(out.matches("Commands:").count(), 1);
    assert!(out.ends_with("\n\n"));
    Ok(())
}
