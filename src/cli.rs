use crate::ability::format_ability_description;
use crate::config::Config;
use crate::data::adapter::adapt_ability;
use crate::data::loader::read_set_file;
use crate::data::validate::validate_set_file;
use crate::server;

const USAGE: &str = "usage: sft <serve|validate [path]|render <path> <champion>>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Validate,
    Render,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("validate") => Some(Command::Validate),
        Some("render") => Some(Command::Render),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Render) => handle_render(args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

fn handle_serve() -> i32 {
    match server::run_server(Config::load()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| Config::load().set_data_path);

    let report = match validate_set_file(&path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(payload) => println!("{payload}"),
        Err(err) => {
            eprintln!("failed to serialize validation report: {err}");
            return 1;
        }
    }

    if report.has_errors() {
        1
    } else {
        0
    }
}

fn handle_render(args: &[String]) -> i32 {
    let (Some(path), Some(champion)) = (args.get(2), args.get(3)) else {
        eprintln!("usage: sft render <path-to-set.json> <champion>");
        return 2;
    };

    let set = match read_set_file(path) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("render failed: {err}");
            return 1;
        }
    };

    let wanted = champion.trim();
    let Some(found) = set.champions.iter().find(|c| {
        c.name
            .as_deref()
            .is_some_and(|name| name.trim().eq_ignore_ascii_case(wanted))
    }) else {
        eprintln!("champion not found: {wanted}");
        return 2;
    };

    println!("{}", format_ability_description(&adapt_ability(&found.ability, None)));
    0
}
