use anyhow::Result;
use std::process::ExitCode;

use opn::{launcher, OpenCommand, SystemOpener};

use super::Session;

pub fn cmd_open(alias: Option<&str>) -> Result<ExitCode> {
    let Some(alias) = alias.filter(|a| !a.is_empty()) else {
        println!("No alias was given. Need help? Run: opn help");
        return Ok(ExitCode::SUCCESS);
    };

    let session = Session::load()?;
    let store = session.store()?;
    let opener = SystemOpener::new(OpenCommand::from_config(&session.config.open)?);

    let code = launcher::open_alias(&store, alias, &opener)?;
    if code != 0 {
        log::warn!("{} exited with status {code}", opener.command().program());
    }
    Ok(exit_code(code))
}

pub fn cmd_add(alias: Option<&str>, path: Option<&str>) -> Result<ExitCode> {
    let alias = alias.filter(|a| !a.is_empty());
    let path = path.filter(|p| !p.is_empty());
    let (Some(alias), Some(path)) = (alias, path) else {
        println!("Please give both an alias and a path, e.g. opn add notes ~/Documents/notes");
        return Ok(ExitCode::SUCCESS);
    };

    let session = Session::load()?;
    let store = session.store()?;
    launcher::add_alias(&store, alias, path, session.config.add.duplicates)?;
    println!("Saved {alias} -> {path}");
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_list(long: bool) -> Result<ExitCode> {
    let session = Session::load()?;
    let aliases = launcher::list_aliases(&session.store()?)?;

    if aliases.is_empty() {
        eprintln!("No aliases saved yet. Add one with: opn add <alias> <path>");
        return Ok(ExitCode::SUCCESS);
    }

    if long {
        for (name, target) in aliases.sorted() {
            println!("{name}={target}");
        }
    } else {
        for name in aliases.names() {
            println!("{name}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Exit codes outside 0..=255 cannot be passed through; report them as failure.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
