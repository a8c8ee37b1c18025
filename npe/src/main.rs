extern crate npe;

use npe::error::Error;

fn main() -> Result<(), Error> {
    let matches = npe::cli::parse_flags();

    npe::utils::initialize_debug_from_args(&matches);

    match matches.subcommand() {
        ("show", Some(cmd)) => {
            let path = require_package_path(&matches)?;
            match cmd.subcommand() {
                ("contents", Some(_)) => npe::contents::show(&path)?,
                ("metadata", Some(_)) => npe::metadata::show(&path)?,
                ("dependencies", Some(_)) => npe::metadata::show_dependencies(&path)?,
                ("nuspec", Some(_)) => npe::metadata::show_nuspec(&path)?,
                _ => println!("Invalid 'show' subcommand. Use --help for details."),
            }
        }
        ("extract", Some(cmd)) => {
            let path = require_package_path(&matches)?;
            npe::extract::run(
                &path,
                cmd.value_of("file").unwrap(),
                cmd.value_of("destination").unwrap(),
            )?;
        }
        ("locate", Some(cmd)) => {
            npe::locate::run(
                cmd.value_of("id").unwrap(),
                cmd.value_of("version").unwrap(),
                cmd.value_of("packages-dir"),
            )?;
        }
        _ => {
            println!("No command specified or unknown command. Use --help for available commands.");
        }
    }
    Ok(())
}

fn require_package_path(matches: &clap::ArgMatches) -> Result<String, Error> {
    let path = matches
        .value_of("path")
        .ok_or_else(|| Error::CliInputError("Path to a .nupkg file is required.".to_string()))?;
    if !nupkg::package::is_package_path(path) {
        return Err(Error::NotAPackage(path.to_string()));
    }
    Ok(path.to_string())
}
