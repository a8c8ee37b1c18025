use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("npe")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Command line interface to inspect NuGet packages")
        .arg(clap::Arg::from_usage("-d --debug 'Enable debug output'").global(true))
        .arg(
            clap::Arg::from_usage("-p, --path [path] 'Path to the .nupkg package file'")
                .global(true),
        )
        .subcommand(
            clap::SubCommand::with_name("show")
                .about("Display package information")
                .subcommand(
                    clap::SubCommand::with_name("contents")
                        .about("Show the package content tree"),
                )
                .subcommand(
                    clap::SubCommand::with_name("metadata")
                        .about("Show the package manifest metadata"),
                )
                .subcommand(
                    clap::SubCommand::with_name("dependencies")
                        .about("Show the package dependency groups"),
                )
                .subcommand(
                    clap::SubCommand::with_name("nuspec")
                        .about("Show the raw package manifest XML"),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("extract")
                .about("Extract a file from the package")
                .arg(
                    clap::Arg::from_usage(
                        "--file <file_path_in_package> 'Path of the file within the package'",
                    )
                    .required(true),
                )
                .arg(
                    clap::Arg::from_usage(
                        "--destination <output_path> 'File path or folder to extract into'",
                    )
                    .required(true),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("locate")
                .about("Find an installed package archive on disk")
                .arg(clap::Arg::from_usage("--id <id> 'Package id'").required(true))
                .arg(
                    clap::Arg::from_usage(
                        "--version <version> 'Package version or version range'",
                    )
                    .required(true),
                )
                .arg(clap::Arg::from_usage(
                    "--packages-dir [dir] 'Solution packages folder to search as well'",
                )),
        )
        .get_matches()
}
