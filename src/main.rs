use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("install")
                .about("Copies a package's release items into the project root")
                .arg(
                    Arg::new("package-dir")
                        .help("directory where the package's code was installed")
                        .required(true),
                )
                .arg(
                    Arg::new("destination")
                        .help("project root receiving the release items (defaults to the working directory)")
                        .short('d')
                        .long("destination"),
                ),
        )
        .subcommand(
            Command::new("supports")
                .about("Checks whether a package type activates this installer")
                .arg(Arg::new("type").help("package type string").required(true)),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("install", args)) => handle_install(args),
        Some(("supports", args)) => handle_supports(args),
        _ => unreachable!(),
    }
}

fn init_logging(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn handle_install(args: &ArgMatches) -> miette::Result<()> {
    let package_dir = args
        .get_one::<String>("package-dir")
        .expect("package-dir required");

    let destination = match args.get_one::<String>("destination") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().into_diagnostic()?,
    };

    puphpet_release::api::install_package(Path::new(package_dir), &destination)?;

    Ok(())
}

fn handle_supports(args: &ArgMatches) -> miette::Result<()> {
    let package_type = args.get_one::<String>("type").expect("type required");

    let supported = puphpet_release::api::supports(package_type);

    println!("{}", if supported { "supported" } else { "unsupported" });

    if !supported {
        std::process::exit(1);
    }

    Ok(())
}
