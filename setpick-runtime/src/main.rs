use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use setpick_challenges::problem_set::GeneratorSettings;
use setpick_runtime::*;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("setpick")
        .about("Picks the cheapest set of problems that reaches a points threshold")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Log to stderr; repeat for more detail")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves an instance and prints the chosen problem ids")
                .arg(
                    arg!(<INSTANCE> "Path to instance file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Search config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print the solution, its cost key and search statistics as json")),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Checks a solution against an instance and prints its cost key")
                .arg(
                    arg!(<INSTANCE> "Path to instance file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Space separated ids, @path to a file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Search config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("validate_instance")
                .about("Strictly checks the format and bounds of an instance")
                .arg(
                    arg!(<INSTANCE> "Path to instance file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Prints a random instance")
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"min-items" [MIN_ITEMS] "Fewest problems to generate")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"max-items" [MAX_ITEMS] "Most problems to generate")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve_command(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_flag("json"),
        ),
        Some(("verify_solution", sub_m)) => verify_command(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
        ),
        Some(("validate_instance", sub_m)) => {
            validate_command(sub_m.get_one::<String>("INSTANCE").unwrap().clone())
        }
        Some(("generate_instance", sub_m)) => generate_command(
            sub_m.get_one::<String>("SEED").unwrap().clone(),
            sub_m.get_one::<usize>("min-items").cloned(),
            sub_m.get_one::<usize>("max-items").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve_command(instance: String, config: Option<String>, json: bool) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let text = load_text(&instance)?;
    let report = solve(&text, &config)?;
    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.answer);
    }
    Ok(())
}

fn verify_command(instance: String, solution: String, config: Option<String>) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let solution = load_solution(&solution)?;
    let text = load_text(&instance)?;
    let key = verify(&text, &solution, &config)?;
    println!("Solution is valid");
    println!("{}", key);
    Ok(())
}

fn validate_command(instance: String) -> Result<()> {
    let text = load_text(&instance)?;
    validate(&text)?;
    println!("Instance is valid");
    Ok(())
}

fn generate_command(seed: String, min_items: Option<usize>, max_items: Option<usize>) -> Result<()> {
    let mut settings = GeneratorSettings::default();
    if let Some(min_items) = min_items {
        settings.min_items = min_items;
    }
    if let Some(max_items) = max_items {
        settings.max_items = max_items;
    }
    print!("{}", generate(&seed, &settings)?);
    Ok(())
}
