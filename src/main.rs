// Bystander Generator - CLI
// Loads the data files and prints a handful of random bystanders

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

use bystander_gen::BystanderGenerator;

struct CliOptions {
    count: usize,
    seed: Option<u64>,
    json: bool,
    traits_csv: PathBuf,
    first_names_csv: PathBuf,
    characteristics_csv: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            count: 4,
            seed: None,
            json: false,
            traits_csv: PathBuf::from("data/traits.csv"),
            first_names_csv: PathBuf::from("data/first-names.csv"),
            characteristics_csv: PathBuf::from("data/physical.csv"),
        }
    }
}

fn parse_args() -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" | "-n" => {
                let value = args.next().context("--count needs a value")?;
                options.count = value.parse().context("--count must be a number")?;
            }
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                options.seed = Some(value.parse().context("--seed must be a number")?);
            }
            "--json" => options.json = true,
            "--traits" => {
                options.traits_csv = args.next().context("--traits needs a path")?.into();
            }
            "--names" => {
                options.first_names_csv = args.next().context("--names needs a path")?.into();
            }
            "--characteristics" => {
                options.characteristics_csv =
                    args.next().context("--characteristics needs a path")?.into();
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(options)
}

fn print_usage() {
    println!("bystander-gen - random tabletop bystander generator");
    println!();
    println!("Usage: bystander-gen [options]");
    println!("  --count, -n N          number of characters to generate (default 4)");
    println!("  --seed S               seed the rng for reproducible output");
    println!("  --json                 print characters as JSON");
    println!("  --traits PATH          trait csv (default data/traits.csv)");
    println!("  --names PATH           first-name csv (default data/first-names.csv)");
    println!("  --characteristics PATH physical csv (default data/physical.csv)");
}

fn main() -> Result<()> {
    let options = parse_args()?;

    println!("🎲 Bystander Generator v{}", bystander_gen::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let generator = BystanderGenerator::from_files(
        Some(&options.traits_csv),
        Some(&options.first_names_csv),
        Some(&options.characteristics_csv),
    )?;

    println!(
        "✓ Loaded {} traits, {} names, {} characteristics\n",
        generator.traits().len(),
        generator.names().len(),
        generator.characteristics().len()
    );

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for character in generator.iter_with(rng).take(options.count) {
        let character = character?;
        if options.json {
            println!("{}", serde_json::to_string_pretty(&character)?);
        } else {
            println!("{}", character);
        }
    }

    Ok(())
}
