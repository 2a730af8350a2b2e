mod cli;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use scriptrun::config::Config;
use scriptrun::params;
use scriptrun::printer::TextPrinter;
use scriptrun::registry::Value;
use scriptrun::runner::ScriptRunner;
use scriptrun::script::{ScriptDefinition, ScriptSet};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    // Load config
    let cfg = Config::load();

    // Resolve scripts file: CLI overrides config; fall back to scripts.json
    let scripts_path = args
        .scripts_file
        .clone()
        .or_else(|| cfg.get_path("SCRIPTS_PATH"))
        .unwrap_or_else(|| PathBuf::from("scripts.json"));

    let set = ScriptSet::load(&scripts_path)?;

    if args.list_scripts {
        for name in set.scripts.keys() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Select definitions: all of them, or the requested subset in order
    let selected: Vec<&ScriptDefinition> = if args.script.is_empty() {
        set.scripts.values().collect()
    } else {
        args.script
            .iter()
            .map(|name| {
                set.scripts
                    .get(name)
                    .ok_or_else(|| anyhow!("script not found: {}", name))
            })
            .collect::<Result<_>>()?
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let names = cfg.sample_names();
    let printer = TextPrinter::from_config(&cfg, args.no_color);
    let runner = ScriptRunner::new();

    // Execute each script sequentially; any failure aborts the run.
    for definition in selected {
        definition.validate()?;

        let bindings = params::sample_bindings(&definition.name, &names, &mut rng);
        tracing::debug!(script = %definition.name, "executing");
        let result = runner.run(definition, &bindings).await?;

        // Only the greeting shape produces an output line.
        match result {
            Value::Greeting(greeting) => printer.print(&greeting.message),
            other => {
                tracing::debug!(script = %definition.name, result = ?other, "result is not a greeting")
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}
