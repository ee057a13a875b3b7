use std::io::Write;

use anyhow::Result;
use clap::Parser;
use colored::*;
use env_logger::{Builder, Env};
use log::debug;

use reknit::pattern::{ComplexPattern, Monomer, SpeciesPattern, pattern};
use reknit::rules::{Model, cleave_dimer, kvals};

/// Assemble the fluorescent biosensor cleavage fragment of the apoptosis
/// model and print the generated rules. Each sensor is a homodimer joined
/// through its sensitive linker; its effector caspase binds the first
/// subunit and cleaves the linker, releasing two free monomers.
#[derive(Debug, Parser)]
#[command(name = "rk-biosensors")]
#[command(version, about = "Generate the biosensor cleavage rule set")]
struct Cli {
    /// Only generate rules for this sensor (BFP, Cit, mKate).
    #[arg(long)]
    sensor: Option<String>,

    /// Dump each generated rule set as JSON instead of plain rules.
    #[arg(long)]
    json: bool,
}

// Forward rates are halved: the dimer offers two enzyme binding sites,
// which would otherwise double the effective rate.
fn sensor_cleavers() -> Vec<(&'static str, SpeciesPattern, [f64; 3])> {
    let c3 = Monomer::with_states("C3", &["bf", "state"], &[("state", &["pro", "A", "ub"])]);
    let c8 = Monomer::with_states("C8", &["bf", "state"], &[("state", &["pro", "A"])]);
    let apop = Monomer::new("Apop", &["bf"]);

    vec![
        ("BFP", pattern(&c3).state("state", "A").unwrap().into(), [1e-6 / 2., 1e-2, 1.]),
        ("Cit", pattern(&apop).free("bf").unwrap().into(), [5e-9 / 2., 1e-3, 1.]),
        ("mKate", pattern(&c8).state("state", "A").unwrap().into(), [1e-7 / 2., 1e-3, 1.]),
    ]
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
    let cli = Cli::parse();

    let mut model = Model::new();
    for (name, cleaver, [kf, kr, kc]) in sensor_cleavers() {
        if let Some(only) = &cli.sensor {
            if only != name {
                continue;
            }
        }
        debug!("generating cleavage rules for {}", name);

        let sensor = Monomer::new(name, &["sl", "bf"]);
        let dimer = ComplexPattern::single(pattern(&sensor).bound("sl", 1)?.free("bf")?)
            .join(pattern(&sensor).bound("sl", 1)?.free("bf")?);

        let set = cleave_dimer(&cleaver, "bf", &dimer.into(), "bf", "sl", &kvals(kf, kr, kc))?;

        if cli.json {
            println!("{}", set.to_json()?);
        } else {
            println!("{}", name.yellow());
            for rule in set.rules() {
                println!("  {}", rule);
            }
            for param in set.parameters() {
                println!("  {}", param.to_string().cyan());
            }
        }
        model.absorb(set);
    }

    if !cli.json {
        println!("{}", format!("model total: {} rules, {} parameters",
            model.rules().len(), model.parameters().len()).green());
    }
    Ok(())
}
