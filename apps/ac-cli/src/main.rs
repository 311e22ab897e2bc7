use std::error::Error;
use std::path::{Path, PathBuf};

use ac_air::PropertyKey;
use ac_cycle::{
    Basis, CurveBuilder, CycleInputs, CycleResult, DieselCycle, OttoCycle, UnitConverter,
    UnitSystem,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ac-cli")]
#[command(about = "aircycle CLI - air-standard Otto/Diesel cycle analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a cycle and print states and energy terms
    Solve {
        #[command(flatten)]
        inputs: InputArgs,
        /// Basis for extensive outputs
        #[arg(long, value_enum, default_value_t = BasisArg::Molar)]
        basis: BasisArg,
        /// Emit the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Export the plotting curves of a solved cycle as CSV
    Curve {
        #[command(flatten)]
        inputs: InputArgs,
        /// Abscissa property (one of P, T, v, u, h, s)
        #[arg(short = 'x', long, default_value = "v")]
        x: String,
        /// Ordinate property (one of P, T, v, u, h, s)
        #[arg(short = 'y', long, default_value = "P")]
        y: String,
        /// Samples per process leg
        #[arg(long, default_value_t = 30)]
        points: usize,
        /// Basis for extensive outputs
        #[arg(long, value_enum, default_value_t = BasisArg::Molar)]
        basis: BasisArg,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Cycle variant
    #[arg(long, value_enum)]
    cycle: CycleKind,
    /// Initial pressure (Pa, or psia with --units english)
    #[arg(long)]
    p0: f64,
    /// Initial temperature (K, or °R with --units english)
    #[arg(long)]
    t0: f64,
    /// Cylinder volume (m³, or ft³ with --units english)
    #[arg(long)]
    v0: f64,
    /// Peak temperature (K, or °R with --units english)
    #[arg(long)]
    t_high: f64,
    /// Compression ratio V1/V2
    #[arg(long)]
    cr: f64,
    /// Unit system for inputs and outputs
    #[arg(long, value_enum, default_value_t = UnitsArg::Si)]
    units: UnitsArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum CycleKind {
    Otto,
    Diesel,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Si,
    English,
}

#[derive(Clone, Copy, ValueEnum)]
enum BasisArg {
    Molar,
    Mass,
    Total,
}

impl From<UnitsArg> for UnitSystem {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Si => UnitSystem::Si,
            UnitsArg::English => UnitSystem::English,
        }
    }
}

impl From<BasisArg> for Basis {
    fn from(value: BasisArg) -> Self {
        match value {
            BasisArg::Molar => Basis::Molar,
            BasisArg::Mass => Basis::PerMass,
            BasisArg::Total => Basis::Total,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            inputs,
            basis,
            json,
        } => cmd_solve(&inputs, basis.into(), json),
        Commands::Curve {
            inputs,
            x,
            y,
            points,
            basis,
            output,
        } => cmd_curve(&inputs, &x, &y, points, basis.into(), output.as_deref()),
    }
}

/// Convert CLI inputs to SI and run the selected sequencer.
fn solve_cycle(args: &InputArgs, points: usize) -> Result<CycleResult, Box<dyn Error>> {
    let converter = UnitConverter::new(args.units.into());
    let inputs = CycleInputs::from_si(
        converter.pressure_to_si(args.p0),
        converter.temperature_to_si(args.t0),
        converter.volume_to_si(args.v0),
        converter.temperature_to_si(args.t_high),
        args.cr,
    )?;

    let curves = CurveBuilder::new(points)?;
    let result = match args.cycle {
        CycleKind::Otto => OttoCycle::new().with_curve_builder(curves).solve(&inputs)?,
        CycleKind::Diesel => DieselCycle::new()
            .with_curve_builder(curves)
            .solve(&inputs)?,
    };
    Ok(result)
}

fn cmd_solve(args: &InputArgs, basis: Basis, json: bool) -> Result<(), Box<dyn Error>> {
    let result = solve_cycle(args, 30)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let converter = UnitConverter::new(args.units.into());
    let n = result.moles_kmol;

    println!("{}", result.name);
    println!(
        "  Working fluid: {:.5} {} ({:.4} {})",
        converter.amount(result.moles_kmol),
        converter.amount_label(),
        converter.mass(result.mass_kg),
        converter.mass_label(),
    );

    println!("\nStates:");
    println!(
        "  {:<5} {:>12} {:>14} {:>14} {:>16}",
        "name",
        format!("T [{}]", converter.property_label(PropertyKey::Temperature, basis)),
        format!("P [{}]", converter.property_label(PropertyKey::Pressure, basis)),
        format!("v [{}]", converter.property_label(PropertyKey::MolarVolume, basis)),
        format!("s [{}]", converter.property_label(PropertyKey::Entropy, basis)),
    );
    for state in &result.states {
        println!(
            "  {:<5} {:>12.2} {:>14.1} {:>14.5} {:>16.3}",
            state.name,
            converter.convert(state.temperature, PropertyKey::Temperature, basis, n),
            converter.convert(state.pressure, PropertyKey::Pressure, basis, n),
            converter.convert(state.molar_volume, PropertyKey::MolarVolume, basis, n),
            converter.convert(state.entropy, PropertyKey::Entropy, basis, n),
        );
    }

    let e = &result.energy;
    let energy_label = converter.property_label(PropertyKey::InternalEnergy, basis);
    println!("\nEnergy balance:");
    println!(
        "  Compression work: {:>14.3} {}",
        converter.convert(e.compression_work, PropertyKey::InternalEnergy, basis, n),
        energy_label
    );
    println!(
        "  Power work:       {:>14.3} {}",
        converter.convert(e.power_work, PropertyKey::InternalEnergy, basis, n),
        energy_label
    );
    println!(
        "  Net work:         {:>14.3} {}",
        converter.convert(e.net_work, PropertyKey::InternalEnergy, basis, n),
        energy_label
    );
    println!(
        "  Heat added:       {:>14.3} {}",
        converter.convert(e.heat_added, PropertyKey::InternalEnergy, basis, n),
        energy_label
    );
    println!(
        "  Heat rejected:    {:>14.3} {}",
        converter.convert(e.heat_rejected, PropertyKey::InternalEnergy, basis, n),
        energy_label
    );
    if let Some(cutoff) = e.cutoff_ratio {
        println!("  Cut-off ratio:    {:>14.4}", cutoff);
    }
    println!("  Efficiency:       {:>14.3} %", e.efficiency_pct);

    Ok(())
}

fn cmd_curve(
    args: &InputArgs,
    x: &str,
    y: &str,
    points: usize,
    basis: Basis,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let x_key: PropertyKey = x.parse()?;
    let y_key: PropertyKey = y.parse()?;
    if x_key == y_key {
        return Err("abscissa and ordinate must differ".into());
    }

    let result = solve_cycle(args, points)?;
    let converter = UnitConverter::new(args.units.into());
    let n = result.moles_kmol;

    // Build CSV
    let mut csv = format!(
        "branch,{} [{}],{} [{}]\n",
        x_key,
        converter.property_label(x_key, basis),
        y_key,
        converter.property_label(y_key, basis),
    );
    for (label, curve) in [("lower", &result.lower_curve), ("upper", &result.upper_curve)] {
        let xs = converter.convert_column(&curve.column(x_key), x_key, basis, n);
        let ys = converter.convert_column(&curve.column(y_key), y_key, basis, n);
        for (xv, yv) in xs.iter().zip(ys.iter()) {
            csv.push_str(&format!("{label},{xv},{yv}\n"));
        }
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} curve points to {}",
            result.lower_curve.len() + result.upper_curve.len(),
            path.display()
        );
    } else {
        print!("{csv}");
    }

    Ok(())
}
