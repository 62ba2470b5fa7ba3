use printfarm_core::core::StartupError;
use printfarm_core::{QuoteJob, compute_quote, load_snapshot, setup_environment};

fn parse_arg(args: &[String], index: usize, name: &'static str) -> Result<f64, StartupError> {
    let raw = args.get(index).ok_or(StartupError::Usage)?;
    raw.parse().map_err(|_| StartupError::InvalidArgument {
        name,
        value: raw.clone(),
    })
}

fn run() -> Result<(), StartupError> {
    // 1. Environment (dotenv, logging)
    let config = setup_environment();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        return Err(StartupError::Usage);
    }
    let job = QuoteJob {
        print_time_hours: parse_arg(&args, 0, "printTimeHours")?,
        material_weight_or_length: parse_arg(&args, 1, "materialWeightOrLength")?,
        quantity: parse_arg(&args, 2, "quantity")?,
    };

    // 2. Configuration snapshot
    let snapshot = load_snapshot(&config.snapshot_path)?;

    // 3. Quote
    let breakdown = compute_quote(&snapshot.costs, &job)?;
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        tracing::error!("{}", e);
        eprintln!("{e}");
        std::process::exit(match e {
            StartupError::Usage | StartupError::InvalidArgument { .. } => 2,
            _ => 1,
        });
    }
}
