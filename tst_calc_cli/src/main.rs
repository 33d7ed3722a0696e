use clap::{Parser, Subcommand};
use log::debug;
use std::process::ExitCode;
use tst_calc::{
    io::{read_form_json, write_form_json},
    orientation::Orientation,
    solve, Field, FormValues, ReportConfig, TstForm, TstInput, TstSolution,
};

fn print_solution(sol: &TstSolution) {
    let d = sol.displacement;
    println!("Displacement: {:.3},{:.3},{:.3}", d.dx, d.dy, d.dz);
    println!("Horizontal distance: {:.3}", sol.horizontal_distance);
    println!("Slope distance: {:.3}", sol.slope_distance);
    match (sol.bearing, sol.apparent_dip) {
        (Some(bearing), Some(apparent)) => {
            println!("Bearing: {:.3}", bearing);
            println!("Apparent dip: {:.3}", apparent);
        }
        _ => println!("Bearing: vertical"),
    }
}

fn load_config(path: Option<&str>) -> Result<ReportConfig, ExitCode> {
    match path {
        Some(path) => ReportConfig::load(path).map_err(|e| {
            eprintln!("Error reading {}: {}", path, e);
            ExitCode::FAILURE
        }),
        None => Ok(ReportConfig::default()),
    }
}

fn report_form(form: &TstForm) -> ExitCode {
    println!("{}", form.message());
    if form.thickness().is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Raw text for each form field, exactly as typed.
#[derive(clap::Args)]
struct FormArgs {
    #[arg(long, allow_hyphen_values = true)]
    strike: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    dip: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    x1: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    y1: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    z1: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    x2: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    y2: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    z2: Option<String>,
    /// Set a field by name, e.g. `--set dip=30`. Applied after the flags above.
    #[arg(long = "set", value_name = "FIELD=TEXT", allow_hyphen_values = true)]
    assignments: Vec<String>,
}

impl FormArgs {
    fn into_values(self) -> Result<FormValues, String> {
        let texts = [
            self.strike,
            self.dip,
            self.x1,
            self.y1,
            self.z1,
            self.x2,
            self.y2,
            self.z2,
        ];
        let mut values = FormValues::default();
        for (field, text) in Field::ALL.into_iter().zip(texts) {
            values.set(field, text.unwrap_or_default());
        }
        for assignment in &self.assignments {
            let (name, text) = assignment
                .split_once('=')
                .ok_or_else(|| format!("expected FIELD=TEXT, got {}", assignment))?;
            let field: Field = name.trim().parse()?;
            values.set(field, text);
        }
        Ok(values)
    }
}

/// Command line interface for true stratigraphic thickness calculations.
#[derive(Parser)]
#[command(name = "tst_calc_cli", version)]
struct Cli {
    /// JSON file with report settings (unit label, decimals)
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the true stratigraphic thickness between two points.
    #[command(allow_negative_numbers = true)]
    Compute {
        strike: f64,
        dip: f64,
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
        /// Also print intermediate values.
        #[arg(long)]
        verbose: bool,
    },
    /// Evaluate raw field text the way the input form does.
    Form {
        #[command(flatten)]
        fields: FormArgs,
        /// Save the raw field text to a JSON file.
        #[arg(long)]
        save: Option<String>,
    },
    /// Evaluate a form saved as JSON.
    LoadForm { path: String },
    /// Compute the apparent dip (degrees) along a bearing (degrees).
    #[command(allow_negative_numbers = true)]
    ApparentDip { strike: f64, dip: f64, bearing: f64 },
    /// Write the default report settings to a JSON file.
    WriteConfig { path: String },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };
    debug!("report config {:?}", config);
    match cli.command {
        Commands::Compute {
            strike,
            dip,
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            verbose,
        } => match TstInput::from_values(strike, dip, x1, y1, z1, x2, y2, z2) {
            Ok(input) => {
                let sol = solve(input.orientation, input.point1, input.point2);
                if verbose {
                    print_solution(&sol);
                }
                println!("{}", config.format_thickness(sol.thickness));
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("{}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Form { fields, save } => {
            let values = match fields.into_values() {
                Ok(values) => values,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            if let Some(path) = save {
                match write_form_json(&path, &values) {
                    Ok(()) => println!("Wrote {}", path),
                    Err(e) => {
                        eprintln!("Error writing {}: {}", path, e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            report_form(&TstForm::from_values(values, config))
        }
        Commands::LoadForm { path } => match read_form_json(&path) {
            Ok(values) => report_form(&TstForm::from_values(values, config)),
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                ExitCode::FAILURE
            }
        },
        Commands::ApparentDip {
            strike,
            dip,
            bearing,
        } => {
            let apparent = Orientation::new(strike, dip).apparent_dip(bearing.to_radians());
            println!("Apparent dip: {:.3}", apparent.to_degrees());
            ExitCode::SUCCESS
        }
        Commands::WriteConfig { path } => match config.save(&path) {
            Ok(()) => {
                println!("Wrote {}", path);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error writing {}: {}", path, e);
                ExitCode::FAILURE
            }
        },
    }
}
