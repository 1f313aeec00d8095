use {
    chrono::NaiveDateTime,
    clap::{crate_description, crate_version, App, Arg, ArgMatches},
    congestion_toll::{calculator, TollError, VehicleClass},
    log::*,
    serde::{Deserialize, Serialize},
    std::fmt,
    thiserror::Error,
};

/// Accepted passage timestamp layouts, tried in order.
pub const PASSAGE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Passages charged by `--demo`: a car on Thursday 2023-06-22.
pub const DEMO_PASSAGES: [&str; 5] = [
    "2023-06-22 06:15",
    "2023-06-22 06:17",
    "2023-06-22 06:32",
    "2023-06-22 06:34",
    "2023-06-22 06:30",
];

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Toll(#[from] TollError),

    #[error("Invalid passage {0:?}: expected YYYY-MM-DD HH:MM[:SS]")]
    InvalidPassage(String),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Display,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TollCommand {
    pub vehicle_tag: String,
    pub passages: Vec<NaiveDateTime>,
    pub output: OutputFormat,
    pub strict: bool,
    pub verbose: bool,
}

// ── Output Structs ──────────────────────────────────────────────────
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CliTollFee {
    pub vehicle: String,
    pub passages: usize,
    pub fee: u64,
}

impl fmt::Display for CliTollFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total toll fee for the vehicle is: {}", self.fee)
    }
}

// ── Argument Definition (clap) ──────────────────────────────────────
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("toll-fee")
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::with_name("vehicle")
                .long("vehicle")
                .short("t")
                .value_name("CLASS")
                .takes_value(true)
                .default_value("car")
                .help(
                    "Vehicle class: car, motorbike, tractor, emergency, diplomat, \
                     foreign or military",
                ),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("FORMAT")
                .takes_value(true)
                .possible_values(&["display", "json"])
                .default_value("display")
                .help("Output format"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Reject passages that are out of order or span more than one day"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Log every window decision"),
        )
        .arg(
            Arg::with_name("demo")
                .long("demo")
                .conflicts_with("passage")
                .help("Charge the built-in example day instead of PASSAGE values"),
        )
        .arg(
            Arg::with_name("passage")
                .value_name("PASSAGE")
                .multiple(true)
                .index(1)
                .required_unless("demo")
                .help("Passage time, YYYY-MM-DD HH:MM[:SS]"),
        )
}

// ── Argument Parsing ────────────────────────────────────────────────
pub fn parse_command(matches: &ArgMatches<'_>) -> Result<TollCommand, CliError> {
    let passages = if matches.is_present("demo") {
        DEMO_PASSAGES
            .iter()
            .map(|value| parse_passage(value))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        matches
            .values_of("passage")
            .into_iter()
            .flatten()
            .map(parse_passage)
            .collect::<Result<Vec<_>, _>>()?
    };
    let output = match matches.value_of("output") {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Display,
    };
    Ok(TollCommand {
        vehicle_tag: matches.value_of("vehicle").unwrap_or_default().to_string(),
        passages,
        output,
        strict: matches.is_present("strict"),
        verbose: matches.is_present("verbose"),
    })
}

pub fn parse_passage(value: &str) -> Result<NaiveDateTime, CliError> {
    let value = value.trim();
    PASSAGE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| CliError::InvalidPassage(value.to_string()))
}

// ── Command Processing ──────────────────────────────────────────────
pub fn process_command(command: &TollCommand) -> Result<String, CliError> {
    if command.strict {
        let vehicle = command.vehicle_tag.parse::<VehicleClass>()?;
        let toll = calculator::calculate_daily_toll(vehicle, &command.passages)?;
        info!("{} owes {} for {}", toll.vehicle, toll.fee, toll.date);
        return Ok(match command.output {
            OutputFormat::Display => toll.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(&toll)?,
        });
    }

    let fee = calculator::calculate_daily_fee_for_tag(&command.vehicle_tag, &command.passages)?;
    let result = CliTollFee {
        vehicle: command.vehicle_tag.trim().to_ascii_lowercase(),
        passages: command.passages.len(),
        fee,
    };
    info!("{} owes {} for {} passages", result.vehicle, fee, result.passages);
    Ok(match command.output {
        OutputFormat::Display => result.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    })
}
