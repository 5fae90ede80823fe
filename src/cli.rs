//! Command-line front end: builds a field configuration from flags and/or a
//! YAML file, then types input through a [`PhoneField`].

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use phonemask::{DigitMode, FieldConfig, PhoneField, SegmentConfig, ValidationResult, build_template};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phonemask")]
#[command(about = "Mask phone numbers the way a masked input field would")]
#[command(
    long_about = "Types input one character at a time into a masked phone field and prints \
the resulting text.\n\n\
Templates use 9 for a digit, a for a letter and # for any character; everything \
else is a literal.\n\n\
Environment Variables:\n\
  RUST_LOG          Log filter (e.g. RUST_LOG=phonemask=debug)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML field configuration; flags below override it
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Segments to include, comma separated
    #[arg(
        short = 'f',
        long,
        global = true,
        value_delimiter = ',',
        conflicts_with = "bits"
    )]
    pub fields: Option<Vec<Segment>>,

    /// Segments as a bitmask (1 = subscriber, 2 = local, 4 = country)
    #[arg(short = 'b', long, global = true)]
    pub bits: Option<u8>,

    /// Subscriber digit count: auto, fixed8 or fixed9
    #[arg(short = 'd', long, global = true)]
    pub digits: Option<DigitMode>,

    /// Skip the completeness check on field exit
    #[arg(long, global = true)]
    pub no_validate: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Segment {
    Country,
    Local,
    Subscriber,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type INPUT into a phone field and print the masked text
    Mask {
        input: String,
        /// Print the field after every typed character
        #[arg(long)]
        steps: bool,
        /// Leave the field afterwards and report validation
        #[arg(long)]
        blur: bool,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show the templates for the current configuration
    Template,
    /// Print the JSON schema of the YAML configuration
    Schema,
}

struct TypedStep {
    typed: char,
    accepted: bool,
    text: String,
    template: String,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();
    let config = resolve_config(&args)?;

    match args.command {
        Commands::Mask {
            input,
            steps,
            blur,
            json,
        } => run_mask(config, input.as_str(), steps, blur, json),
        Commands::Template => {
            print_templates(config);
            Ok(())
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(FieldConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: &Args) -> Result<FieldConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => FieldConfig::default(),
    };

    if let Some(fields) = &args.fields {
        let mut segments = SegmentConfig::none();
        for field in fields {
            match field {
                Segment::Country => segments.with_country = true,
                Segment::Local => segments.with_local = true,
                Segment::Subscriber => segments.with_subscriber = true,
            }
        }
        config.segments = segments;
    }
    if let Some(bits) = args.bits {
        config.segments = SegmentConfig::from_bits(bits);
    }
    if let Some(digits) = args.digits {
        config.digit_mode = digits;
    }
    if args.no_validate {
        config = config.with_validate_on_exit(false);
    }
    Ok(config)
}

/// Reads a YAML field configuration; missing keys take their defaults.
fn load_config(path: &Path) -> phonemask::Result<FieldConfig> {
    let source = std::fs::read_to_string(path)?;
    parse_config(source.as_str())
}

fn parse_config(source: &str) -> phonemask::Result<FieldConfig> {
    let config: FieldConfig = serde_yaml::from_str(source)?;
    Ok(config.normalized())
}

fn run_mask(
    config: FieldConfig,
    input: &str,
    show_steps: bool,
    blur: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut field = PhoneField::new(config);
    let mut steps = Vec::new();
    for ch in input.chars() {
        let accepted = field.insert_char(ch);
        steps.push(TypedStep {
            typed: ch,
            accepted,
            text: field.text().to_string(),
            template: field.template().to_string(),
        });
    }

    let text = field.text().to_string();
    let unmasked = field.unmasked_text();
    let template = field.template().to_string();
    let complete = field.is_complete();
    let validation = blur.then(|| field.blur());

    if json {
        let mut out = serde_json::json!({
            "text": text,
            "unmasked": unmasked,
            "template": template,
            "complete": complete,
        });
        if show_steps {
            out["steps"] = serde_json::Value::Array(
                steps
                    .iter()
                    .map(|step| {
                        serde_json::json!({
                            "typed": step.typed.to_string(),
                            "accepted": step.accepted,
                            "text": step.text,
                            "template": step.template,
                        })
                    })
                    .collect(),
            );
        }
        if let Some(result) = &validation {
            out["valid"] = serde_json::json!(result.is_valid());
            if let ValidationResult::Invalid { message } = result {
                out["error"] = serde_json::json!(message);
            }
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if show_steps {
            for step in &steps {
                let marker = if step.accepted { ' ' } else { '!' };
                println!(
                    "{marker} {:?} -> {:<20} [{}]",
                    step.typed, step.text, step.template
                );
            }
        }
        println!("{text}");
    }

    if let Some(ValidationResult::Invalid { message }) = validation {
        eprintln!("{message}");
        std::process::exit(1);
    }
    Ok(())
}

fn print_templates(config: FieldConfig) {
    let field = PhoneField::new(config);
    let engine = field.engine();
    let segments = engine.config().segments;
    println!("active:      {}", engine.template());
    println!("eight-digit: {}", build_template(segments, false));
    println!("nine-digit:  {}", build_template(segments, true));
    println!("digit mode:  {:?}", engine.config().digit_mode);
    println!("threshold:   {}", engine.auto_change_threshold());
    match engine.input_limit() {
        Some(limit) => println!("input limit: {limit}"),
        None => println!("input limit: none (masking disabled)"),
    }
}
