//! tablebook CLI
//!
//! Renders the booking form, submits bookings and replays interaction
//! scripts from the command line.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use tablebook::{
    load_values, render_page, run_session, BookingField, BookingForm, BookingSink, JsonLinesSink,
    Notifier, RecordingNotifier, RecordingSink, SubmitOutcome, TracingNotifier, TracingSink,
    WriterNotifier,
};

/// Table booking form on the command line.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(
        long,
        value_enum,
        env = "TABLEBOOK_FORMAT",
        default_value_t = OutputFormat::Text,
        global = true
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the form as an HTML page.
    Render {
        /// JSON file with field values; a submit is attempted first.
        #[arg(long)]
        values: Option<PathBuf>,

        /// Print only the form fragment instead of a full page.
        #[arg(long)]
        fragment: bool,
    },

    /// Submit a booking.
    Submit(SubmitArgs),

    /// Replay interactions (`set`, `submit`, `errors`, ...) line by line.
    Session {
        /// Script file to read instead of stdin.
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SubmitArgs {
    /// JSON file with field values; flags below override it.
    #[arg(long)]
    values: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Date of the reservation (YYYY-MM-DD).
    #[arg(long)]
    date: Option<String>,

    /// Time of the reservation (HH:MM).
    #[arg(long)]
    time: Option<String>,

    /// Number of guests (1-20).
    #[arg(long)]
    guests: Option<String>,

    #[arg(long)]
    special_request: Option<String>,
}

impl SubmitArgs {
    fn values(&self) -> tablebook::Result<HashMap<String, String>> {
        let mut values = match &self.values {
            Some(path) => load_values(path)?,
            None => HashMap::new(),
        };

        let flags = [
            (BookingField::Name, &self.name),
            (BookingField::Email, &self.email),
            (BookingField::Date, &self.date),
            (BookingField::Time, &self.time),
            (BookingField::Guests, &self.guests),
            (BookingField::SpecialRequest, &self.special_request),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                values.insert(field.name().to_string(), value.clone());
            }
        }

        Ok(values)
    }
}

fn fill_form(values: &HashMap<String, String>) -> tablebook::Result<BookingForm> {
    let mut form = BookingForm::new();
    for (name, value) in values {
        form.set_value_by_name(name, value.as_str())?;
    }
    Ok(form)
}

fn collaborators(format: OutputFormat) -> (Box<dyn Notifier>, Box<dyn BookingSink>) {
    match format {
        OutputFormat::Text => (
            Box::new(WriterNotifier::new(io::stdout())),
            Box::new(TracingSink),
        ),
        OutputFormat::Json => (
            Box::new(TracingNotifier),
            Box::new(JsonLinesSink::new(io::stdout())),
        ),
    }
}

fn render(values: Option<PathBuf>, fragment: bool) -> anyhow::Result<()> {
    let form = match values {
        Some(path) => {
            let mut form = fill_form(&load_values(&path)?)?;
            form.submit(&mut RecordingNotifier::default(), &mut RecordingSink::default())?;
            form
        }
        None => BookingForm::new(),
    };

    if fragment {
        println!("{}", form.render());
    } else {
        println!("{}", render_page(&form));
    }
    Ok(())
}

fn submit(args: &SubmitArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let mut form = fill_form(&args.values()?)?;
    let (mut notifier, mut sink) = collaborators(format);

    match form.submit(notifier.as_mut(), sink.as_mut())? {
        SubmitOutcome::Submitted(booking) => {
            debug!(name = %booking.name, "submitted");
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected(errors) => {
            match format {
                OutputFormat::Text => {
                    for (field, message) in errors.iter() {
                        eprintln!("{field}: {message}");
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "errors": errors }));
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn session(script: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let mut form = BookingForm::new();
    let (mut notifier, mut sink) = collaborators(format);
    let mut out = io::stdout();

    let report = match script {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            run_session(&mut form, reader, &mut out, notifier.as_mut(), sink.as_mut())?
        }
        None => run_session(
            &mut form,
            io::stdin().lock(),
            &mut out,
            notifier.as_mut(),
            sink.as_mut(),
        )?,
    };

    debug!(
        submitted = report.submitted,
        rejected = report.rejected,
        "session finished"
    );
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { values, fragment } => render(values, fragment)?,
        Commands::Submit(args) => return submit(&args, cli.format),
        Commands::Session { script } => session(script, cli.format)?,
    }

    Ok(ExitCode::SUCCESS)
}
