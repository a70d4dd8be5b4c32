//! # Folio CLI
//!
//! Usage:
//!   folio cv.json -o cv.pdf
//!   echo '{ ... }' | folio -o cv.pdf
//!   folio cv.json --config fr.json -o cv.pdf
//!   folio cv.json --layout-json > layout.json
//!   folio --example > cv.json

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use folio::layout::LayoutEngine;
use folio::{CvRecord, FolioError, LayoutConfig};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Lay out a CV record as a paginated PDF")]
struct Args {
    /// CV record as JSON. Read from stdin when omitted.
    input: Option<PathBuf>,

    /// Where to write the PDF.
    #[arg(short, long, default_value = "cv.pdf")]
    output: PathBuf,

    /// Layout configuration (page size, margins, theme, labels) as JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the laid-out pages as JSON instead of writing a PDF.
    #[arg(long)]
    layout_json: bool,

    /// Print a sample CV record and exit.
    #[arg(long)]
    example: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info")).init();

    let args = Args::parse();

    if args.example {
        print!("{}", example_cv_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), FolioError> {
    let config = match &args.config {
        Some(path) => LayoutConfig::from_json(&read_file(path)?)?,
        None => LayoutConfig::default(),
    };

    let input = match &args.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| FolioError::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            buf
        }
    };
    let record = CvRecord::from_json(&input)?;

    if args.layout_json {
        let info = LayoutEngine::new(config).layout_info(&record);
        println!("{}", serde_json::to_string_pretty(&info).map_err(FolioError::serialize)?);
        return Ok(());
    }

    folio::export(&record, &config, &args.output)?;
    eprintln!("✓ Written {}", args.output.display());
    Ok(())
}

fn read_file(path: &Path) -> Result<String, FolioError> {
    fs::read_to_string(path).map_err(|e| FolioError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn example_cv_json() -> &'static str {
    r##"{
  "fullName": "Amina Saïdi",
  "jobTitle": "Senior Backend Engineer",
  "email": "amina.saidi@example.com",
  "phone": "+216 20 123 456",
  "location": "Tunis, Tunisia",
  "linkedin": "linkedin.com/in/aminasaidi",
  "website": "aminasaidi.dev",
  "summary": "Backend engineer with eight years of experience designing payment and logistics platforms. Comfortable owning services end to end, from data modelling to on-call.",
  "experiences": [
    {
      "company": "Medina Payments",
      "role": "Senior Backend Engineer",
      "start": "Mar 2021",
      "end": "",
      "description": "• Led the migration of the ledger service to an event-sourced design\n• Cut p99 settlement latency from 2.4 s to 310 ms\n• Mentored four engineers through their first on-call rotations\n• Introduced contract tests between eleven internal services"
    },
    {
      "company": "Carthage Logistics",
      "role": "Software Engineer",
      "start": "Sep 2017",
      "end": "Feb 2021",
      "description": "- Built the route-planning API used by 300 drivers daily\n- Replaced nightly batch imports with a streaming pipeline"
    }
  ],
  "educations": [
    {
      "institution": "INSAT",
      "degree": "Engineering Degree",
      "field": "Software Engineering",
      "start": "2012",
      "end": "2017"
    }
  ],
  "skills": [
    "Rust", "Go", "PostgreSQL", "Kafka", "Kubernetes", "gRPC",
    "Event Sourcing", "Observability", "Domain-Driven Design"
  ],
  "certifications": [
    { "name": "Certified Kubernetes Administrator", "issuer": "CNCF", "year": "2022" },
    { "name": "AWS Solutions Architect – Associate", "issuer": "Amazon Web Services", "year": "2020" }
  ],
  "projects": [
    {
      "name": "folio",
      "technologies": "Rust, serde",
      "description": "Page-native résumé layout engine that writes PDF directly."
    }
  ]
}
"##
}
