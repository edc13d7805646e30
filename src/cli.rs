// src/cli.rs
use crate::config::ScreenerConfig;
use crate::render::render_result;
use crate::{ScreenerClient, ScreeningSession, UploadCandidate};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Screen a resume against a job description")]
pub struct ScreenerCli {
    #[command(subcommand)]
    pub command: ScreenerCommand,

    /// Backend base URL (overrides RESUME_SCREENER_API_URL and config.yaml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum ScreenerCommand {
    /// Upload a resume and job description for compatibility analysis
    Analyze {
        /// Resume file (PDF, DOC or DOCX, up to 2MB)
        #[arg(long)]
        resume: PathBuf,

        /// Job description text
        #[arg(long, conflicts_with = "job_file")]
        job_desc: Option<String>,

        /// Read the job description from a file instead
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Save a plain-text report alongside the results
        #[arg(long)]
        save_report: bool,

        /// Directory for the saved report
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Check a resume file against the upload rules without contacting the backend
    Validate {
        /// Resume file to check
        resume: PathBuf,
    },
}

pub async fn run(cli: ScreenerCli) -> Result<()> {
    let config = ScreenerConfig::resolve(cli.api_url.as_deref())?;

    match cli.command {
        ScreenerCommand::Analyze {
            resume,
            job_desc,
            job_file,
            save_report,
            output_dir,
        } => {
            let mut session = ScreeningSession::new();
            session.attach(&resume)?;

            if let Some(candidate) = session.candidate() {
                println!("✓ {} ({:.1} KB)", candidate.name, candidate.size_kb());
            }

            let job_description = match (job_desc, job_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read job description: {}", path.display())
                })?,
                (None, None) => String::new(),
            };
            session.set_job_description(job_description);

            info!("Using analysis service at {}", config.base_url);
            let client = ScreenerClient::new(&config)?;

            println!("Analyzing resume...");
            let result = session.submit(&client).await?;

            print!("\n{}", render_result(&result));

            if save_report {
                if let Some(path) = session.export_report(&output_dir)? {
                    println!("\n✓ Report saved to {}", path.display());
                }
            }

            Ok(())
        }

        ScreenerCommand::Validate { resume } => {
            let candidate = UploadCandidate::from_path(&resume)?;
            println!(
                "✓ {} ({:.1} KB) is ready to upload",
                candidate.name,
                candidate.size_kb()
            );
            Ok(())
        }
    }
}
