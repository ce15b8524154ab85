use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use timebucket::config::get_config;
use timebucket::logging::init_logging;
use timebucket::step::parse_step;
use timebucket::view::EditorView;
use timebucket::{EditSession, SessionOwner, SkillCatalog, TimeBucket};
use tracing::info;

#[derive(Parser)]
struct Args {
    /// Skill catalog JSON, overrides the configured one.
    #[clap(long, global = true)]
    skills: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the editor form for a time bucket.
    Show { file: PathBuf },
    /// Apply edit steps (start=HH:mm, end=HH:mm, skills=A,B, toggle=DAY) and save.
    Edit {
        file: PathBuf,
        #[clap(required = true)]
        steps: Vec<String>,
        /// Cancel the session instead of saving.
        #[clap(long)]
        discard: bool,
        /// Where to write the saved bucket, defaults to FILE.
        #[clap(short, long)]
        out: Option<PathBuf>,
    },
}

/// Writes the committed draft back to disk.
struct FileOwner {
    path: PathBuf,
    written: Option<timebucket::Result<()>>,
}

impl SessionOwner for FileOwner {
    fn on_update_time_bucket(&mut self, time_bucket: TimeBucket) {
        let result = serde_json::to_string_pretty(&time_bucket)
            .map_err(timebucket::Error::from)
            .and_then(|json| fs::write(&self.path, json).map_err(timebucket::Error::from));
        self.written = Some(result);
    }

    fn on_close(&mut self) {
        info!(path = %self.path.display(), "session closed");
    }
}

fn load_catalog(skills: Option<PathBuf>) -> timebucket::Result<SkillCatalog> {
    let path = skills.or_else(|| get_config().skills.as_ref().map(PathBuf::from));
    match path {
        Some(path) => SkillCatalog::open(path),
        None => Ok(SkillCatalog::default()),
    }
}

fn load_bucket(file: &Path) -> timebucket::Result<TimeBucket> {
    let json = fs::read_to_string(file)?;
    Ok(serde_json::from_str(&json)?)
}

fn run(args: Args) -> timebucket::Result<()> {
    let config = get_config();
    let catalog = load_catalog(args.skills)?;

    match args.cmd {
        Command::Show { file } => {
            let bucket = load_bucket(&file)?;
            let view = EditorView::new(&config.editor_name, &bucket, &catalog);
            print!("{view}");
        }
        Command::Edit {
            file,
            steps,
            discard,
            out,
        } => {
            let source = load_bucket(&file)?;
            let mut session = EditSession::new(&config.modal_title, &config.editor_name);
            session.open(&source);
            for step in &steps {
                session.apply(&parse_step(step, &catalog)?)?;
            }
            if let Some(view) = session.view(&catalog) {
                print!("{view}");
            }

            let mut owner = FileOwner {
                path: out.unwrap_or(file),
                written: None,
            };
            if discard {
                session.cancel(&mut owner);
            } else {
                session.save(&mut owner)?;
            }
            if let Some(written) = owner.written {
                written?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
