use std::path::PathBuf;

mod prompt;
mod render;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use prompt::Prompter;
use students::{
    storage::export_to_dir, Config, ExportError, Session, StoreError, StudentForm, StudentId,
    SubmitError, Submitted, ValidationErrors,
};
use terminal::Colorize;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The directory exported records are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        tracing::debug!(?config, "loaded configuration");

        App::new(config, self.output_dir).run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Prompts and listings own stdout.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Delete,
    List,
    Export,
    Quit,
}

impl Action {
    const ALL: [Self; 6] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::List,
        Self::Export,
        Self::Quit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add student",
            Self::Edit => "Edit student",
            Self::Delete => "Delete student",
            Self::List => "List students",
            Self::Export => "Save student details",
            Self::Quit => "Quit",
        }
    }
}

/// The interactive loop over a single [`Session`].
struct App {
    session: Session,
    config: Config,
    output_dir: PathBuf,
    prompter: Prompter,
}

impl App {
    fn new(config: Config, output_dir: PathBuf) -> Self {
        Self {
            session: Session::new(),
            config,
            output_dir,
            prompter: Prompter::new(),
        }
    }

    fn run(mut self) -> anyhow::Result<()> {
        println!("{}", "Student Details Form".strong());

        let labels: Vec<String> = Action::ALL.map(|a| a.label().to_string()).to_vec();
        loop {
            let prompt = format!("{} student(s) recorded", self.session.store().len());
            let Some(index) = self.prompter.choose(&prompt, &labels)? else {
                break;
            };

            match Action::ALL[index] {
                Action::Add => self.fill(StudentForm::default())?,
                Action::Edit => self.edit()?,
                Action::Delete => self.delete()?,
                Action::List => self.list(),
                Action::Export => self.export()?,
                Action::Quit => break,
            }
        }

        if !self.session.store().is_empty() {
            println!(
                "{}",
                "Records are not kept after the session ends.".dim()
            );
        }
        Ok(())
    }

    /// Collects a form and submits it until it is accepted or the user gives
    /// up.
    #[instrument(level = "debug", skip_all, fields(editing = self.session.is_editing()))]
    fn fill(&mut self, mut form: StudentForm) -> anyhow::Result<()> {
        let mut errors = ValidationErrors::default();

        loop {
            form = self.prompter.form(form, &mut errors)?;

            match self.session.submit(form.clone()) {
                Ok(Submitted::Added(id)) => {
                    println!("{}", format!("Added student {id}").success());
                    return Ok(());
                }
                Ok(Submitted::Updated(id)) => {
                    println!("{}", format!("Updated student {id}").success());
                    return Ok(());
                }
                Err(SubmitError::Invalid(rejected)) => {
                    eprintln!("{}", render::field_errors(&rejected).error());
                    errors = rejected;
                    if !self.prompter.confirm("Correct the form and try again?", true)? {
                        self.session.cancel_edit();
                        println!("{}", "Form discarded".dim());
                        return Ok(());
                    }
                }
                Err(SubmitError::Store(error)) => {
                    self.session.cancel_edit();
                    eprintln!("{}", error.to_string().warning());
                    return Ok(());
                }
            }
        }
    }

    fn pick_student(&self, prompt: &str) -> anyhow::Result<Option<StudentId>> {
        let students = self.session.store().list();
        if students.is_empty() {
            println!("{}", "No student records available".dim());
            return Ok(None);
        }

        let items: Vec<String> = students.iter().map(render::choice).collect();
        let choice = self.prompter.choose(prompt, &items)?;
        Ok(choice.map(|i| students[i].id().clone()))
    }

    fn edit(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_student("Edit which student?")? else {
            return Ok(());
        };
        let Some(form) = self.session.begin_edit(&id) else {
            return Ok(());
        };
        println!("{}", format!("Editing {id}").dim());
        self.fill(form)
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.pick_student("Delete which student?")? else {
            return Ok(());
        };
        if self
            .prompter
            .confirm(&format!("Delete student {id}?"), false)?
            && self.session.delete(&id)
        {
            println!("{}", format!("Deleted student {id}").success());
        }
        Ok(())
    }

    fn list(&self) {
        let narrow = terminal::terminal_width().is_some_and(|w| self.config.is_narrow(w));
        print!("{}", render::list(self.session.store().list(), narrow));
    }

    fn export(&self) -> anyhow::Result<()> {
        match export_to_dir(
            self.session.store(),
            &self.output_dir,
            self.config.export_file_name(),
        ) {
            Ok(path) => {
                println!("{}", format!("Saved to {}", path.display()).success());
                Ok(())
            }
            Err(ExportError::Store(StoreError::EmptyStore)) => {
                println!("{}", "No student records to save!".warning());
                Ok(())
            }
            Err(error) => Err(error).context("failed to save student details"),
        }
    }
}
