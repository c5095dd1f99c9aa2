use anyhow::Context;
use clap::{Parser, Subcommand};
use meeting_notes::adapters::host::{OpenMode, SystemClock, TerminalNotifier, TerminalWorkspace};
use meeting_notes::adapters::storage::FsVaultStorage;
use meeting_notes::commands::{config as config_commands, note};
use meeting_notes::config::SettingsStore;
use meeting_notes::domain::{MeetingForm, RowList};
use meeting_notes::AppState;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "meeting-notes", version, about = "Create templated meeting notes")]
struct Cli {
    /// Vault directory notes are written into
    #[arg(long, env = "MEETING_NOTES_VAULT", default_value = ".")]
    vault: PathBuf,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, env = "MEETING_NOTES_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create Meeting Note
    Create {
        /// Meeting title; prompts for every field when omitted
        #[arg(long)]
        title: Option<String>,

        #[arg(long = "participant")]
        participants: Vec<String>,

        #[arg(long = "agenda")]
        agenda: Vec<String>,

        /// Open the note in $VISUAL / $EDITOR instead of printing its path
        #[arg(long)]
        edit: bool,
    },

    /// Insert Meeting Template (printed to stdout)
    Template,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings as JSON
    Show,

    /// Set the folder new notes are created in
    SetFolder { folder: String },
}

fn build_state(cli: &Cli, open_mode: OpenMode) -> anyhow::Result<AppState> {
    let store = cli
        .config
        .clone()
        .map(SettingsStore::new)
        .unwrap_or_else(SettingsStore::in_default_location);
    let settings = store
        .load()
        .with_context(|| format!("loading settings from {}", store.path().display()))?;

    let vault = Arc::new(
        FsVaultStorage::new(&cli.vault)
            .with_context(|| format!("opening vault {}", cli.vault.display()))?,
    );
    let workspace = TerminalWorkspace::new(Arc::clone(&vault), open_mode);

    Ok(AppState::new(
        vault,
        Arc::new(workspace),
        Arc::new(TerminalNotifier),
        Arc::new(SystemClock),
        settings,
    )
    .with_settings_store(store))
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    eprint!("{}: ", label);
    io::stderr().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Fills one list of the form until an empty line is entered
fn collect_rows(
    input: &mut impl BufRead,
    form: &mut MeetingForm,
    list: RowList,
    label: &str,
) -> anyhow::Result<()> {
    let mut index = 0;
    loop {
        let value = prompt(input, label)?;
        if value.trim().is_empty() {
            return Ok(());
        }

        let rows = match list {
            RowList::Participants => form.participants().len(),
            RowList::Agenda => form.agenda().len(),
        };
        if index >= rows {
            form.add_row(list);
        }
        form.update_row(list, index, value)?;
        index += 1;
    }
}

/// Reads the whole form from stdin; blocking, run it off the runtime
fn prompt_form() -> anyhow::Result<MeetingForm> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    read_form(&mut input)
}

fn read_form(input: &mut impl BufRead) -> anyhow::Result<MeetingForm> {
    let mut form = MeetingForm::new();

    form.set_title(prompt(input, "Meeting title")?);
    collect_rows(
        input,
        &mut form,
        RowList::Participants,
        "Participant (empty to finish)",
    )?;
    collect_rows(
        input,
        &mut form,
        RowList::Agenda,
        "Agenda item (empty to finish)",
    )?;

    Ok(form)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let open_mode = match &cli.command {
        Command::Create { edit: true, .. } => OpenMode::from_env(),
        _ => OpenMode::PrintPath,
    };
    let state = build_state(&cli, open_mode)?;

    match cli.command {
        Command::Create {
            title,
            participants,
            agenda,
            ..
        } => {
            let result = match title {
                Some(title) => {
                    let request = note::CreateNoteRequest {
                        title,
                        participants,
                        agenda,
                    };
                    note::create_meeting_note(&state, request).await
                }
                None => {
                    let form = tokio::task::spawn_blocking(prompt_form).await??;
                    note::submit_meeting_form(&state, &form).await
                }
            };

            // The notifier already reported the outcome
            Ok(if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Template => {
            print!("{}", note::insert_meeting_template(&state));
            Ok(ExitCode::SUCCESS)
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = config_commands::get_settings(&state).await;
                println!("{}", serde_json::to_string_pretty(&settings)?);
                Ok(ExitCode::SUCCESS)
            }
            SettingsAction::SetFolder { folder } => {
                match config_commands::set_meeting_folder(&state, folder).await {
                    Ok(settings) => {
                        println!("Meeting folder: {}", settings.meeting_template_folder);
                        Ok(ExitCode::SUCCESS)
                    }
                    Err(e) => {
                        eprintln!("{}", e);
                        Ok(ExitCode::FAILURE)
                    }
                }
            }
        },
    }
}
