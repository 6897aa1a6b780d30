// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use application::{
    Authenticator, BackendGateway, CalculatorSession, CredentialStore, NoteBrowser, NoteRecorder,
    ProfileViewer, Recognizer, SessionManager, Transcriber,
};
use cli::args::{Args, Command, NotesCommand};
use domain::{DomainError, NoteDraft};
use infrastructure::{FileCredentialStore, HttpBackend};
use ports::TextPresenter;
use tracing::{debug, info};

pub async fn run(args: Args) -> Result<(), DomainError> {
    debug!(?args, "Starting starlus with arguments");

    // Initialize infrastructure
    let store_path = match &args.data_dir {
        Some(dir) => dir.join(constants::CREDENTIALS_FILE),
        None => FileCredentialStore::default_path()?,
    };
    debug!(path = %store_path.display(), "Using credential store");

    let store = FileCredentialStore::new(store_path);
    let mut session = SessionManager::new(store.clone())?;
    let backend = HttpBackend::new(&args.base_url, store);
    let presenter = TextPresenter::new();

    let outcome = dispatch(args.command, &mut session, backend, &presenter).await;
    if let Err(err) = &outcome {
        // A rejected token invalidates the whole session: clear the
        // store so the next command asks for a fresh login.
        if matches!(err, DomainError::SessionExpired) {
            session.mark_expired()?;
        }
    }
    outcome
}

async fn dispatch<S, G>(
    command: Command,
    session: &mut SessionManager<S>,
    backend: G,
    presenter: &TextPresenter,
) -> Result<(), DomainError>
where
    S: CredentialStore,
    G: BackendGateway,
{
    match command {
        Command::Login { username, password } => {
            let credentials = Authenticator::new(backend)
                .login(&username, &password)
                .await?;
            session.complete_login(credentials)?;
            info!(%username, "Login completed");
            println!("Logged in as {username}");
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            Authenticator::new(backend)
                .register(&username, &email, &password)
                .await?;
            println!("Account {username} created, log in with `starlus login`");
        }
        Command::Logout => {
            session.logout()?;
            println!("Logged out");
        }
        Command::Profile => {
            require_authenticated(session)?;
            let profile = ProfileViewer::new(backend).fetch_profile().await?;
            println!("{}", presenter.render_profile(&profile));
        }
        Command::Notes { command } => match command {
            NotesCommand::List { exam } => {
                require_authenticated(session)?;
                let notes = NoteBrowser::new(backend).list_notes(exam).await?;
                println!("{}", presenter.render_notes(&notes));
            }
            NotesCommand::Add {
                title,
                content,
                exam_mode,
            } => {
                require_authenticated(session)?;
                let note = NoteRecorder::new(backend)
                    .save(NoteDraft {
                        title,
                        content,
                        is_exam_mode: exam_mode,
                    })
                    .await?;
                println!("{}", presenter.render_saved_note(&note));
            }
        },
        Command::Exam { title, content } => {
            require_authenticated(session)?;
            let note = NoteRecorder::new(backend)
                .save_exam_note(title, content)
                .await?;
            println!("{}", presenter.render_saved_note(&note));
        }
        Command::Calc { keys } => {
            require_authenticated(session)?;
            let mut calculator = CalculatorSession::new(backend);
            let outcome = calculator.run_keys(&keys).await;
            // The display is printed even when the submission failed.
            println!("{}", calculator.display());
            outcome?;
        }
        Command::Speech { file } => {
            require_authenticated(session)?;
            let text = Transcriber::new(backend).transcribe(&file).await?;
            println!("{}", presenter.render_transcription(&text));
        }
        Command::Handwrite { file } => {
            require_authenticated(session)?;
            let text = Recognizer::new(backend).recognize(&file).await?;
            println!("{}", presenter.render_recognition(&text));
        }
    }
    Ok(())
}

/// Session gate: authenticated commands are rejected before anything
/// reaches the wire.
fn require_authenticated<S: CredentialStore>(
    session: &SessionManager<S>,
) -> Result<(), DomainError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(DomainError::NotAuthenticated)
    }
}
