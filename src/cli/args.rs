// src/cli/args.rs
use crate::constants::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Backend API base URL
    #[arg(
        short,
        long,
        value_name = "URL",
        global = true,
        env = "STARLUS_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Directory holding the credential file (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in and persist the session tokens
    Login {
        /// Account username
        #[arg(value_name = "USERNAME")]
        username: String,

        /// Account password
        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// Create a new account
    Register {
        #[arg(value_name = "USERNAME")]
        username: String,

        #[arg(value_name = "EMAIL")]
        email: String,

        #[arg(value_name = "PASSWORD")]
        password: String,
    },

    /// Log out and clear the stored tokens
    Logout,

    /// Show the signed-in user's profile
    Profile,

    /// Browse and record notes
    Notes {
        #[command(subcommand)]
        command: NotesCommand,
    },

    /// Record a note captured during an exam
    Exam {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Feed a keystroke sequence to the calculator (e.g. "12+3=")
    Calc {
        /// Keys to press; a trailing "=" is implied
        #[arg(value_name = "KEYS")]
        keys: String,
    },

    /// Transcribe an audio recording
    Speech {
        /// Path to the recording to upload
        #[arg(value_name = "AUDIO_FILE")]
        file: PathBuf,
    },

    /// Recognize handwriting in a photo
    Handwrite {
        /// Path to the image to upload
        #[arg(value_name = "IMAGE_FILE")]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum NotesCommand {
    /// List notes in server order
    List {
        /// Only show exam-mode notes
        #[arg(long)]
        exam: bool,
    },

    /// Save a new note
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(value_name = "CONTENT")]
        content: String,

        /// Mark the note as captured in exam mode
        #[arg(long)]
        exam_mode: bool,
    },
}
