// src/constants.rs
//
// Application-wide constants. Endpoint paths live next to the HTTP
// adapter; what is collected here is shared across layers.

/// Default backend API base URL, overridable with `--base-url` or the
/// `STARLUS_BASE_URL` environment variable.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

/// File name of the durable credential store inside the data directory.
///
/// Used in: `infrastructure/credentials.rs`, `lib.rs`
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// Multipart field name the speech endpoint expects for the recording.
///
/// Used in: `infrastructure/http.rs`
pub const SPEECH_FILE_FIELD: &str = "audio_file";

/// Multipart field name the handwriting endpoint expects for the photo.
///
/// Used in: `infrastructure/http.rs`
pub const HANDWRITING_FILE_FIELD: &str = "image";
