use std::path::PathBuf;

use lineprofile_core::config::ProfileConfig;

/// Results sent from file-dialog threads back to the UI thread.
pub enum DialogResult {
    ImagePicked {
        path: PathBuf,
    },
    ConfigImported {
        path: PathBuf,
        config: ProfileConfig,
    },
    Saved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
