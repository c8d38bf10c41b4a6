use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering a figure.
#[derive(Debug, Error)]
pub enum FigureError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend rejected an operation or failed to write the file.
    #[error("failed to draw {file}: {message}")]
    Draw {
        /// File name of the figure being drawn.
        file: &'static str,
        /// Backend error message.
        message: String,
    },
}
