use derive_more::From;

use linal_core::LinalCoreError;

pub type Result<T> = core::result::Result<T, LinalIoError>;

#[derive(Debug, From)]
pub enum LinalIoError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    Core(LinalCoreError),

    // -- Stream entry
    Parse {
        row: usize,
        col: usize,
        token: String,
    },

    UnexpectedEof {
        expected: usize,
        found: usize,
    },
}

// region:    --- Error Boilerplate

impl core::fmt::Display for LinalIoError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for LinalIoError {}

// endregion: --- Error Boilerplate
