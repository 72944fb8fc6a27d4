use std::fmt::{Debug, Formatter};

use tint_bmp::BmpDecoderErrors;
use tint_regions::RegionErrors;

/// Errors that stop the command line workflow
pub enum CmdErrors {
    Decode(BmpDecoderErrors),
    Region(RegionErrors),
    Io(std::io::Error),
    Serialize(serde_json::Error),
    /// The input is not a BMP file
    NotBmp(String)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => writeln!(f, "Could not decode image: {:?}", err),
            Self::Region(err) => writeln!(f, "Could not average region: {:?}", err),
            Self::Io(err) => writeln!(f, "I/O error: {}", err),
            Self::Serialize(err) => writeln!(f, "Could not serialize report: {}", err),
            Self::NotBmp(file) => writeln!(f, "{file} does not look like a BMP file")
        }
    }
}

impl From<BmpDecoderErrors> for CmdErrors {
    fn from(value: BmpDecoderErrors) -> Self {
        CmdErrors::Decode(value)
    }
}

impl From<RegionErrors> for CmdErrors {
    fn from(value: RegionErrors) -> Self {
        CmdErrors::Region(value)
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::Io(value)
    }
}

impl From<serde_json::Error> for CmdErrors {
    fn from(value: serde_json::Error) -> Self {
        CmdErrors::Serialize(value)
    }
}
