//! Box FourCC.
//! Only the tags this crate acts on, or that commonly
//! appear at the top level of dashcam MP4/MOV files, are listed.
//! Anything else is kept verbatim as `FourCC::Custom`.

use std::fmt;

use crate::support::string_from_bytes;

/// Box Four CC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FourCC {
    /// File type compatibility
    Ftyp,
    /// Free space
    Free,
    /// Media data
    Mdat,
    /// Movie Atom
    Moov,
    /// Free space
    Skip,
    /// User data
    Udta,
    /// Wide, placeholder for 64-bit `mdat`
    Wide,
    /// Dashcam GPS telemetry, 32 byte records
    Gps0,

    Custom(String)
}

impl FourCC {
    /// Tags are compared as raw bytes,
    /// mapped one byte per `char` since some
    /// manufacturers use single-byte extended ascii.
    pub fn from_slice(fourcc: &[u8]) -> Self {
        match fourcc {
            b"ftyp" => Self::Ftyp,
            b"free" => Self::Free,
            b"mdat" => Self::Mdat,
            b"moov" => Self::Moov,
            b"skip" => Self::Skip,
            b"udta" => Self::Udta,
            b"wide" => Self::Wide,
            b"gps0" => Self::Gps0,
            _ => Self::Custom(string_from_bytes(fourcc)),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Self::Ftyp => "ftyp",
            Self::Free => "free",
            Self::Mdat => "mdat",
            Self::Moov => "moov",
            Self::Skip => "skip",
            Self::Udta => "udta",
            Self::Wide => "wide",
            Self::Gps0 => "gps0",
            Self::Custom(s) => s.as_str()
        }
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self::Custom("None".to_owned())
    }
}
