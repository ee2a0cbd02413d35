//! Iterate over top-level MP4/MOV atoms and extract
//! GPS telemetry from the `gps0` atom that some dashcam firmware
//! embeds in its recordings.
//!
//! Atoms are read sequentially from any `Read`, with support
//! for 64-bit sizes and atoms that extend to the end of the stream.
//! Does not descend into container atoms, and does not support
//! any kind of video de/encoding.
//!
//! ```rs
//! use gps0iter::{Mp4, TimeZone};
//! use std::path::Path;
//!
//! fn main() -> Result<(), gps0iter::Gps0Error> {
//!     let mut mp4 = Mp4::new(Path::new("VIDEO.MP4"))?;
//!
//!     // Write GPS fixes as CSV to stdout
//!     let mut writer = csv::Writer::from_writer(std::io::stdout());
//!     mp4.gps0(&mut writer)?;
//!
//!     Ok(())
//! }
//! ```

pub mod mp4;
pub mod fourcc;
pub mod atom;
pub mod atom_types;
pub mod consts;
pub mod errors;
pub mod reader;
pub mod sink;
pub mod support;


pub use mp4::Mp4;
pub use fourcc::FourCC;
pub use atom::{Atom, AtomHeader};
pub use atom_types::{Gps0, Gps0Iter, TimeZone};
pub use reader::AtomReader;
pub use sink::RowSink;
pub use consts::{
    GPS0_RECORD_SIZE,
    GPS0_YEAR_OFFSET,
    HEADER_SIZE,
    HEADER_SIZE_64BIT,
    LATITUDE_HEMISPHERE,
    LONGITUDE_HEMISPHERE,
    SIZE_64BIT_MARKER,
    SIZE_TO_EOF,
};
pub use errors::Gps0Error;
