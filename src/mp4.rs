//! Core MP4 struct. Scans a single input for `gps0` atoms.
//!
//! ```rs
//! use gps0iter::{Mp4, TimeZone};
//! use std::path::Path;
//!
//! fn main() -> Result<(), gps0iter::Gps0Error> {
//!     let mut mp4 = Mp4::new(Path::new("VIDEO.MP4"))?
//!         .with_timezone(TimeZone::Utc);
//!
//!     let mut rows: Vec<Vec<String>> = Vec::new();
//!     mp4.gps0(&mut rows)?;
//!
//!     Ok(())
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use si_trace_print::{defn, defo, defx};

use crate::{
    AtomReader,
    FourCC,
    Gps0Error,
    RowSink,
    TimeZone,
};

/// MP4 (or other ISOBMFF) input.
pub struct Mp4<R: Read> {
    /// Top-level atom reader over the input.
    reader: AtomReader<R>,
    /// Input identity, attached to errors.
    path: PathBuf,
    /// Time zone for rendered timestamps.
    tz: TimeZone,
}

impl Mp4<BufReader<File>> {
    /// New Mp4 from path.
    pub fn new(path: &Path) -> Result<Self, Gps0Error> {
        let file = File::open(path)
            .map_err(|err| Gps0Error::from(err).with_path(path))?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }
}

impl<R: Read> Mp4<R> {
    /// New Mp4 from any reader positioned at the
    /// start of an atom. `path` identifies the input in errors.
    pub fn from_reader(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader: AtomReader::new(reader),
            path: path.into(),
            tz: TimeZone::default(),
        }
    }

    /// Set time zone for rendered timestamps.
    /// Defaults to `TimeZone::Local`.
    pub fn with_timezone(self, tz: TimeZone) -> Self {
        Self { tz, ..self }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes all `gps0` atoms from the current position
    /// to the end of the input, and writes one row per valid fix
    /// to `sink`. The sink is flushed after each `gps0` atom,
    /// and before returning an error.
    ///
    /// Returns the number of rows written.
    /// Errors carry the input path.
    pub fn gps0<S: RowSink>(&mut self, sink: &mut S) -> Result<usize, Gps0Error> {
        defn!("{:?}", self.path);
        let result = self.scan(sink)
            .map_err(|err| err.with_path(&self.path));
        defx!("ok: {}", result.is_ok());
        result
    }

    fn scan<S: RowSink>(&mut self, sink: &mut S) -> Result<usize, Gps0Error> {
        let tz = self.tz;
        let mut rows = 0;

        while let Some(mut atom) = self.reader.next_atom()? {
            let header = atom.header().to_owned();
            match header.name() {
                FourCC::Gps0 => {
                    let result = atom.gps0()
                        .try_for_each(|gps| -> Result<(), Gps0Error> {
                            sink.write_row(&gps?.to_row(tz))?;
                            rows += 1;
                            Ok(())
                        });
                    sink.flush()?;
                    result?;
                },
                // discarded by next call to next_atom()
                _ => {
                    defo!("skip '{}' @ {}", header.name(), header.offset());
                },
            }
        }

        Ok(rows)
    }
}
