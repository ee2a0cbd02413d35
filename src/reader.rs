use std::io::{self, Cursor, Read};

use binrw::BinReaderExt;
use si_trace_print::{defo, defñ};

use crate::{
    atom::RawHeader,
    support::read_full,
    Atom,
    AtomHeader,
    FourCC,
    Gps0Error,
    HEADER_SIZE,
    HEADER_SIZE_64BIT,
    SIZE_64BIT_MARKER,
    SIZE_TO_EOF,
};

/// Sequential reader over top-level atoms
/// in a byte stream.
///
/// Atoms are not descended into. Container atoms
/// (e.g. `moov`) are returned and skipped
/// like any other atom.
///
/// Only requires `Read`, since unread
/// atom data is discarded rather than seeked past.
#[derive(Debug)]
pub struct AtomReader<R: Read> {
    /// Underlying stream.
    reader: R,
    /// Absolute position in stream.
    pos: u64,
    /// Bytes left to read in the data load
    /// of the current atom. `None` if the
    /// current atom extends to the end of the stream.
    rem: Option<u64>,
}

impl<R: Read> AtomReader<R> {
    /// New reader. Assumes `reader` is positioned
    /// at the start of an atom.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pos: 0,
            rem: Some(0),
        }
    }

    /// Current absolute position in stream.
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Bytes left in current atom data load.
    pub fn remaining(&self) -> Option<u64> {
        self.rem
    }

    /// Returns the next atom, or `None` if the stream
    /// ends cleanly at an atom boundary.
    ///
    /// Any unread data in the previous atom's data load
    /// is discarded first.
    pub fn next_atom(&mut self) -> Result<Option<Atom<'_, R>>, Gps0Error> {
        self.skip_remaining()?;

        match self.header()? {
            Some(header) => {
                self.rem = header.data_size();
                Ok(Some(Atom::new(header, self)))
            },
            None => Ok(None)
        }
    }

    /// Discards whatever is left of the current atom's
    /// data load, leaving the stream at the start of the next atom
    /// (or at end of stream).
    ///
    /// If the stream ends before the declared atom size,
    /// the atom is considered the last one in the stream.
    pub(crate) fn skip_remaining(&mut self) -> Result<u64, Gps0Error> {
        let skipped = match self.rem {
            Some(0) => return Ok(0),
            Some(n) => io::copy(&mut (&mut self.reader).take(n), &mut io::sink())?,
            None => io::copy(&mut self.reader, &mut io::sink())?,
        };
        self.pos += skipped;

        if let Some(n) = self.rem {
            if skipped < n {
                defo!("stream ended {} bytes short of atom end @ {}", n - skipped, self.pos);
            }
        }

        self.rem = Some(0);

        Ok(skipped)
    }

    /// Read from current atom data load.
    /// Returns `Ok(0)` at data load end,
    /// regardless of what remains in the stream.
    pub(crate) fn read_body(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let max = match self.rem {
            Some(0) => return Ok(0),
            Some(n) => buf.len().min(usize::try_from(n).unwrap_or(usize::MAX)),
            None => buf.len(),
        };
        let n = self.reader.read(&mut buf[..max])?;
        self.pos += n as u64;
        if let Some(rem) = self.rem.as_mut() {
            *rem -= n as u64;
        }
        Ok(n)
    }

    /// Returns atom header at current position,
    /// or `None` if the stream is exhausted.
    ///
    /// Assumes current position is at an atom boundary.
    fn header(&mut self) -> Result<Option<AtomHeader>, Gps0Error> {
        let offset = self.pos;

        // 32bit total atom size + FourCC
        let mut buf = [0_u8; HEADER_SIZE as usize];
        let n = self.fill(&mut buf)?;
        if n == 0 {
            defñ!("end of stream @ {}", offset);
            return Ok(None);
        }
        if n < buf.len() {
            return Err(Gps0Error::TruncatedHeader {
                got: n as u64,
                expected: HEADER_SIZE as u64,
                offset,
            });
        }

        let raw: RawHeader = Cursor::new(&buf[..]).read_be()?;

        // Can not read fourcc name as utf-8 since some
        // manufacturers use single-byte extended ascii/ISO8859-1
        let mut hdr = AtomHeader {
            atom_size: Some(raw.size as u64),
            name: FourCC::from_slice(&raw.name),
            offset,
            size_64bit: false,
        };

        match raw.size {
            // Atom extends to end of stream,
            // resolved as the body is read
            SIZE_TO_EOF => hdr.atom_size = None,
            // Atom size is 64bit, stored in the 8 bytes
            // following directly after FourCC
            SIZE_64BIT_MARKER => {
                let mut ext = [0_u8; 8];
                let n = self.fill(&mut ext)?;
                if n < ext.len() {
                    return Err(Gps0Error::TruncatedHeader {
                        got: (buf.len() + n) as u64,
                        expected: HEADER_SIZE_64BIT as u64,
                        offset,
                    });
                }
                hdr.atom_size = Some(Cursor::new(&ext[..]).read_be::<u64>()?);
                hdr.size_64bit = true;
            },
            _ => (),
        }

        if let Some(size) = hdr.atom_size {
            if size < hdr.header_size() as u64 {
                return Err(Gps0Error::UnexpectedAtomSize {
                    size,
                    header_size: hdr.header_size(),
                    offset,
                });
            }
        }

        defñ!("'{}' size {:?} @ {}", hdr.name, hdr.atom_size, offset);

        Ok(Some(hdr))
    }

    /// Fill `buf` from stream, outside of any atom bounds.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = read_full(&mut self.reader, buf)?;
        self.pos += n as u64;
        Ok(n)
    }
}
