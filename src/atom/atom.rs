//! Atom with a body reader bounded to the atom's data load.

use std::io::Read;

use crate::{AtomHeader, AtomReader, FourCC, Gps0Error, Gps0Iter};

/// Atom, as returned by `AtomReader::next_atom()`.
///
/// Reads are bounded to the atom data load. Any part of the
/// body left unread is discarded before the next header is read,
/// either explicitly via `Atom::skip()` or by the next call to
/// `AtomReader::next_atom()`.
pub struct Atom<'a, R: Read> {
    /// Header
    header: AtomHeader,
    /// Reader over the stream, positioned
    /// somewhere within the data load.
    reader: &'a mut AtomReader<R>
}

impl <'a, R: Read> Atom<'a, R> {
    pub(crate) fn new(
        header: AtomHeader,
        reader: &'a mut AtomReader<R>
    ) -> Self {
        Self {
            header,
            reader
        }
    }

    pub fn header(&self) -> &AtomHeader {
        &self.header
    }

    pub fn name(&self) -> &FourCC {
        &self.header.name
    }

    /// Total size of the atom in bytes.
    pub fn size(&self) -> Option<u64> {
        self.header.atom_size
    }

    pub fn data_size(&self) -> Option<u64> {
        self.header.data_size()
    }

    /// Number of bytes left to read in the data load.
    /// `None` if the atom extends to the end of the stream.
    pub fn remaining(&self) -> Option<u64> {
        self.reader.remaining()
    }

    /// Current absolute position in the stream.
    pub fn pos(&self) -> u64 {
        self.reader.pos()
    }

    /// Discards the remaining data load,
    /// leaving the stream at the start of the next atom.
    /// Returns the number of bytes discarded.
    pub fn skip(self) -> Result<u64, Gps0Error> {
        self.reader.skip_remaining()
    }

    /// Iterate over the data load as `gps0` records,
    /// starting at current position.
    pub fn gps0(&mut self) -> Gps0Iter<&mut Self> {
        let offset = self.pos();
        Gps0Iter::new(self, offset)
    }
}

impl <'a, R: Read> Read for Atom<'a, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read_body(buf)
    }
}
