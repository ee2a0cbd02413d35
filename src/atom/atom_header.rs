use binrw::BinRead;

use crate::{FourCC, HEADER_SIZE, HEADER_SIZE_64BIT};

/// Atom header.
/// 8 or 16 bytes, depending on whether
/// 32 or 64-bit sized.
///
/// ```ignore
/// | [X X X X] [Y Y Y Y] [Z Z Z Z Z Z Z Z] |
///    |         |         |
///    |         |         64bit size (optional, only if 32 bit size == 1)
///    |         FourCC
///    32bit size (0 = atom extends to end of stream)
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomHeader {
    /// Total atom size in bytes including 8/16 byte header.
    /// `None` if 32-bit size is `0`, i.e. the atom
    /// extends to the end of the stream.
    pub(crate) atom_size: Option<u64>,
    /// FourCC
    pub(crate) name: FourCC,
    /// Absolute byte offset for start of atom,
    /// i.e. byte offset for its header,
    /// starting with 32-bit size.
    pub(crate) offset: u64,
    /// Set to `true` if atom size specified
    /// in 64 bit area. Some cameras specify all sizes
    /// as 64 bit regardless of actual atom size,
    /// so header size can not be derived from the size value.
    pub(crate) size_64bit: bool
}

/// The fixed part of the header,
/// 32-bit size and FourCC.
#[derive(Debug, BinRead)]
#[br(big)]
pub(crate) struct RawHeader {
    pub(crate) size: u32,
    pub(crate) name: [u8; 4],
}

impl AtomHeader {
    /// Total atom size in bytes, including header.
    /// `None` if the atom extends to the end of the stream.
    pub fn atom_size(&self) -> Option<u64> {
        self.atom_size
    }

    pub fn name(&self) -> &FourCC {
        &self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns `true` if the atom extends to the end of the stream.
    pub fn to_eof(&self) -> bool {
        self.atom_size.is_none()
    }

    /// Header size in bytes.
    /// Returns 8 or 16 bytes.
    pub fn header_size(&self) -> u8 {
        match self.size_64bit {
            true => HEADER_SIZE_64BIT,
            false => HEADER_SIZE,
        }
    }

    /// Data load absolute offset,
    /// i.e. position after header
    /// adjusted for optional 64bit size value.
    pub fn data_offset(&self) -> u64 {
        self.offset + self.header_size() as u64
    }

    /// Size of data load (excludes header size).
    /// `None` if the atom extends to the end of the stream.
    pub fn data_size(&self) -> Option<u64> {
        self.atom_size
            .map(|size| size.saturating_sub(self.header_size() as u64))
    }

    /// Absolute offset to next atom.
    /// `None` if the atom extends to the end of the stream,
    /// or if its declared size exceeds the 64-bit offset range.
    pub fn offset_next_abs(&self) -> Option<u64> {
        self.atom_size
            .and_then(|size| self.offset.checked_add(size))
    }

    /// Returns `true` is absolute offset `pos`
    /// is contained within atom span.
    ///
    /// Inclusive lower bound, exclusive upper bound.
    pub fn contains(&self, pos: u64) -> bool {
        match self.offset_next_abs() {
            Some(end) => self.offset <= pos && end > pos,
            None => self.offset <= pos,
        }
    }
}
