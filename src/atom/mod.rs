//! Atom header and bounded atom body.

mod atom;
mod atom_header;

pub use atom::Atom;
pub use atom_header::AtomHeader;
pub(crate) use atom_header::RawHeader;
