use std::io::{self, Read};

/// Single-byte chars from a FourCC slice.
/// Maps 0-255 to `char`, exceeding ascii.
pub(crate) fn string_from_bytes(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| *b as char)
        .collect()
}

/// Converts an NMEA coordinate, `ddmm.mmmm` or `dddmm.mmmm`,
/// to decimal degrees.
///
/// E.g. `4916.45` is 49 degrees, 16.45 minutes,
/// i.e. `49.274166...`.
pub fn nmea_to_decimal(value: f64) -> f64 {
    let deg = (value / 100.0).floor();
    deg + (value - deg * 100.0) / 60.0
}

/// Hemisphere letter from `table` for `flag`.
/// Flags outside the table resolve to the first
/// entry (unknown).
pub fn hemisphere(table: &[char; 3], flag: u8) -> char {
    table.get(flag as usize)
        .copied()
        .unwrap_or(table[0])
}

/// Reads until `buf` is full or the reader is exhausted.
/// Returns number of bytes read, which is only less than
/// `buf.len()` at end of stream.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut n = 0;
    while n < buf.len() {
        match reader.read(&mut buf[n..]) {
            Ok(0) => break,
            Ok(len) => n += len,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(n)
}
