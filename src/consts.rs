/// Box header size in bytes, 32-bit size.
pub const HEADER_SIZE: u8 = 8;

/// Box header size in bytes, 64-bit size.
/// I.e. 32-bit size set to `1`, followed by
/// the real 64-bit size after the FourCC.
pub const HEADER_SIZE_64BIT: u8 = 16;

/// 32-bit size value indicating that the real size
/// follows the FourCC as a 64-bit value.
pub const SIZE_64BIT_MARKER: u32 = 1;

/// 32-bit size value indicating that the box
/// extends to the end of the stream.
pub const SIZE_TO_EOF: u32 = 0;

/// Size in bytes of a single `gps0` record.
pub const GPS0_RECORD_SIZE: usize = 32;

/// `gps0` years are stored as an offset from this year.
pub const GPS0_YEAR_OFFSET: i32 = 2000;

/// Hemisphere letters for latitude,
/// indexed by the `gps0` hemisphere flag.
/// Flag `0` (or out of range) is unknown.
pub const LATITUDE_HEMISPHERE: [char; 3] = [' ', 'N', 'S'];

/// Hemisphere letters for longitude,
/// indexed by the `gps0` hemisphere flag.
/// Flag `0` (or out of range) is unknown.
pub const LONGITUDE_HEMISPHERE: [char; 3] = [' ', 'E', 'W'];

