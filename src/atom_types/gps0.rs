//! Dashcam GPS telemetry atom (`gps0`).
//!
//! The data load is a sequence of fixed size,
//! 32 byte little endian records, one per GPS fix:
//!
//! ```ignore
//! | offset | size | field                                |
//! |      0 |    8 | latitude, NMEA ddmm.mmmm, f64        |
//! |      8 |    8 | longitude, NMEA dddmm.mmmm, f64      |
//! |     16 |    4 | altitude in meters, i32              |
//! |     20 |    2 | speed in km/h, u16                   |
//! |     22 |    6 | year (- 2000), month, day, h, m, s   |
//! |     28 |    1 | track (heading / 2)                  |
//! |     29 |    1 | hemisphere 0 = ' ', 1 = 'N', 2 = 'S' |
//! |     30 |    1 | hemisphere 0 = ' ', 1 = 'E', 2 = 'W' |
//! |     31 |    1 | invalid fix if non-zero              |
//! ```
//!
//! Location: top-level atom.

use std::io::{Cursor, Read};

use binrw::{BinRead, BinReaderExt};
use time::{
    format_description::well_known::Rfc3339,
    Date,
    Month,
    OffsetDateTime,
    PrimitiveDateTime,
    Time,
    UtcOffset,
};

use crate::{
    support::{hemisphere, nmea_to_decimal, read_full},
    Gps0Error,
    GPS0_RECORD_SIZE,
    GPS0_YEAR_OFFSET,
    LATITUDE_HEMISPHERE,
    LONGITUDE_HEMISPHERE,
};

/// Time zone used when rendering `gps0` timestamps.
/// Timestamps are always stored as UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeZone {
    /// Local system time zone. Falls back
    /// to UTC if the offset can not be determined.
    #[default]
    Local,
    Utc,
    /// Fixed offset from UTC.
    Offset(UtcOffset),
}

/// Single `gps0` record, i.e. one GPS fix.
#[derive(Debug, Clone, PartialEq, BinRead)]
#[br(little)]
pub struct Gps0 {
    /// NMEA `ddmm.mmmm`
    pub(crate) latitude_nmea: f64,
    /// NMEA `dddmm.mmmm`
    pub(crate) longitude_nmea: f64,
    /// Meters
    pub(crate) altitude: i32,
    /// km/h
    pub(crate) speed: u16,
    /// Years since 2000
    pub(crate) year: u8,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    /// Heading in degrees, halved to fit a byte.
    pub(crate) track: u8,
    /// Out of range values are treated as unknown.
    #[br(map = |flag: u8| clamp_hemisphere(flag))]
    pub(crate) ns: u8,
    /// Out of range values are treated as unknown.
    #[br(map = |flag: u8| clamp_hemisphere(flag))]
    pub(crate) ew: u8,
    pub(crate) invalid: u8,
}

fn clamp_hemisphere(flag: u8) -> u8 {
    match flag {
        0..=2 => flag,
        _ => 0,
    }
}

impl Gps0 {
    /// Parse a single 32 byte record.
    pub fn from_bytes(bytes: &[u8; GPS0_RECORD_SIZE]) -> Result<Self, Gps0Error> {
        Ok(Cursor::new(&bytes[..]).read_le::<Self>()?)
    }

    /// Latitude in decimal degrees, without sign.
    /// See `latitude_hemisphere()`.
    pub fn latitude(&self) -> f64 {
        nmea_to_decimal(self.latitude_nmea)
    }

    /// Longitude in decimal degrees, without sign.
    /// See `longitude_hemisphere()`.
    pub fn longitude(&self) -> f64 {
        nmea_to_decimal(self.longitude_nmea)
    }

    /// `N`, `S`, or ` ` if unknown.
    pub fn latitude_hemisphere(&self) -> char {
        hemisphere(&LATITUDE_HEMISPHERE, self.ns)
    }

    /// `E`, `W`, or ` ` if unknown.
    pub fn longitude_hemisphere(&self) -> char {
        hemisphere(&LONGITUDE_HEMISPHERE, self.ew)
    }

    /// Altitude in meters.
    pub fn altitude(&self) -> i32 {
        self.altitude
    }

    /// Speed in km/h.
    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Heading in degrees, 0-358 in steps of 2.
    pub fn track(&self) -> u16 {
        self.track as u16 * 2
    }

    pub fn is_valid(&self) -> bool {
        self.invalid == 0
    }

    /// Timestamp as UTC.
    /// Returns `None` if date or time values are out of range.
    pub fn datetime_utc(&self) -> Option<OffsetDateTime> {
        let month = Month::try_from(self.month).ok()?;
        let date = Date::from_calendar_date(
            GPS0_YEAR_OFFSET + self.year as i32,
            month,
            self.day
        ).ok()?;
        let time = Time::from_hms(self.hour, self.minute, self.second).ok()?;
        Some(PrimitiveDateTime::new(date, time).assume_utc())
    }

    /// Timestamp converted to time zone `tz`.
    pub fn datetime(&self, tz: TimeZone) -> Option<OffsetDateTime> {
        let utc = self.datetime_utc()?;
        match tz {
            TimeZone::Utc => Some(utc),
            TimeZone::Local => {
                // errors if the offset can not be determined soundly,
                // e.g. multi-threaded on some unix systems
                let offset = UtcOffset::local_offset_at(utc)
                    .unwrap_or(UtcOffset::UTC);
                Some(utc.to_offset(offset))
            },
            // years are 2000-2255, never out of range after conversion
            TimeZone::Offset(offset) => Some(utc.to_offset(offset)),
        }
    }

    /// RFC3339 timestamp, e.g. `2023-05-05T10:47:22+02:00`.
    /// Empty if date or time values are out of range.
    pub fn timestamp(&self, tz: TimeZone) -> String {
        self.datetime(tz)
            .and_then(|dt| dt.format(&Rfc3339).ok())
            .unwrap_or_default()
    }

    /// Returns the fix as text fields:
    /// `[latitude, longitude, altitude, speed, timestamp, track]`,
    /// e.g. `["49.274167N", "123.185333W", "12m", "45km/h", "2023-05-05T08:47:22Z", "180°"]`.
    pub fn to_row(&self, tz: TimeZone) -> [String; 6] {
        [
            format!("{:.6}{}", self.latitude(), self.latitude_hemisphere()),
            format!("{:.6}{}", self.longitude(), self.longitude_hemisphere()),
            format!("{}m", self.altitude),
            format!("{}km/h", self.speed),
            self.timestamp(tz),
            format!("{}°", self.track()),
        ]
    }
}

/// Iterator over the `gps0` records in a data load.
///
/// Records flagged as invalid are skipped.
/// Ends at the end of the data load, or after the first error.
/// A data load that is not a multiple of 32 bytes
/// yields `Gps0Error::TruncatedRecord` for the final,
/// partial record.
pub struct Gps0Iter<R: Read> {
    reader: R,
    /// Absolute offset for next record.
    offset: u64,
    done: bool,
}

impl<R: Read> Gps0Iter<R> {
    /// New iterator over `reader`, which should be bounded to
    /// the atom data load (see `Atom`). `offset` is
    /// the absolute position of `reader`, used for errors.
    pub fn new(reader: R, offset: u64) -> Self {
        Self {
            reader,
            offset,
            done: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<Gps0>, Gps0Error> {
        let mut buf = [0_u8; GPS0_RECORD_SIZE];
        let n = read_full(&mut self.reader, &mut buf)?;

        if n == 0 {
            return Ok(None);
        }
        if n < GPS0_RECORD_SIZE {
            return Err(Gps0Error::TruncatedRecord {
                got: n as u64,
                expected: GPS0_RECORD_SIZE as u64,
                offset: self.offset,
            });
        }

        self.offset += GPS0_RECORD_SIZE as u64;

        Gps0::from_bytes(&buf).map(Some)
    }
}

impl<R: Read> Iterator for Gps0Iter<R> {
    type Item = Result<Gps0, Gps0Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.read_record() {
                Ok(Some(gps)) if gps.is_valid() => return Some(Ok(gps)),
                Ok(Some(_)) => continue,
                Ok(None) => self.done = true,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}
