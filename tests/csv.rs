use std::io::Cursor;

use gps0iter::{Gps0Error, Mp4, TimeZone};

fn atom(name: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut buf = ((data.len() + 8) as u32).to_be_bytes().to_vec();
    buf.extend_from_slice(name);
    buf.extend_from_slice(data);
    buf
}

fn record(lat: f64, lon: f64, track: u8, invalid: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(32);
    buf.extend_from_slice(&lat.to_le_bytes());
    buf.extend_from_slice(&lon.to_le_bytes());
    buf.extend_from_slice(&35_i32.to_le_bytes());
    buf.extend_from_slice(&88_u16.to_le_bytes());
    buf.extend_from_slice(&[24, 12, 31, 23, 59, 58]);
    buf.extend_from_slice(&[track, 1, 1, invalid]);
    buf
}

fn to_csv(data: Vec<u8>) -> (String, Result<usize, Gps0Error>) {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    let result = Mp4::from_reader(Cursor::new(data), "dashcam.mov")
        .with_timezone(TimeZone::Utc)
        .gps0(&mut writer);
    let out = match writer.into_inner() {
        Ok(buf) => String::from_utf8(buf).unwrap(),
        Err(_) => panic!("failed to flush csv writer"),
    };
    (out, result)
}

#[test]
fn csv_rows_in_file_order() {
    let mut first = record(5547.5, 1256.4, 0, 0);
    first.extend(record(5547.6, 1256.5, 179, 0));
    let second = record(5547.7, 1256.6, 1, 0);

    let mut data = atom(b"ftyp", b"qt  \0\0\0\0");
    data.extend(atom(b"gps0", &first));
    data.extend(atom(b"mdat", &[0xff; 128]));
    data.extend(atom(b"gps0", &second));

    let (out, result) = to_csv(data);
    assert_eq!(result.unwrap(), 3);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![
        "55.791667N,12.940000E,35m,88km/h,2024-12-31T23:59:58Z,0°",
        "55.793333N,12.941667E,35m,88km/h,2024-12-31T23:59:58Z,358°",
        "55.795000N,12.943333E,35m,88km/h,2024-12-31T23:59:58Z,2°",
    ]);
}

#[test]
fn csv_no_gps0() {
    let mut data = atom(b"ftyp", b"isom");
    data.extend(atom(b"moov", &[0; 16]));
    let (out, result) = to_csv(data);
    assert_eq!(result.unwrap(), 0);
    assert!(out.is_empty());
}

#[test]
fn csv_partial_output_on_error() {
    let mut data = atom(b"gps0", &record(5547.5, 1256.4, 45, 0));
    // declared size smaller than header
    data.extend_from_slice(&[0, 0, 0, 2]);
    data.extend_from_slice(b"gps0");

    let (out, result) = to_csv(data);
    assert_eq!(out, "55.791667N,12.940000E,35m,88km/h,2024-12-31T23:59:58Z,90°\n");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("dashcam.mov: Malformed box"));
}
