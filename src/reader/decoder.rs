// src/reader/decoder.rs
use crate::error::{IsfError, Result};
use crate::metadata::Header;
use crate::raw_data::{RawDataReader, RawSamples, SampleFormat};
use crate::types::HeaderField;
use std::ops::Index;
use tracing::debug;

/// One calibrated sample: time on `x`, amplitude on `y`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Calibrated waveform, one [`Point`] per sample in acquisition order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleArray {
    points: Vec<Point>,
}

impl SampleArray {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Time column
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Amplitude column
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for SampleArray {
    fn from(points: Vec<Point>) -> Self {
        SampleArray { points }
    }
}

impl Index<usize> for SampleArray {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl IntoIterator for SampleArray {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a SampleArray {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Affine transforms from sample index and raw value to physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub point_offset: i64,
    pub x_increment: f64,
    pub x_zero: f64,
    pub y_offset: f64,
    pub y_multiplier: f64,
    pub y_zero: f64,
}

impl Calibration {
    pub fn from_header(header: &Header) -> Result<Self> {
        Ok(Calibration {
            point_offset: header.integer(HeaderField::PointOffset)?,
            x_increment: header.float(HeaderField::XIncrement)?,
            x_zero: header.float(HeaderField::XZero)?,
            y_offset: header.float(HeaderField::YOffset)?,
            y_multiplier: header.float(HeaderField::YMultiplier)?,
            y_zero: header.float(HeaderField::YZero)?,
        })
    }

    /// `(index - PT_OFF) * XINCR + XZERO`
    pub fn x(&self, index: usize) -> f64 {
        (index as f64 - self.point_offset as f64) * self.x_increment + self.x_zero
    }

    /// `(raw - YOFF) * YMULT + YZERO`
    pub fn y(&self, raw: f64) -> f64 {
        (raw - self.y_offset) * self.y_multiplier + self.y_zero
    }
}

/// Number of samples declared by `NR_PT`
pub fn point_count(header: &Header) -> Result<usize> {
    let count = header.integer(HeaderField::NumPoints)?;
    usize::try_from(count).map_err(|_| IsfError::Coercion {
        field: HeaderField::NumPoints,
        value: count.to_string(),
        expected: "non-negative integer",
    })
}

/// Decode the payload into integer samples without calibrating them
pub fn decode_raw(header: &Header, payload: &[u8]) -> Result<RawSamples> {
    let format = SampleFormat::from_header(header)?;
    let count = point_count(header)?;
    debug!(%format, count, payload_len = payload.len(), "decoding ISF payload");
    RawDataReader::read_samples(payload, count, format)
}

/// Decode and calibrate the payload described by `header`
///
/// ```
/// use isf_rs::{decode_samples, parse_header};
///
/// let header = parse_header(
///     ":WFMPRE:BYT_NR 1;BN_FMT RI;NR_PT 2;PT_OFF 0;XINCR 0.5;XZERO 0;YOFF 0;YMULT 2;YZERO 1",
/// ).unwrap();
/// let samples = decode_samples(&header, &[3, 0xfe]).unwrap();
/// assert_eq!(samples.xs(), vec![0.0, 0.5]);
/// assert_eq!(samples.ys(), vec![7.0, -3.0]);
/// ```
pub fn decode_samples(header: &Header, payload: &[u8]) -> Result<SampleArray> {
    let calibration = Calibration::from_header(header)?;
    let raw = decode_raw(header, payload)?;
    Ok(calibrate(&raw, &calibration))
}

/// Apply `calibration` to every raw sample
pub fn calibrate(raw: &RawSamples, calibration: &Calibration) -> SampleArray {
    raw.to_f64()
        .into_iter()
        .enumerate()
        .map(|(index, value)| Point {
            x: calibration.x(index),
            y: calibration.y(value),
        })
        .collect::<Vec<_>>()
        .into()
}
