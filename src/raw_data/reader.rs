// src/raw_data/reader.rs
use crate::error::{IsfError, Result};
use crate::raw_data::{Endianness, RawSamples, SampleFormat};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Decodes fixed-width integer payloads with the declared byte order
pub struct RawDataReader;

impl RawDataReader {
    /// Decode exactly `count` samples from `payload`
    ///
    /// The payload must hold `count * format.width` bytes, no more and no
    /// fewer.
    ///
    /// # Example
    ///
    /// ```
    /// use isf_rs::raw_data::{Endianness, RawDataReader, RawSamples, SampleFormat};
    ///
    /// let format = SampleFormat::new(Endianness::Big, true, 2).unwrap();
    /// let samples = RawDataReader::read_samples(&[0xff, 0xfe, 0x00, 0x03], 2, format).unwrap();
    /// assert_eq!(samples, RawSamples::I16(vec![-2, 3]));
    /// ```
    pub fn read_samples(payload: &[u8], count: usize, format: SampleFormat) -> Result<RawSamples> {
        let expected = count.checked_mul(format.width).unwrap_or(usize::MAX);
        if payload.len() != expected {
            return Err(IsfError::PayloadSizeMismatch {
                expected,
                found: payload.len(),
                points: count,
                width: format.width,
            });
        }

        match format.endianness {
            Endianness::Big => Self::read_typed::<BigEndian>(payload, count, format),
            Endianness::Little => Self::read_typed::<LittleEndian>(payload, count, format),
        }
    }

    fn read_typed<B: ByteOrder>(payload: &[u8], count: usize, format: SampleFormat) -> Result<RawSamples> {
        let samples = match (format.signed, format.width) {
            (true, 1) => RawSamples::I8(payload.iter().map(|&b| b as i8).collect()),
            (false, 1) => RawSamples::U8(payload.to_vec()),
            (true, 2) => {
                let mut values = vec![0i16; count];
                B::read_i16_into(payload, &mut values);
                RawSamples::I16(values)
            }
            (false, 2) => {
                let mut values = vec![0u16; count];
                B::read_u16_into(payload, &mut values);
                RawSamples::U16(values)
            }
            (true, 4) => {
                let mut values = vec![0i32; count];
                B::read_i32_into(payload, &mut values);
                RawSamples::I32(values)
            }
            (false, 4) => {
                let mut values = vec![0u32; count];
                B::read_u32_into(payload, &mut values);
                RawSamples::U32(values)
            }
            (true, 8) => {
                let mut values = vec![0i64; count];
                B::read_i64_into(payload, &mut values);
                RawSamples::I64(values)
            }
            (false, 8) => {
                let mut values = vec![0u64; count];
                B::read_u64_into(payload, &mut values);
                RawSamples::U64(values)
            }
            (_, width) => return Err(IsfError::UnsupportedSampleWidth(width)),
        };
        Ok(samples)
    }
}
