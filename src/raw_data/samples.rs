// src/raw_data/samples.rs

/// Decoded integer samples, before calibration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSamples {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
}

macro_rules! each_variant {
    ($samples:expr, $values:ident => $body:expr) => {
        match $samples {
            RawSamples::I8($values) => $body,
            RawSamples::I16($values) => $body,
            RawSamples::I32($values) => $body,
            RawSamples::I64($values) => $body,
            RawSamples::U8($values) => $body,
            RawSamples::U16($values) => $body,
            RawSamples::U32($values) => $body,
            RawSamples::U64($values) => $body,
        }
    };
}

impl RawSamples {
    pub fn len(&self) -> usize {
        each_variant!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample `index` as `f64`; 64-bit values beyond 2^53 lose precision
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        each_variant!(self, values => values.get(index).map(|&v| v as f64))
    }

    pub fn to_f64(&self) -> Vec<f64> {
        each_variant!(self, values => values.iter().map(|&v| v as f64).collect())
    }

    /// Widen every sample losslessly, regardless of width and signedness
    pub fn to_i128(&self) -> Vec<i128> {
        each_variant!(self, values => values.iter().map(|&v| v as i128).collect())
    }
}
