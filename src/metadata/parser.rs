// src/metadata/parser.rs
use crate::error::{IsfError, Result};
use crate::metadata::{Header, KeyAliasTable};
use crate::reader::MissingFieldPolicy;
use tracing::{trace, warn};

/// Namespace prefix used by the two header dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDialect {
    /// `:WFMPRE:BYT_NR 1;BN_FMT RI;...`
    Long,
    /// `:WFMP:BYT_N 1;BN_F RI;...`
    Short,
}

impl HeaderDialect {
    pub const fn prefix(&self) -> &'static str {
        match self {
            HeaderDialect::Long => ":WFMPRE:",
            HeaderDialect::Short => ":WFMP:",
        }
    }

    /// `:WFMPRE:` wins when present; anything else is treated as `:WFMP:`
    pub fn detect(text: &str) -> Self {
        if text.contains(HeaderDialect::Long.prefix()) {
            HeaderDialect::Long
        } else {
            HeaderDialect::Short
        }
    }
}

/// Parse header text into a canonical [`Header`], warning about missing fields
///
/// ```
/// use isf_rs::{parse_header, HeaderField};
///
/// let header = parse_header(":WFMP:BYT_N 2;NR_P 500;YMU 1.5E-3;:CURV #41000").unwrap();
/// assert_eq!(header.integer(HeaderField::ByteNr).unwrap(), 2);
/// assert_eq!(header.integer(HeaderField::NumPoints).unwrap(), 500);
/// assert!(header.get(HeaderField::YZero).is_missing());
/// ```
pub fn parse_header(text: &str) -> Result<Header> {
    parse_header_with_policy(text, MissingFieldPolicy::default())
}

/// Parse header text, handling missing fields according to `policy`
pub fn parse_header_with_policy(text: &str, policy: MissingFieldPolicy) -> Result<Header> {
    let header = parse_fields(text)?;
    check_missing(&header, policy)?;
    Ok(header)
}

/// Tokenize and coerce without looking at which fields are missing
pub(crate) fn parse_fields(text: &str) -> Result<Header> {
    let table = KeyAliasTable::global();
    let prefix = HeaderDialect::detect(text).prefix();
    let body = text.strip_suffix(';').unwrap_or(text);

    let mut header = Header::new();
    for token in body.split(';') {
        let Some((raw_key, raw_value)) = token.split_once(' ') else {
            trace!(token, "skipping header token without value");
            continue;
        };

        let key = raw_key.replace(prefix, "");
        let key = key.trim();
        match table.lookup(key) {
            Some(field) => header.set(field, field.coerce(raw_value)?),
            None => trace!(key, known = table.recognizes(key), "skipping header key"),
        }
    }

    Ok(header)
}

pub(crate) fn check_missing(header: &Header, policy: MissingFieldPolicy) -> Result<()> {
    let missing = header.missing_fields();
    if missing.is_empty() || policy == MissingFieldPolicy::Ignore {
        return Ok(());
    }

    let names = missing
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ");

    match policy {
        MissingFieldPolicy::Error => Err(IsfError::MissingFields(names)),
        _ => {
            warn!(fields = %names, "header field(s) missing in ISF file");
            Ok(())
        }
    }
}
