// src/metadata/key_alias.rs
use crate::types::HeaderField;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Key spellings written by `:WFMPRE:` firmware
const LONG_FORM_KEYS: &[(&str, Option<HeaderField>)] = &[
    ("BYT_NR", Some(HeaderField::ByteNr)),
    ("ENCDG", Some(HeaderField::Encoding)),
    ("BN_FMT", Some(HeaderField::BinaryFormat)),
    ("BYT_OR", Some(HeaderField::ByteOrder)),
    ("WFID", Some(HeaderField::WaveformId)),
    ("NR_PT", Some(HeaderField::NumPoints)),
    ("PT_FMT", Some(HeaderField::PointFormat)),
    ("XUNIT", Some(HeaderField::XUnit)),
    ("XINCR", Some(HeaderField::XIncrement)),
    ("XZERO", Some(HeaderField::XZero)),
    ("PT_OFF", Some(HeaderField::PointOffset)),
    ("YUNIT", Some(HeaderField::YUnit)),
    ("YMULT", Some(HeaderField::YMultiplier)),
    ("YOFF", Some(HeaderField::YOffset)),
    ("YZERO", Some(HeaderField::YZero)),
    ("VSCALE", Some(HeaderField::VerticalScale)),
    ("HSCALE", Some(HeaderField::HorizontalScale)),
    ("VPOS", Some(HeaderField::VerticalPosition)),
    ("VOFFSET", Some(HeaderField::VerticalOffset)),
    ("HDELAY", Some(HeaderField::HorizontalDelay)),
    (":CURVE", Some(HeaderField::Curve)),
];

/// Abbreviated spellings written by `:WFMP:` firmware.
///
/// `COMP` and `FILTERF` only exist in this dialect and carry nothing the
/// decoder uses, so they are known but map to no field.
const SHORT_FORM_KEYS: &[(&str, Option<HeaderField>)] = &[
    ("BYT_N", Some(HeaderField::ByteNr)),
    ("ENC", Some(HeaderField::Encoding)),
    ("BN_F", Some(HeaderField::BinaryFormat)),
    ("BYT_O", Some(HeaderField::ByteOrder)),
    ("WFI", Some(HeaderField::WaveformId)),
    ("NR_P", Some(HeaderField::NumPoints)),
    ("PT_F", Some(HeaderField::PointFormat)),
    ("XUN", Some(HeaderField::XUnit)),
    ("XIN", Some(HeaderField::XIncrement)),
    ("XZE", Some(HeaderField::XZero)),
    ("PT_O", Some(HeaderField::PointOffset)),
    ("YUN", Some(HeaderField::YUnit)),
    ("YMU", Some(HeaderField::YMultiplier)),
    ("YOF", Some(HeaderField::YOffset)),
    ("YZE", Some(HeaderField::YZero)),
    ("VSCALE", Some(HeaderField::VerticalScale)),
    ("HSCALE", Some(HeaderField::HorizontalScale)),
    ("VPOS", Some(HeaderField::VerticalPosition)),
    ("VOFFSET", Some(HeaderField::VerticalOffset)),
    ("HDELAY", Some(HeaderField::HorizontalDelay)),
    (":CURV", Some(HeaderField::Curve)),
    ("COMP", None),
    ("FILTERF", None),
];

/// Lookup from raw header key spelling to canonical field
///
/// Built from the long-form list first and the short-form list second, so a
/// short-form entry replaces a long-form entry with the same key.
#[derive(Debug, Clone)]
pub struct KeyAliasTable {
    aliases: HashMap<&'static str, Option<HeaderField>>,
}

impl KeyAliasTable {
    /// Build a table from ordered alias lists; later lists win on collision
    pub fn from_lists(lists: &[&[(&'static str, Option<HeaderField>)]]) -> Self {
        let mut aliases = HashMap::new();
        for list in lists {
            for &(key, field) in list.iter() {
                aliases.insert(key, field);
            }
        }
        KeyAliasTable { aliases }
    }

    /// The process-wide table covering both header dialects
    pub fn global() -> &'static KeyAliasTable {
        static TABLE: OnceLock<KeyAliasTable> = OnceLock::new();
        TABLE.get_or_init(|| KeyAliasTable::from_lists(&[LONG_FORM_KEYS, SHORT_FORM_KEYS]))
    }

    /// Resolve a raw key to its schema field, if it names one
    pub fn lookup(&self, raw_key: &str) -> Option<HeaderField> {
        self.aliases.get(raw_key).copied().flatten()
    }

    /// Whether the key is a known spelling in either dialect
    pub fn recognizes(&self, raw_key: &str) -> bool {
        self.aliases.contains_key(raw_key)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
