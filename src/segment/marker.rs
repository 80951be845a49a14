// src/segment/marker.rs

/// Byte-level layout of the `:CURVE #<n><len>` directive that separates the
/// text header from the binary block
#[derive(Debug, Clone, Copy)]
pub struct BlockMarker;

impl BlockMarker {
    /// Shared prefix of both spellings (`:CURV #` and `:CURVE #`)
    pub const TAG: &'static [u8; 5] = b":CURV";
    /// Byte that follows [`Self::TAG`] in the long spelling
    pub const LONG_FORM_SUFFIX: u8 = b'E';
    /// `:CURVE #`
    pub const LONG_DIRECTIVE_LEN: usize = 8;
    /// `:CURV #`
    pub const SHORT_DIRECTIVE_LEN: usize = 7;

    /// Length of the directive text, given whether the long spelling was used
    pub const fn directive_len(long_form: bool) -> usize {
        if long_form {
            Self::LONG_DIRECTIVE_LEN
        } else {
            Self::SHORT_DIRECTIVE_LEN
        }
    }
}
