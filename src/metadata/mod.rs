// src/metadata/mod.rs
mod header;
mod key_alias;
mod parser;

pub use header::Header;
pub use key_alias::KeyAliasTable;
pub use parser::{parse_header, parse_header_with_policy, HeaderDialect};
pub(crate) use parser::{check_missing, parse_fields};
