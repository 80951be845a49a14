// src/utils/mod.rs
mod string_encoding;
mod search;

pub(crate) use string_encoding::*;
pub(crate) use search::*;
