// Copyright 2019 New Relic Corporation. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

/// An attribute value in the type set accepted by the trace ingest API.
///
/// 32-bit integers are a distinct variant from 64-bit ones: the backend
/// accepts both widths and they are not interchangeable on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    F32(f32),
    F64(f64),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    String(String),
}

macro_rules! impl_from_value {
    ($($from:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$from> for AttributeValue {
                fn from(value: $from) -> Self {
                    AttributeValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    String => String,
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_owned())
    }
}
