// Copyright 2019 New Relic Corporation. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, time::SystemTime};

use opentelemetry::trace::{SpanId, TraceId};
use opentelemetry::Key;

/// A finished span as handed off by the instrumentation layer
///
/// The SDK's own span record is not constructible from outside the SDK, so
/// the export boundary carries this struct instead, which also lets tests
/// build inputs directly.
#[derive(Debug, Clone)]
pub struct SdkSpan {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    /// `SpanId::INVALID` means the span has no parent.
    pub parent_span_id: SpanId,
    pub name: Cow<'static, str>,
    pub start_time: SystemTime,
    pub end_time: SystemTime,
    pub status_code: StatusCode,
    /// Only meaningful when `status_code` is not `Ok`.
    pub status_message: Cow<'static, str>,
    pub attributes: Vec<KeyValue>,
}

/// Outcome of the traced operation, using the gRPC status code set the
/// tracing API reports. `Ok` is the only non-error value.
#[repr(u32)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    #[default]
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl StatusCode {
    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}

/// A span attribute value as produced by the instrumentation layer.
///
/// This is a closed set of kinds: the transform normalizes attributes with
/// an exhaustive match over exactly these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    String(Cow<'static, str>),
}

macro_rules! impl_from_value {
    ($($from:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$from> for Value {
                fn from(value: $from) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    Cow<'static, str> => String,
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

/// A key/value annotation attached to a span.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: Key,
    pub value: Value,
}

impl KeyValue {
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
