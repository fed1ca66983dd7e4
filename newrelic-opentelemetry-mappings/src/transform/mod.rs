// Copyright 2019 New Relic Corporation. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! # Transform
//!
//! Maps one finished OpenTelemetry span onto the span record accepted by
//! the trace ingest API: fixed-width hex identifiers, start/duration
//! timing, attribute type normalization, error attributes derived from the
//! span status, and the fixed exporter markers.
//!
//! The conversion is a total function with no failure path. Malformed
//! input is not rejected: an empty name is carried as-is and an end time
//! before the start saturates the duration to zero. Validation belongs to
//! the producer and the exporter on either side of it.


use std::collections::HashMap;

use newrelic_telemetry::{AttributeValue, Span};
use opentelemetry::trace::{SpanId, TraceId};

use crate::sdk_span::{KeyValue, SdkSpan, Value};

pub const INSTRUMENTATION_PROVIDER_ATTR_KEY: &str = "instrumentation.provider";
pub const INSTRUMENTATION_PROVIDER_ATTR_VALUE: &str = "opentelemetry";
pub const COLLECTOR_NAME_ATTR_KEY: &str = "collector.name";
pub const COLLECTOR_NAME_ATTR_VALUE: &str = "newrelic-opentelemetry-exporter";
pub const ERROR_CODE_ATTR_KEY: &str = "error.code";
pub const ERROR_MESSAGE_ATTR_KEY: &str = "error.message";

/// Converts a finished OpenTelemetry span to a trace ingest span record.
///
/// Attributes are inserted in three waves: the span's own attributes, the
/// error attributes when the status is not `Ok`, and the fixed exporter
/// markers. Later inserts win key collisions.
pub fn otel_span_to_nr_span(service_name: &str, otel_span: SdkSpan) -> Span {
    let SdkSpan {
        trace_id,
        span_id,
        parent_span_id,
        name,
        start_time,
        end_time,
        status_code,
        status_message,
        attributes: otel_attributes,
    } = otel_span;

    let mut attributes = HashMap::with_capacity(otel_attributes.len() + 4);
    for KeyValue { key, value } in otel_attributes {
        attributes.insert(key.as_str().to_owned(), otel_value_to_nr_value(value));
    }

    if !status_code.is_ok() {
        attributes.insert(
            ERROR_CODE_ATTR_KEY.to_owned(),
            AttributeValue::U32(status_code as u32),
        );
        attributes.insert(
            ERROR_MESSAGE_ATTR_KEY.to_owned(),
            AttributeValue::String(status_message.into_owned()),
        );
    }

    attributes.insert(
        INSTRUMENTATION_PROVIDER_ATTR_KEY.to_owned(),
        INSTRUMENTATION_PROVIDER_ATTR_VALUE.into(),
    );
    attributes.insert(
        COLLECTOR_NAME_ATTR_KEY.to_owned(),
        COLLECTOR_NAME_ATTR_VALUE.into(),
    );

    let parent_id =
        (parent_span_id != SpanId::INVALID).then(|| otel_span_id_to_hex(parent_span_id));

    Span {
        name: name.into_owned(),
        id: otel_span_id_to_hex(span_id),
        trace_id: otel_trace_id_to_hex(trace_id),
        parent_id,
        service_name: service_name.to_owned(),
        timestamp: start_time,
        // Duration is unsigned, an end before start saturates to zero
        duration: end_time.duration_since(start_time).unwrap_or_default(),
        attributes,
    }
}

/// Normalizes an attribute value to the type set the backend accepts.
///
/// 32-bit integers keep their width, every other integer width maps to the
/// 64-bit variant of the same signedness.
fn otel_value_to_nr_value(value: Value) -> AttributeValue {
    match value {
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::F32(f) => AttributeValue::F32(f),
        Value::F64(f) => AttributeValue::F64(f),
        Value::I32(i) => AttributeValue::I32(i),
        Value::I8(i) => AttributeValue::I64(i.into()),
        Value::I16(i) => AttributeValue::I64(i.into()),
        Value::I64(i) => AttributeValue::I64(i),
        Value::U32(u) => AttributeValue::U32(u),
        Value::U8(u) => AttributeValue::U64(u.into()),
        Value::U16(u) => AttributeValue::U64(u.into()),
        Value::U64(u) => AttributeValue::U64(u),
        Value::String(s) => AttributeValue::String(s.into_owned()),
    }
}

fn otel_span_id_to_hex(span_id: SpanId) -> String {
    format!("{:016x}", u64::from_be_bytes(span_id.to_bytes()))
}

fn otel_trace_id_to_hex(trace_id: TraceId) -> String {
    format!("{:032x}", u128::from_be_bytes(trace_id.to_bytes()))
}
