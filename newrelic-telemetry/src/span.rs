// Copyright 2019 New Relic Corporation. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use serde::Serialize;

use crate::AttributeValue;

/// A single span record as the trace ingest API expects it.
///
/// Identifiers are fixed-width lowercase hex strings: 32 characters for
/// `trace_id`, 16 for `id` and `parent_id`. A root span has no `parent_id`
/// and the key must be entirely absent from the serialized record, not an
/// empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub name: String,
    pub id: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub service_name: String,
    pub timestamp: SystemTime,
    pub duration: Duration,
    pub attributes: HashMap<String, AttributeValue>,
}
