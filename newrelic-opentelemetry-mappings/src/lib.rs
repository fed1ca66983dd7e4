// Copyright 2019 New Relic Corporation. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

mod sdk_span;
mod transform;

pub use sdk_span::{KeyValue, SdkSpan, StatusCode, Value};
pub use transform::{
    otel_span_to_nr_span, COLLECTOR_NAME_ATTR_KEY, COLLECTOR_NAME_ATTR_VALUE, ERROR_CODE_ATTR_KEY,
    ERROR_MESSAGE_ATTR_KEY, INSTRUMENTATION_PROVIDER_ATTR_KEY, INSTRUMENTATION_PROVIDER_ATTR_VALUE,
};

#[cfg(feature = "test-utils")]
pub use transform::transform_tests;
