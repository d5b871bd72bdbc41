// ABOUTME: HTTP middleware for cross-origin access and request tracing on the mirror routes
// ABOUTME: Wraps tower-http CORS and trace layers configured from the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request tracing spans
pub mod trace;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use trace::{create_request_span, setup_trace_layer, RequestTraceLayer};
