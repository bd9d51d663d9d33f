/*!
 * Monitoring
 * Tracing subscriber setup for container events
 */

mod tracer;

pub use tracer::{init_tracing, try_init_tracing, TRACE_JSON_ENV};
