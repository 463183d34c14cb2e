//! Metric names recorded by the Store.
//!
//! The runtime records through the `metrics` facade only. Installing an
//! exporter (and calling [`describe_metrics`] once) is up to the binary.

use metrics::{describe_counter, describe_histogram};

/// Counter of applied actions, labelled by `kind`
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Histogram of time spent inside the reducer
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Counter of handle calls made after the store scope ended
pub const CLOSED_REJECTED_ACTIONS: &str = "store.closed.rejected_actions";

/// Counter of sends aborted by the effect feedback limit
pub const FEEDBACK_LIMIT_EXCEEDED: &str = "store.feedback.limit_exceeded";

/// Register descriptions for every Store metric with the installed recorder
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions applied by a store");
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken by the reducer to apply one action"
    );
    describe_counter!(
        CLOSED_REJECTED_ACTIONS,
        "Reads or dispatches attempted after the store was closed"
    );
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED,
        "Sends aborted because effects dispatched too many nested actions"
    );
}
