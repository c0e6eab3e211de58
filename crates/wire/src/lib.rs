// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response documents of the remote alignment service.
//!
//! Wire format: an XML `<response>` envelope carrying one of a submission
//! acknowledgment, a job result, a service list, a ping status or an error.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod envelope;
mod types;

pub use envelope::{decode, Envelope, WireError};
pub use types::{
    ErrorRecord, JobSnapshot, JobStatus, ResultItem, ServiceDescriptor, Submission, INPUT_FILE,
    LOG_FORMAT, SYSTEM_FILE,
};
