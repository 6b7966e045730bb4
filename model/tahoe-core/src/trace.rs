// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#[cfg(feature = "trajectory-tracing")]
#[doc(hidden)]
pub use tracing::{debug as _debug, trace as _trace};

#[cfg(not(feature = "trajectory-tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __tracing_noop__ {
    ($($fmt:tt)*) => {};
}

#[cfg(not(feature = "trajectory-tracing"))]
#[doc(hidden)]
pub use crate::__tracing_noop__ as _debug;

#[cfg(not(feature = "trajectory-tracing"))]
#[doc(hidden)]
pub use crate::__tracing_noop__ as _trace;
