//! Deep copy through the codec
//!
//! A route is encoded to an `OrderedNode` and decoded into a fresh route, so
//! the copy shares nothing with the source and the codec round trip is
//! exercised on every call.

use super::route::RouteCodec;
use crate::error::Result;
use crate::options::CodecOptions;
use stepflow_core::Route;

/// Deep copy a route with default codec options
pub fn deep_copy(route: &Route) -> Result<Route> {
    deep_copy_with(route, &CodecOptions::default())
}

/// Deep copy a route with the given codec options
pub fn deep_copy_with(route: &Route, options: &CodecOptions) -> Result<Route> {
    let codec = RouteCodec::with_options(options.clone());
    let node = codec.encode(route)?;
    Ok(codec.decode(&node)?)
}
