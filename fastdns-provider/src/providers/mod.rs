//! DNS Provider implementations

mod fastdns;

pub use fastdns::{FastdnsProvider, FastdnsProviderBuilder};
