//! Shared, target-independent logic of the registry viewer.
//!
//! Nothing here touches the DOM, so everything is tested natively.

pub mod domain;
pub mod shared;
