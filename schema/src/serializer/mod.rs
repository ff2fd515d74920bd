//! Export of the namespace registry and attribute tables.
//!
//! Only JSON is produced ([`json`]); it is the artifact format written by
//! `oxml-build` and checked by the conformance suite.

pub mod json;
