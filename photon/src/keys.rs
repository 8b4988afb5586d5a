//! Store prefixes of the module's collections.

pub const PARAMS: &str = "photon/params";
