//! Store prefixes of the module's collections.

pub const PARAMS: u8 = 0x00;
pub const ACCOUNTS: u8 = 0x01;
pub const ACCOUNT_NUMBER: u8 = 0x02;
pub const PROPOSALS: u8 = 0x03;
pub const PROPOSAL_NUMBER: u8 = 0x04;
pub const VOTES: u8 = 0x05;
