// PDA namespaces
pub const STAKE_SEED: &[u8] = b"stake";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

// Stake mint
pub const TOKEN_DECIMALS: u8 = 9;
pub const UNITS_PER_TOKEN: u64 = 1_000_000_000;

// Points
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const POINTS_SCALE: u64 = 1_000_000; // total_points is fixed-point x10^6
pub const POINTS_PER_UNIT_SECOND: u64 = 1; // scaled points per staked base unit per second
