// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const OFFLINE_STEP_MS: u64 = 1000;
pub const MAX_OFFLINE_SECONDS: i64 = 8 * 60 * 60;

// Save format
pub const SAVE_VERSION: u32 = 1;
pub const MAX_SAVE_SLOTS: u8 = 3;

// Action timing: duration = base / (1 + stat * STAT_SPEED_PER_POINT), floored
pub const MIN_ACTION_DURATION_MS: u64 = 250;
pub const STAT_SPEED_PER_POINT: f64 = 0.1;

// Crew
pub const MAX_STAT: u32 = 10;
pub const MAX_CREW: usize = 8;
pub const RECRUIT_CANDIDATES: usize = 2;
pub const RECRUIT_MAX_STARTING_STAT: u32 = 4;

// Economy
pub const STARTING_MONEY: u64 = 100;
pub const BUSINESS_CYCLE_MS: u64 = 10_000;
pub const MAX_PENDING_CYCLES: u64 = 10;

// Heat
pub const MAX_HEAT: u32 = 100;
pub const HEAT_DECAY_INTERVAL_MS: u64 = 15_000;
pub const HEAT_DECAY_AMOUNT: u32 = 1;
pub const RAID_HEAT_THRESHOLD: u32 = 75;
pub const RAID_CHECK_INTERVAL_MS: u64 = 30_000;
pub const RAID_MONEY_LOSS_PERCENT: u64 = 25;
pub const RAID_HEAT_FLOOR: u32 = 40;
