pub const ERROR_UNAUTHORIZED: &str = "Unauthorized account";
pub const ERROR_GAME_NOT_READY: &str = "Not enough rewards to play the game";
pub const ERROR_INSUFFICIENT_DONATION: &str = "Donation amount is less than the minimum donation";
pub const ERROR_DUPLICATE_DONATION: &str = "Already donated this epoch";
pub const ERROR_EPOCH_NOT_OVER: &str = "Epoch not over";
pub const ERROR_ALREADY_CLAIMED: &str = "Already claimed";
pub const ERROR_ZERO_ADDRESS: &str = "Zero address";
pub const ERROR_ZERO_AMOUNT: &str = "Amount must be greater than 0";
pub const ERROR_INVALID_REWARD_TOKEN: &str = "Invalid reward token";
pub const ERROR_INVALID_PARAMS: &str = "Invalid epoch parameters";
pub const ERROR_INVALID_POOL_CONFIG: &str = "Invalid pool configuration";
pub const ERROR_INVALID_POOL_RESPONSE: &str = "Invalid pool response";
pub const ERROR_EPOCH_FULL: &str = "Epoch donor limit reached";
