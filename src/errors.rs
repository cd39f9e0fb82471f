pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_TRANSFER_LOCKED: &str = "Locked until voting ends";
pub const ERR_INSUFFICIENT_TOKENS: &str = "Insufficient tokens to participate in voting";
pub const ERR_ZERO_AMOUNT: &str = "Zero token amount";
pub const ERR_INSUFFICIENT_PAYMENT: &str = "Insufficient payment for buying";
pub const ERR_INSUFFICIENT_LIQUIDITY: &str = "Insufficient contract liquidity for refund";
pub const ERR_VOTING_STILL_ACTIVE: &str = "Voting is still active";
pub const ERR_VOTING_ALREADY_ACTIVE: &str = "Voting already active";
pub const ERR_VOTING_NOT_ACTIVE: &str = "Voting is not active";
pub const ERR_NO_VOTING_SESSION: &str = "No voting session to end";
pub const ERR_ALREADY_INITIALIZED: &str = "Already initialized";
pub const ERR_NOT_INITIALIZED: &str = "Not initialized";
pub const ERR_INVALID_TOKEN_PRICE: &str = "Invalid token price";
pub const ERR_INVALID_FEE: &str = "Fee exceeds 10000 basis points";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_ADMIN_NOT_OWNER: &str = "Admin must be the contract owner";
pub const ERR_INVALID_IMPLEMENTATION: &str = "Invalid implementation";
pub const ERR_TIMESTAMP_OVERFLOW: &str = "Timestamp overflow";
