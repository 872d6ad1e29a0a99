/// Global constants used across the inspector
///
/// System-wide values that are not configurable at runtime.

// ============================================================================
// ORCA LISTING API
// ============================================================================

/// Public mainnet whirlpool listing endpoint
pub const WHIRLPOOL_LIST_URL: &str = "https://api.mainnet.orca.so/v1/whirlpool/list";

/// Key holding the whirlpool entries in the listing object
pub const WHIRLPOOLS_KEY: &str = "whirlpools";

/// Key identifying a single whirlpool entry
pub const WHIRLPOOL_ADDRESS_KEY: &str = "address";

/// Maximum number of characters printed for raw bodies and scalar payloads
pub const PREVIEW_CHAR_LIMIT: usize = 1000;

// ============================================================================
// WELL-KNOWN POOLS
// ============================================================================

/// SOL/USDC whirlpool
pub const SOL_USDC_WHIRLPOOL: &str = "HJPjoWUrhoZzkNfRpHuieeFk9WcZWjwy6PBjZ81ngndJ";

/// `--pool` alias for [`SOL_USDC_WHIRLPOOL`]
pub const SOL_USDC_WHIRLPOOL_ALIAS: &str = "sol-usdc";
