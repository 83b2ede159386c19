// src/config/consts.rs

// Jar
pub const JAR_ID: &str = "7Y88YyV1uA";
pub const JAR_URL: &str = "https://send.monobank.ua/jar/7Y88YyV1uA";
pub const CURRENCY: &str = "UAH";
pub const DEFAULT_TITLE: &str = "CASE-31";
pub const DEFAULT_GOAL: u64 = 115_000;

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (CASE-31-agent)";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Local data
pub const DATA_DIR: &str = "data";
pub const DATA_FILE: &str = "case31.json";

// Static metadata carried in the record, never touched by a run
pub const CASE_ID: &str = "31";
pub const BRIGADE: &str = "22_OMBr";
pub const BENEFICIARY: &str = "@_s_o_v_e_n_k_o_";
pub const AUTHOR: &str = "@010io";
