use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{Config, WhitelistTier};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    // At every update the full list for the tier should be sent,
    // previous members of the tier are dropped
    SetPaidWhitelist {
        addresses: Vec<String>,
    },
    SetFreeWhitelist {
        addresses: Vec<String>,
    },
    SetActiveSale {
        enabled: bool,
    },
    SetPublicSale {
        enabled: bool,
    },
    SetPlinftWallet {
        address: String,
    },
    MintItem {
        recipient: String,
        token_id: u64,
    },
    PublicMint {
        recipient: String,
        token_id: u64,
    },
    WithdrawAll {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(WhitelistEntryResponse)]
    WhitelistEntry { address: String },
    #[returns(MembersResponse)]
    Members {
        tier: WhitelistTier,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(MintedCountResponse)]
    MintedCount { address: String },
}

#[cw_serde]
pub struct WhitelistEntryResponse {
    pub tier: Option<WhitelistTier>,
}

#[cw_serde]
pub struct MembersResponse {
    pub members: Vec<String>,
}

#[cw_serde]
pub struct MintedCountResponse {
    pub count: u32,
}
