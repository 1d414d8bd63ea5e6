use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub plinft_wallet: Addr,
    pub active_sale: bool,
    pub public_sale: bool,
    pub mint_price: Coin,
}

/// Whitelist tier of a pre-approved address. Paid members pay the full
/// mint price during the active sale, free members pay nothing.
#[cw_serde]
pub enum WhitelistTier {
    Paid,
    Free,
}

pub const CONFIG: Item<Config> = Item::new("config");
// Address and whitelist tier, one entry per approved address
pub const WHITELIST: Map<Addr, WhitelistTier> = Map::new("whitelist");
// Address and number of tokens minted, across all token ids
pub const MINTED: Map<Addr, u32> = Map::new("minted");
