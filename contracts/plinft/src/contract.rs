#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdResult, Uint128,
};

use cw_utils::{may_pay, maybe_addr, nonpayable};

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, MembersResponse, MintedCountResponse, QueryMsg,
    WhitelistEntryResponse,
};
use crate::state::{Config, WhitelistTier, CONFIG, MINTED, WHITELIST};

use cw2::set_contract_version;
use cw_storage_plus::Bound;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:plinft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// 0.08 of the six-decimal native coin, fixed like the original sale
pub const MINT_DENOM: &str = "uatom";
pub const MINT_PRICE: Uint128 = Uint128::new(80_000);
// One mint per wallet across all token ids
pub const PER_ADDRESS_LIMIT: u32 = 1;

const PAGINATION_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    let config = Config {
        owner: info.sender.clone(),
        plinft_wallet: info.sender.clone(),
        active_sale: false,
        public_sale: false,
        mint_price: Coin {
            denom: MINT_DENOM.to_string(),
            amount: MINT_PRICE,
        },
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("mint_price", config.mint_price.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetPaidWhitelist { addresses } => {
            set_whitelist(deps, env, info, addresses, WhitelistTier::Paid)
        }
        ExecuteMsg::SetFreeWhitelist { addresses } => {
            set_whitelist(deps, env, info, addresses, WhitelistTier::Free)
        }
        ExecuteMsg::SetActiveSale { enabled } => set_active_sale(deps, env, info, enabled),
        ExecuteMsg::SetPublicSale { enabled } => set_public_sale(deps, env, info, enabled),
        ExecuteMsg::SetPlinftWallet { address } => set_plinft_wallet(deps, env, info, address),
        ExecuteMsg::MintItem {
            recipient,
            token_id,
        } => mint_item(deps, env, info, recipient, token_id),
        ExecuteMsg::PublicMint {
            recipient,
            token_id,
        } => public_mint(deps, env, info, recipient, token_id),
        ExecuteMsg::WithdrawAll {} => withdraw_all(deps, env, info),
    }
}

pub fn set_whitelist(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    addresses: Vec<String>,
    tier: WhitelistTier,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    // Each call carries the full list for the tier, drop previous members
    let mut previous_members: Vec<Addr> = Vec::new();
    for item in WHITELIST.range(deps.storage, None, None, Order::Ascending) {
        let (member, member_tier) = item?;
        if member_tier == tier {
            previous_members.push(member);
        }
    }
    for member in previous_members {
        WHITELIST.remove(deps.storage, member);
    }

    // Remove duplicates
    let mut unvalidated_members = addresses;
    unvalidated_members.sort_unstable();
    unvalidated_members.dedup();

    let member_count = unvalidated_members.len();
    for member in unvalidated_members {
        WHITELIST.save(deps.storage, deps.api.addr_validate(&member)?, &tier)?;
    }

    Ok(Response::default()
        .add_attribute(
            "action",
            match tier {
                WhitelistTier::Paid => "set_paid_whitelist",
                WhitelistTier::Free => "set_free_whitelist",
            },
        )
        .add_attribute("member_count", member_count.to_string()))
}

pub fn set_active_sale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    config.active_sale = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "set_active_sale")
        .add_attribute("enabled", enabled.to_string()))
}

pub fn set_public_sale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    config.public_sale = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "set_public_sale")
        .add_attribute("enabled", enabled.to_string()))
}

pub fn set_plinft_wallet(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    config.plinft_wallet = deps.api.addr_validate(&address)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "set_plinft_wallet")
        .add_attribute("plinft_wallet", config.plinft_wallet))
}

pub fn mint_item(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.active_sale {
        return Err(ContractError::SaleNotActive {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let tier = WHITELIST
        .may_load(deps.storage, recipient.clone())?
        .ok_or(ContractError::NotWhitelisted {})?;

    let minted = MINTED
        .may_load(deps.storage, recipient.clone())?
        .unwrap_or(0);
    if minted >= PER_ADDRESS_LIMIT {
        return Err(ContractError::MaxTokensExceeded {});
    }

    let required = match tier {
        WhitelistTier::Paid => config.mint_price.amount,
        WhitelistTier::Free => Uint128::zero(),
    };
    let sent = may_pay(&info, &config.mint_price.denom)?;
    // Exact amount must be paid
    if sent != required {
        return Err(ContractError::IncorrectPaymentAmount {
            expected: required,
            sent,
        });
    }

    MINTED.save(deps.storage, recipient.clone(), &(minted + 1))?;

    Ok(mint_response(
        "mint_item",
        info.sender,
        recipient,
        token_id,
    ))
}

pub fn public_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.public_sale {
        return Err(ContractError::SaleNotActive {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let minted = MINTED
        .may_load(deps.storage, recipient.clone())?
        .unwrap_or(0);
    if minted >= PER_ADDRESS_LIMIT {
        return Err(ContractError::MaxTokensExceeded {});
    }

    let sent = may_pay(&info, &config.mint_price.denom)?;
    // Exact amount must be paid
    if sent != config.mint_price.amount {
        return Err(ContractError::IncorrectPaymentAmount {
            expected: config.mint_price.amount,
            sent,
        });
    }

    MINTED.save(deps.storage, recipient.clone(), &(minted + 1))?;

    Ok(mint_response(
        "public_mint",
        info.sender,
        recipient,
        token_id,
    ))
}

// Single-unit mint notification, from is omitted on mints
fn mint_response(action: &str, operator: Addr, recipient: Addr, token_id: u64) -> Response {
    Response::new()
        .add_event(
            Event::new("transfer_single")
                .add_attribute("operator", operator)
                .add_attribute("to", recipient.clone())
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("amount", "1"),
        )
        .add_attribute("action", action)
        .add_attribute("recipient", recipient)
        .add_attribute("token_id", token_id.to_string())
}

pub fn withdraw_all(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let balance = deps.querier.query_all_balances(env.contract.address)?;
    if balance.is_empty() {
        return Err(ContractError::NothingToWithdraw {});
    }

    let bank_msg = BankMsg::Send {
        to_address: config.plinft_wallet.clone().into_string(),
        amount: balance,
    };

    Ok(Response::new()
        .add_message(bank_msg)
        .add_attribute("action", "withdraw_all")
        .add_attribute("recipient", config.plinft_wallet))
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::WhitelistEntry { address } => {
            to_json_binary(&query_whitelist_entry(deps, env, address)?)
        }
        QueryMsg::Members {
            tier,
            start_after,
            limit,
        } => to_json_binary(&query_members(deps, env, tier, start_after, limit)?),
        QueryMsg::MintedCount { address } => {
            to_json_binary(&query_minted_count(deps, env, address)?)
        }
    }
}

fn query_config(deps: Deps, _env: Env) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_whitelist_entry(
    deps: Deps,
    _env: Env,
    address: String,
) -> Result<WhitelistEntryResponse, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let tier = WHITELIST.may_load(deps.storage, address)?;
    Ok(WhitelistEntryResponse { tier })
}

fn query_members(
    deps: Deps,
    _env: Env,
    tier: WhitelistTier,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<MembersResponse, ContractError> {
    let start = maybe_addr(deps.api, start_after)?.map(Bound::exclusive);
    let limit = limit.unwrap_or(PAGINATION_LIMIT).min(PAGINATION_LIMIT) as usize;

    let mut members: Vec<String> = Vec::new();
    for item in WHITELIST.range(deps.storage, start, None, Order::Ascending) {
        let (member, member_tier) = item?;
        if member_tier == tier {
            members.push(member.into_string());
        }
        if members.len() >= limit {
            break;
        }
    }
    Ok(MembersResponse { members })
}

fn query_minted_count(
    deps: Deps,
    _env: Env,
    address: String,
) -> Result<MintedCountResponse, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let count = MINTED.may_load(deps.storage, address)?.unwrap_or(0);
    Ok(MintedCountResponse { count })
}
