use cosmwasm_std::coin;
use cw_multi_test::Executor;

use plinft::contract::{MINT_DENOM, MINT_PRICE};
use plinft::error::ContractError;
use plinft::msg::ExecuteMsg;

use crate::helpers::setup::{instantiate_plinft, setup};
use crate::helpers::utils::{get_event_attribute, paid_whitelist_fixture};

#[test]
fn public_mint_succeeds_for_any_address() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let plinft_address = instantiate_plinft(&mut app, res.plinft_code_id, &owner);

    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetActiveSale { enabled: true },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetPublicSale { enabled: true },
        &[],
    )
    .unwrap();

    let res = app
        .execute_contract(
            buyer.clone(),
            plinft_address.clone(),
            &ExecuteMsg::PublicMint {
                recipient: collector.to_string(),
                token_id: 0,
            },
            &[coin(MINT_PRICE.u128(), MINT_DENOM)],
        )
        .unwrap();

    assert_eq!(
        get_event_attribute(&res, "wasm-transfer_single", "operator"),
        buyer.to_string()
    );
    assert_eq!(
        get_event_attribute(&res, "wasm-transfer_single", "to"),
        collector.to_string()
    );
    assert_eq!(get_event_attribute(&res, "wasm-transfer_single", "amount"), "1");
}

#[test]
fn public_mint_wrong_payment_fails() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let plinft_address = instantiate_plinft(&mut app, res.plinft_code_id, &owner);

    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetActiveSale { enabled: true },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetPublicSale { enabled: true },
        &[],
    )
    .unwrap();

    let error = app
        .execute_contract(
            buyer.clone(),
            plinft_address.clone(),
            &ExecuteMsg::PublicMint {
                recipient: collector.to_string(),
                token_id: 0,
            },
            &[coin(40_000, MINT_DENOM)],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::IncorrectPaymentAmount {
            expected: MINT_PRICE,
            sent: 40_000u128.into(),
        }
    );
}

#[test]
fn public_mint_fails_when_public_sale_disabled() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let plinft_address = instantiate_plinft(&mut app, res.plinft_code_id, &owner);

    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetActiveSale { enabled: true },
        &[],
    )
    .unwrap();

    let error = app
        .execute_contract(
            buyer.clone(),
            plinft_address.clone(),
            &ExecuteMsg::PublicMint {
                recipient: collector.to_string(),
                token_id: 0,
            },
            &[coin(MINT_PRICE.u128(), MINT_DENOM)],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::SaleNotActive {});
}

#[test]
fn public_mint_does_not_require_active_sale() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let collector = res.test_accounts.collector;
    let mut app = res.app;
    let plinft_address = instantiate_plinft(&mut app, res.plinft_code_id, &owner);

    // Only the public sale switch is on, the flags are independent
    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetPublicSale { enabled: true },
        &[],
    )
    .unwrap();

    app.execute_contract(
        buyer.clone(),
        plinft_address.clone(),
        &ExecuteMsg::PublicMint {
            recipient: collector.to_string(),
            token_id: 0,
        },
        &[coin(MINT_PRICE.u128(), MINT_DENOM)],
    )
    .unwrap();
}

#[test]
fn whitelisted_address_can_public_mint() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let mut app = res.app;
    let plinft_address = instantiate_plinft(&mut app, res.plinft_code_id, &owner);

    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetActiveSale { enabled: true },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetPublicSale { enabled: true },
        &[],
    )
    .unwrap();

    app.execute_contract(
        buyer.clone(),
        plinft_address.clone(),
        &ExecuteMsg::PublicMint {
            recipient: paid_whitelist_fixture()[0].clone(),
            token_id: 0,
        },
        &[coin(MINT_PRICE.u128(), MINT_DENOM)],
    )
    .unwrap();
}

#[test]
fn mint_cap_is_shared_across_paths() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let buyer = res.test_accounts.buyer;
    let mut app = res.app;
    let plinft_address = instantiate_plinft(&mut app, res.plinft_code_id, &owner);

    let paid_member = paid_whitelist_fixture()[0].clone();
    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetActiveSale { enabled: true },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        plinft_address.clone(),
        &ExecuteMsg::SetPublicSale { enabled: true },
        &[],
    )
    .unwrap();

    app.execute_contract(
        buyer.clone(),
        plinft_address.clone(),
        &ExecuteMsg::MintItem {
            recipient: paid_member.clone(),
            token_id: 0,
        },
        &[coin(MINT_PRICE.u128(), MINT_DENOM)],
    )
    .unwrap();

    let error = app
        .execute_contract(
            buyer.clone(),
            plinft_address.clone(),
            &ExecuteMsg::PublicMint {
                recipient: paid_member,
                token_id: 1,
            },
            &[coin(MINT_PRICE.u128(), MINT_DENOM)],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::MaxTokensExceeded {});
}
