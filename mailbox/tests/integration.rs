//! Integration tests for the mailbox contract using cw-multi-test.
//!
//! A cw20-base instance stands in for the external fee ledger.

use cosmwasm_std::{Addr, Uint128};
use cw20::{Cw20Coin, Cw20ExecuteMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use mailbox::msg::{
    ConfigResponse, DeliveredResponse, DispatchFeeResponse, ExecuteMsg, InstantiateMsg,
    LatestDispatchedIdResponse, NonceResponse, ProcessedAtResponse, ProcessorResponse, QueryMsg,
};

const LOCAL_DOMAIN: u64 = 517164068468;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_mailbox() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mailbox::contract::execute,
        mailbox::contract::instantiate,
        mailbox::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// Deploy a cw20 fee ledger and a mailbox configured to use it.
///
/// Returns (app, mailbox, fee_token, owner, user1, user2); owner, user1 and
/// user2 each start with 1000 fee tokens.
fn setup() -> (App, Addr, Addr, Addr, Addr, Addr) {
    let mut app = App::default();

    let owner = Addr::unchecked("owner");
    let user1 = Addr::unchecked("user1");
    let user2 = Addr::unchecked("user2");

    let cw20_code_id = app.store_code(contract_cw20());
    let fee_token = app
        .instantiate_contract(
            cw20_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Fee Token".to_string(),
                symbol: "FEE".to_string(),
                decimals: 6,
                initial_balances: vec![
                    Cw20Coin {
                        address: owner.to_string(),
                        amount: Uint128::new(1000),
                    },
                    Cw20Coin {
                        address: user1.to_string(),
                        amount: Uint128::new(1000),
                    },
                    Cw20Coin {
                        address: user2.to_string(),
                        amount: Uint128::new(1000),
                    },
                ],
                mint: None,
                marketing: None,
            },
            &[],
            "fee-token",
            None,
        )
        .unwrap();

    let mailbox_code_id = app.store_code(contract_mailbox());
    let mailbox_addr = app
        .instantiate_contract(
            mailbox_code_id,
            owner.clone(),
            &InstantiateMsg {
                local_domain: LOCAL_DOMAIN,
                fee_token: Some(fee_token.to_string()),
            },
            &[],
            "mailbox",
            None,
        )
        .unwrap();

    (app, mailbox_addr, fee_token, owner, user1, user2)
}

fn attr_value(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

fn query_nonce(app: &App, mailbox_addr: &Addr) -> u64 {
    let res: NonceResponse = app
        .wrap()
        .query_wasm_smart(mailbox_addr, &QueryMsg::Nonce {})
        .unwrap();
    res.nonce
}

fn query_dispatch_fee(app: &App, mailbox_addr: &Addr) -> Uint128 {
    let res: DispatchFeeResponse = app
        .wrap()
        .query_wasm_smart(mailbox_addr, &QueryMsg::DispatchFee {})
        .unwrap();
    res.amount
}

fn query_cw20_balance(app: &App, token: &Addr, account: &Addr) -> Uint128 {
    let res: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn dispatch(
    app: &mut App,
    sender: &Addr,
    mailbox_addr: &Addr,
    destination_domain: u64,
    recipient: &str,
    body: &str,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        sender.clone(),
        mailbox_addr.clone(),
        &ExecuteMsg::Dispatch {
            destination_domain,
            recipient: recipient.to_string(),
            body: body.to_string(),
        },
        &[],
    )
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_instantiate() {
    let (app, mailbox_addr, fee_token, owner, _, _) = setup();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.local_domain, LOCAL_DOMAIN);
    assert_eq!(config.owner, owner);
    assert_eq!(config.default_ism, "default_ism");
    assert_eq!(config.default_hook, "default_hook");
    assert_eq!(config.required_hook, "required_hook");
    assert_eq!(config.dispatch_fee, Uint128::zero());
    assert_eq!(config.fee_token, Some(fee_token));

    assert_eq!(query_nonce(&app, &mailbox_addr), 0);

    let latest: LatestDispatchedIdResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::LatestDispatchedId {})
        .unwrap();
    assert_eq!(latest.message_id, None);
}

// ============================================================================
// Owner-Only Setters
// ============================================================================

#[test]
fn test_owner_set_fee() {
    let (mut app, mailbox_addr, _, owner, _, _) = setup();

    assert_eq!(query_dispatch_fee(&app, &mailbox_addr), Uint128::zero());

    app.execute_contract(
        owner,
        mailbox_addr.clone(),
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(10),
        },
        &[],
    )
    .unwrap();

    assert_eq!(query_dispatch_fee(&app, &mailbox_addr), Uint128::new(10));
}

#[test]
fn test_non_owner_cannot_set_fee() {
    let (mut app, mailbox_addr, _, _, user1, _) = setup();

    let res = app.execute_contract(
        user1,
        mailbox_addr.clone(),
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(50),
        },
        &[],
    );

    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Only the contract owner"));
    assert_eq!(query_dispatch_fee(&app, &mailbox_addr), Uint128::zero());
}

#[test]
fn test_set_default_ism() {
    let (mut app, mailbox_addr, _, owner, user1, _) = setup();

    app.execute_contract(
        owner,
        mailbox_addr.clone(),
        &ExecuteMsg::SetDefaultIsm {
            module: "new_ism".to_string(),
        },
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.default_ism, "new_ism");

    let res = app.execute_contract(
        user1,
        mailbox_addr,
        &ExecuteMsg::SetDefaultIsm {
            module: "bad_ism".to_string(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Only the contract owner"));
}

#[test]
fn test_set_default_hook() {
    let (mut app, mailbox_addr, _, owner, user1, _) = setup();

    app.execute_contract(
        owner,
        mailbox_addr.clone(),
        &ExecuteMsg::SetDefaultHook {
            hook: "some_hook".to_string(),
        },
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.default_hook, "some_hook");

    let res = app.execute_contract(
        user1,
        mailbox_addr,
        &ExecuteMsg::SetDefaultHook {
            hook: "bad_hook".to_string(),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Only the contract owner"));
}

#[test]
fn test_set_required_hook() {
    let (mut app, mailbox_addr, _, owner, user1, _) = setup();

    app.execute_contract(
        owner,
        mailbox_addr.clone(),
        &ExecuteMsg::SetRequiredHook {
            hook: "req_hook".to_string(),
        },
        &[],
    )
    .unwrap();

    let config: ConfigResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.required_hook, "req_hook");

    let res = app.execute_contract(
        user1,
        mailbox_addr,
        &ExecuteMsg::SetRequiredHook {
            hook: "other_hook".to_string(),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Only the contract owner"));
}

#[test]
fn test_update_owner() {
    let (mut app, mailbox_addr, _, owner, user1, _) = setup();

    app.execute_contract(
        owner.clone(),
        mailbox_addr.clone(),
        &ExecuteMsg::UpdateOwner {
            new_owner: user1.to_string(),
        },
        &[],
    )
    .unwrap();

    // New owner can configure; the old owner cannot.
    app.execute_contract(
        user1,
        mailbox_addr.clone(),
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(5),
        },
        &[],
    )
    .unwrap();

    let res = app.execute_contract(
        owner,
        mailbox_addr,
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(7),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Only the contract owner"));
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_without_fee() {
    let (mut app, mailbox_addr, fee_token, _, user1, _) = setup();

    let res = dispatch(
        &mut app,
        &user1,
        &mailbox_addr,
        9999,
        "someRecipient",
        "hello cross-chain!",
    )
    .unwrap();

    let message_id = attr_value(&res, "message_id").expect("message_id attribute not found");
    assert!(message_id.starts_with("0x"));
    assert_eq!(message_id.len(), 66);
    assert_eq!(attr_value(&res, "nonce").unwrap(), "0");

    assert_eq!(query_nonce(&app, &mailbox_addr), 1);

    let latest: LatestDispatchedIdResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::LatestDispatchedId {})
        .unwrap();
    assert_eq!(latest.message_id, Some(message_id));

    // No fee was configured, so the ledger is untouched.
    assert_eq!(
        query_cw20_balance(&app, &fee_token, &user1),
        Uint128::new(1000)
    );
}

#[test]
fn test_dispatch_with_fee() {
    let (mut app, mailbox_addr, fee_token, owner, user1, _) = setup();

    app.execute_contract(
        owner.clone(),
        mailbox_addr.clone(),
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(50),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        user1.clone(),
        fee_token.clone(),
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: mailbox_addr.to_string(),
            amount: Uint128::new(50),
            expires: None,
        },
        &[],
    )
    .unwrap();

    let res = dispatch(
        &mut app,
        &user1,
        &mailbox_addr,
        4321,
        "recipientX",
        "fee test message",
    )
    .unwrap();
    assert!(attr_value(&res, "message_id").is_some());

    assert_eq!(
        query_cw20_balance(&app, &fee_token, &user1),
        Uint128::new(950)
    );
    assert_eq!(
        query_cw20_balance(&app, &fee_token, &owner),
        Uint128::new(1050)
    );
}

#[test]
fn test_dispatch_fee_without_allowance_fails() {
    let (mut app, mailbox_addr, fee_token, owner, user1, _) = setup();

    app.execute_contract(
        owner,
        mailbox_addr.clone(),
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(50),
        },
        &[],
    )
    .unwrap();

    let res = dispatch(&mut app, &user1, &mailbox_addr, 4321, "recipientX", "body");
    assert!(res.is_err());

    // The failed dispatch consumed no nonce and recorded no identifier.
    assert_eq!(query_nonce(&app, &mailbox_addr), 0);
    let latest: LatestDispatchedIdResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::LatestDispatchedId {})
        .unwrap();
    assert_eq!(latest.message_id, None);
    assert_eq!(
        query_cw20_balance(&app, &fee_token, &user1),
        Uint128::new(1000)
    );
}

#[test]
fn test_dispatch_fee_without_fee_token_fails() {
    let (mut app, _, _, owner, user1, _) = setup();

    let code_id = app.store_code(contract_mailbox());
    let bare_mailbox = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                local_domain: LOCAL_DOMAIN,
                fee_token: None,
            },
            &[],
            "bare-mailbox",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner,
        bare_mailbox.clone(),
        &ExecuteMsg::SetDispatchFee {
            amount: Uint128::new(10),
        },
        &[],
    )
    .unwrap();

    let res = dispatch(&mut app, &user1, &bare_mailbox, 100, "dest", "body");
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("no fee token is configured"));
}

#[test]
fn test_identical_dispatches_get_unique_ids() {
    let (mut app, mailbox_addr, _, _, user1, _) = setup();

    let first = dispatch(&mut app, &user1, &mailbox_addr, 100, "dest", "same body").unwrap();
    let second = dispatch(&mut app, &user1, &mailbox_addr, 100, "dest", "same body").unwrap();

    let id1 = attr_value(&first, "message_id").unwrap();
    let id2 = attr_value(&second, "message_id").unwrap();
    assert_ne!(id1, id2);
    assert_eq!(query_nonce(&app, &mailbox_addr), 2);
}

// ============================================================================
// Process
// ============================================================================

#[test]
fn test_process_message() {
    let (mut app, mailbox_addr, _, _, user1, user2) = setup();

    let res = dispatch(
        &mut app,
        &user1,
        &mailbox_addr,
        555,
        "mockRecipient",
        "payload",
    )
    .unwrap();
    let message_id = attr_value(&res, "message_id").unwrap();

    app.execute_contract(
        user2.clone(),
        mailbox_addr.clone(),
        &ExecuteMsg::Process {
            metadata: "testMetadata".to_string(),
            message_id: message_id.clone(),
        },
        &[],
    )
    .unwrap();

    let delivered: DeliveredResponse = app
        .wrap()
        .query_wasm_smart(
            &mailbox_addr,
            &QueryMsg::Delivered {
                message_id: message_id.clone(),
            },
        )
        .unwrap();
    assert!(delivered.delivered);

    let processor: ProcessorResponse = app
        .wrap()
        .query_wasm_smart(
            &mailbox_addr,
            &QueryMsg::Processor {
                message_id: message_id.clone(),
            },
        )
        .unwrap();
    assert_eq!(processor.processor, Some(user2.clone()));

    let processed_at: ProcessedAtResponse = app
        .wrap()
        .query_wasm_smart(
            &mailbox_addr,
            &QueryMsg::ProcessedAt {
                message_id: message_id.clone(),
            },
        )
        .unwrap();
    assert!(processed_at.block_height > 0);

    // Replay must fail and leave the record untouched.
    let res = app.execute_contract(
        user1,
        mailbox_addr.clone(),
        &ExecuteMsg::Process {
            metadata: "testMetadata".to_string(),
            message_id: message_id.clone(),
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("already delivered"));

    let processor: ProcessorResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::Processor { message_id })
        .unwrap();
    assert_eq!(processor.processor, Some(user2));
}

#[test]
fn test_delivered_and_processor_before_process() {
    let (mut app, mailbox_addr, _, _, user1, _) = setup();

    let res = dispatch(&mut app, &user1, &mailbox_addr, 100, "dest", "unprocessed").unwrap();
    let message_id = attr_value(&res, "message_id").unwrap();

    let delivered: DeliveredResponse = app
        .wrap()
        .query_wasm_smart(
            &mailbox_addr,
            &QueryMsg::Delivered {
                message_id: message_id.clone(),
            },
        )
        .unwrap();
    assert!(!delivered.delivered);

    let processor: ProcessorResponse = app
        .wrap()
        .query_wasm_smart(
            &mailbox_addr,
            &QueryMsg::Processor {
                message_id: message_id.clone(),
            },
        )
        .unwrap();
    assert_eq!(processor.processor, None);

    let processed_at: ProcessedAtResponse = app
        .wrap()
        .query_wasm_smart(&mailbox_addr, &QueryMsg::ProcessedAt { message_id })
        .unwrap();
    assert_eq!(processed_at.block_height, 0);
}

/// Processing an identifier that was never dispatched locally still works:
/// inbound ids originate on other domains and are trusted at this layer.
#[test]
fn test_process_foreign_identifier() {
    let (mut app, mailbox_addr, _, _, user1, _) = setup();

    let foreign_id = format!("0x{}", "ab".repeat(32));
    app.execute_contract(
        user1,
        mailbox_addr.clone(),
        &ExecuteMsg::Process {
            metadata: String::new(),
            message_id: foreign_id.clone(),
        },
        &[],
    )
    .unwrap();

    let delivered: DeliveredResponse = app
        .wrap()
        .query_wasm_smart(
            &mailbox_addr,
            &QueryMsg::Delivered {
                message_id: foreign_id,
            },
        )
        .unwrap();
    assert!(delivered.delivered);
}
