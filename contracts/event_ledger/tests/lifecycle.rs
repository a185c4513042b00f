#![cfg(test)]

use claim_token::{ClaimToken, ClaimTokenClient};
use event_ledger::{Error, EventLedger, EventLedgerClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

struct TestContext {
    env: Env,
    organizer: Address,
    alice: Address,
    bob: Address,
    stablecoin: Address,
    ledger_id: Address,
    ledger: EventLedgerClient<'static>,
    claims: ClaimTokenClient<'static>,
}

fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let organizer = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let stablecoin_admin = Address::generate(&env);

    // Deploy stablecoin (use Stellar Asset Contract)
    let stablecoin = env
        .register_stellar_asset_contract_v2(stablecoin_admin)
        .address();

    // Alice holds 100, Bob 50
    let stablecoin_admin_client = token::StellarAssetClient::new(&env, &stablecoin);
    stablecoin_admin_client.mint(&alice, &100);
    stablecoin_admin_client.mint(&bob, &50);

    // Deploy claim token
    let claim_token_id = env.register_contract(None, ClaimToken);
    let claims = ClaimTokenClient::new(&env, &claim_token_id);
    claims.initialize(&admin);

    // Deploy ledger and let it mint claims
    let ledger_id = env.register_contract(None, EventLedger);
    let ledger = EventLedgerClient::new(&env, &ledger_id);
    ledger.initialize(&admin, &claim_token_id);
    claims.add_operator(&ledger_id);

    TestContext {
        env,
        organizer,
        alice,
        bob,
        stablecoin,
        ledger_id,
        ledger,
        claims,
    }
}

#[test]
fn test_full_event_lifecycle() {
    let ctx = setup_test();
    let stablecoin = token::Client::new(&ctx.env, &ctx.stablecoin);

    // 1. Organizer creates the event at 2 per ticket
    let event_id = ctx.ledger.create_event(
        &ctx.organizer,
        &String::from_str(&ctx.env, "my_event"),
        &2,
        &ctx.stablecoin,
    );

    // 2. Alice sponsors 5, Bob 15
    ctx.ledger.sponsor(&event_id, &ctx.alice, &5);
    assert_eq!(stablecoin.balance(&ctx.alice), 95);
    assert_eq!(ctx.claims.balance_of(&event_id, &ctx.alice), 5);

    ctx.ledger.sponsor(&event_id, &ctx.bob, &15);
    assert_eq!(ctx.claims.balance_of(&event_id, &ctx.bob), 15);

    // 3. Alice buys 4 tickets, Bob 16
    ctx.ledger.buy_tickets(&event_id, &ctx.alice, &4);
    assert_eq!(ctx.ledger.get_event(&event_id).gains_balance, 8);
    assert_eq!(stablecoin.balance(&ctx.alice), 87);

    ctx.ledger.buy_tickets(&event_id, &ctx.bob, &16);
    assert_eq!(ctx.ledger.get_event(&event_id).gains_balance, 40);
    assert_eq!(stablecoin.balance(&ctx.bob), 3);

    // 4. Organizer withdraws 1 from the treasury
    assert_eq!(ctx.ledger.get_event(&event_id).treasury_balance, 20);
    ctx.ledger.withdraw_funds(&event_id, &ctx.organizer, &1);
    assert_eq!(ctx.ledger.get_event(&event_id).treasury_balance, 19);
    assert_eq!(stablecoin.balance(&ctx.organizer), 1);

    // 5. Organizer closes the event
    ctx.ledger.close_event(&event_id, &ctx.organizer);
    assert!(!ctx.ledger.get_event(&event_id).active);

    // 6. No more tickets
    let result = ctx.ledger.try_buy_tickets(&event_id, &ctx.alice, &3);
    assert_eq!(result, Err(Ok(Error::EventClosed)));

    // 7. Alice redeems her 5 of 20 claims against 40 gains
    let info = ctx.ledger.get_event(&event_id);
    assert_eq!(info.gains_balance, 40);
    assert_eq!(info.total_claim_supply, 20);

    assert_eq!(ctx.ledger.withdraw_earnings(&event_id, &ctx.alice), 10);
    assert_eq!(ctx.ledger.get_event(&event_id).gains_balance, 30);
    assert_eq!(ctx.claims.balance_of(&event_id, &ctx.alice), 0);
    assert_eq!(stablecoin.balance(&ctx.alice), 97);

    // 8. Bob takes the rest
    assert_eq!(ctx.ledger.withdraw_earnings(&event_id, &ctx.bob), 30);
    assert_eq!(stablecoin.balance(&ctx.bob), 33);

    // 9. Closed record stays queryable with only the treasury left
    let info = ctx.ledger.get_event(&event_id);
    assert_eq!(info.gains_balance, 0);
    assert_eq!(info.total_claim_supply, 0);
    assert_eq!(info.treasury_balance, 19);
    assert_eq!(stablecoin.balance(&ctx.ledger_id), 19);
}

#[test]
fn test_conservation_across_mixed_sequence() {
    let ctx = setup_test();
    let carol = Address::generate(&ctx.env);

    let event_id = ctx.ledger.create_event(
        &ctx.organizer,
        &String::from_str(&ctx.env, "festival"),
        &3,
        &ctx.stablecoin,
    );

    ctx.ledger.sponsor(&event_id, &ctx.alice, &7);
    ctx.ledger.buy_tickets(&event_id, &ctx.bob, &5);
    ctx.ledger.sponsor(&event_id, &ctx.bob, &11);
    ctx.ledger.withdraw_funds(&event_id, &ctx.organizer, &4);
    ctx.claims.transfer(&event_id, &ctx.bob, &carol, &3);
    ctx.ledger.buy_tickets(&event_id, &ctx.alice, &2);
    ctx.ledger.withdraw_earnings(&event_id, &carol);
    ctx.ledger.close_event(&event_id, &ctx.organizer);
    ctx.ledger.withdraw_earnings(&event_id, &ctx.alice);
    ctx.ledger.withdraw_funds(&event_id, &ctx.organizer, &10);

    let info = ctx.ledger.get_event(&event_id);
    assert_eq!(info.total_sponsored, 18);
    assert_eq!(info.total_ticket_revenue, 21);
    assert_eq!(info.total_withdrawn + info.treasury_balance, info.total_sponsored);
    assert_eq!(
        info.total_earnings_paid + info.gains_balance,
        info.total_ticket_revenue
    );

    // Only Bob's 8 claims remain outstanding
    assert_eq!(info.total_claim_supply, 8);
    assert_eq!(
        ctx.claims.balance_of(&event_id, &ctx.alice)
            + ctx.claims.balance_of(&event_id, &ctx.bob)
            + ctx.claims.balance_of(&event_id, &carol),
        info.total_claim_supply
    );

    let stablecoin = token::Client::new(&ctx.env, &ctx.stablecoin);
    assert_eq!(
        stablecoin.balance(&ctx.ledger_id),
        info.treasury_balance + info.gains_balance
    );
}
