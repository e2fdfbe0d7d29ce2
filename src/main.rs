//! Risk calculator walkthrough.
//!
//! Prints the derived display numbers for a handful of position scenarios:
//! snapshots, partial closes, collateral changes, oracle guards, and the
//! stale-response gate.

use risk_core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Position Risk Calculator Walkthrough");
    println!("Display-layer mirror; the on-chain program stays authoritative\n");

    let config = RiskConfig::default();
    config.validate().expect("default config is consistent");

    scenario_1_position_snapshot(&config);
    scenario_2_partial_close(&config);
    scenario_3_collateral_changes(&config);
    scenario_4_oracle_guards(&config);
    scenario_5_stale_response_guard();

    println!("\nAll scenarios completed.");
}

fn sample_position() -> Position {
    Position {
        side: Side::Long,
        entry_price: Price::new_unchecked(dec!(100)),
        size_usd: Usd::new(dec!(1000)),
        collateral_usd: Usd::new(dec!(100)),
        leverage: Leverage::new(dec!(10)).unwrap(),
        order_type: OrderType::Market,
        trigger_price: None,
        is_active: true,
        opened_at: Timestamp::from_millis(0),
        updated_at: Timestamp::from_millis(0),
    }
}

/// The position card: every derived number for a 10x long under water.
fn scenario_1_position_snapshot(config: &RiskConfig) {
    println!("Scenario 1: Position Snapshot\n");

    let pos = sample_position();
    let mark = Price::new_unchecked(dec!(90));
    let snap = compute_risk_snapshot(&pos, mark, config).unwrap();

    println!("  {} {} @ entry ${}, mark ${}", pos.leverage, pos.side, pos.entry_price, mark);
    println!("  Size:        {}", format::usd(snap.size_usd));
    println!("  Collateral:  {}", format::usd(snap.collateral_usd));
    println!("  PnL:         {}", format::usd(snap.pnl));
    println!("  Net value:   {}", format::usd(snap.net_value));
    println!("  Liq price:   ${}", snap.liquidation_price);
    println!("  Exit fee:    {}", format::usd(snap.exit_fee));
    println!("  Borrow/hr:   {}\n", format::usd(snap.borrow_fee_hourly));
}

/// The close dialog: 50% market close received in USDC.
fn scenario_2_partial_close(config: &RiskConfig) {
    println!("Scenario 2: Partial Close\n");

    let pos = sample_position();
    let intent = ClosingIntent {
        close_percentage: dec!(50),
        receive_token: ReceiveToken::Usdc,
    };
    validate::close_percentage(intent.close_percentage).unwrap();

    let mark = Price::new_unchecked(dec!(110));
    let pnl = compute_position_pnl(
        pos.side,
        pos.entry_price,
        mark,
        pos.size_usd,
        intent.closing_ratio(),
    )
    .unwrap();
    let fees = compute_fees(pos.size_usd, intent.close_percentage, pos.order_type, &config.fees)
        .unwrap();
    let collateral_return = pos.collateral_usd.mul(intent.closing_ratio());
    let receive = compute_receive_amount(collateral_return, pnl, &fees, dec!(1)).unwrap();

    println!("  Closing {}% at mark ${}", intent.close_percentage, mark);
    println!("  PnL on closed half: {}", format::usd(pnl));
    println!(
        "  Fees: exit {} + tx {} = {}",
        format::usd(fees.exit_fee),
        format::usd(fees.transaction_fee),
        format::usd(fees.total_fees)
    );
    println!(
        "  Receive: {} {}\n",
        format::token_amount(receive, 6),
        intent.receive_token
    );
}

/// Collateral add/remove previews, including the policy rejection.
fn scenario_3_collateral_changes(config: &RiskConfig) {
    println!("Scenario 3: Collateral Changes\n");

    let pos = sample_position();
    let pnl = Usd::new(dec!(-45));

    let add = apply_collateral_change(
        &pos,
        pnl,
        Usd::new(dec!(100)),
        CollateralAction::Add,
        &config.liquidation,
    )
    .unwrap();
    println!(
        "  Add $100: leverage {} -> {}, liq ${}",
        pos.leverage, add.new_leverage, add.new_liquidation_price
    );

    let withdrawal = apply_collateral_change(
        &pos,
        Usd::new(dec!(-95)),
        Usd::new(dec!(1)),
        CollateralAction::Remove,
        &config.liquidation,
    );
    // collateral $100 - $1 with pnl -$95 leaves $4 equity, 0.4% of notional
    match withdrawal {
        Err(err) => println!("  Remove $1 at $4 equity: rejected ({})\n", err),
        Ok(_) => println!("  Remove $1 at $4 equity: unexpectedly allowed\n"),
    }
}

/// Oracle quotes must pass staleness, exponent, and band guards.
fn scenario_4_oracle_guards(config: &RiskConfig) {
    println!("Scenario 4: Oracle Guards\n");

    let band = config.band("SOL-PERP").copied().unwrap();
    let now = Timestamp::from_millis(1_000_000);

    let fresh = OracleQuote {
        mantissa: 15_012_345_678,
        exponent: -8,
        confidence: Some(40_000),
        publish_time: 990,
    };
    match fresh.to_price(&config.oracle, &band, now) {
        Ok(price) => println!("  Fresh quote accepted: ${}", price),
        Err(err) => println!("  Fresh quote rejected: {}", err),
    }

    let stale = OracleQuote { publish_time: 100, ..fresh };
    if let Err(err) = stale.to_price(&config.oracle, &band, now) {
        println!("  Stale quote rejected: {}", err);
    }

    let wild = OracleQuote { exponent: 12, ..fresh };
    if let Err(err) = wild.to_price(&config.oracle, &band, now) {
        println!("  Wild exponent rejected: {}\n", err);
    }
}

/// Out-of-order async responses never overwrite newer state.
fn scenario_5_stale_response_guard() {
    println!("Scenario 5: Stale Response Guard\n");

    let mut gate = RefreshGate::new();
    let first = gate.issue();
    let second = gate.issue();

    // second request's response lands first
    gate.commit(second, dec!(151.20));
    let applied = gate.commit(first, dec!(150.00));

    println!("  Response B committed: ${}", gate.latest().unwrap());
    println!("  Late response A applied: {}", applied);
    println!("  Displayed price: ${}", gate.latest().unwrap());
}
