#![no_std]

mod accounting;
mod claims;
mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::{Config, EventInfo, VaultKind, MAX_EVENT_NAME_LEN};

use accounting::{pro_rata_share, ticket_cost};
use events::*;
use storage::{derive_event_id, Event, Storage};

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, String, Symbol};

/// Crowd-sponsorship and ticketing ledger.
///
/// Sponsors fund an event's treasury and receive claim tokens 1:1; ticket
/// sales fill a separate gains vault that claim holders redeem pro-rata.
#[contract]
pub struct EventLedger;

#[contractimpl]
impl EventLedger {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the ledger
    ///
    /// The claim token's admin must add this contract as an operator
    /// before events can be created.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address, claim_token: Address) -> Result<(), Error> {
        if Storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        Storage::set_config(&env, &Config { admin, claim_token });

        Ok(())
    }

    // ============================================
    // FLOW 1: ORGANIZER CREATES EVENT
    // ============================================

    /// Create a new event and its claim currency
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidEventName`: Name empty or too long
    /// - `InvalidTicketPrice`: Price must be positive
    /// - `EventAlreadyExists`: Organizer already has an event with this name
    /// - `ClaimTokenRejected`: Ledger is not a claim-token operator, or the
    ///   id is already bound on the claim token
    pub fn create_event(
        env: Env,
        organizer: Address,
        name: String,
        ticket_price: i128,
        accepted_currency: Address,
    ) -> Result<BytesN<32>, Error> {
        let config = Storage::get_config(&env).ok_or(Error::NotInitialized)?;

        organizer.require_auth();

        if name.len() == 0 || name.len() > MAX_EVENT_NAME_LEN {
            return Err(Error::InvalidEventName);
        }

        if ticket_price <= 0 {
            return Err(Error::InvalidTicketPrice);
        }

        let event_id = derive_event_id(&env, &organizer, &name);
        if Storage::has_event(&env, &event_id) {
            return Err(Error::EventAlreadyExists);
        }

        claims::register_event(&env, &config.claim_token, &event_id)?;

        let event = Event {
            organizer: organizer.clone(),
            name: name.clone(),
            ticket_price,
            accepted_currency: accepted_currency.clone(),
            claim_currency: config.claim_token,
            active: true,
            total_sponsored: 0,
            total_ticket_revenue: 0,
            total_withdrawn: 0,
            total_earnings_paid: 0,
        };

        Storage::set_event(&env, &event_id, &event);
        Storage::set_vault(&env, &event_id, VaultKind::Treasury, 0);
        Storage::set_vault(&env, &event_id, VaultKind::Gains, 0);

        log!(&env, "event created", event_id, ticket_price);

        env.events().publish(
            (Symbol::new(&env, "event_created"), event_id.clone()),
            EventCreatedEvent {
                event_id: event_id.clone(),
                organizer,
                name,
                ticket_price,
                accepted_currency,
            },
        );

        Ok(event_id)
    }

    // ============================================
    // FLOW 2: SPONSOR FUNDS EVENT
    // ============================================

    /// Contribute accepted currency to the treasury and receive claim tokens 1:1
    ///
    /// # Errors
    /// - `EventNotFound`: Unknown event id
    /// - `EventClosed`: Event no longer active
    /// - `InvalidQuantity`: quantity must be positive
    /// - `InsufficientFunds`: Payer balance below quantity
    /// - `ArithmeticOverflow`: Treasury or counters would overflow
    /// - `ClaimTokenRejected`: Claim token refused the mint
    pub fn sponsor(
        env: Env,
        event_id: BytesN<32>,
        payer: Address,
        quantity: i128,
    ) -> Result<i128, Error> {
        payer.require_auth();

        let mut event = Self::load_event(&env, &event_id)?;

        if !event.active {
            return Err(Error::EventClosed);
        }

        if quantity <= 0 {
            return Err(Error::InvalidQuantity);
        }

        let accepted = token::Client::new(&env, &event.accepted_currency);
        if accepted.balance(&payer) < quantity {
            return Err(Error::InsufficientFunds);
        }

        let treasury = Storage::get_vault(&env, &event_id, VaultKind::Treasury)
            .checked_add(quantity)
            .ok_or(Error::ArithmeticOverflow)?;
        event.total_sponsored = event
            .total_sponsored
            .checked_add(quantity)
            .ok_or(Error::ArithmeticOverflow)?;

        accepted.transfer(&payer, &env.current_contract_address(), &quantity);
        claims::mint(&env, &event.claim_currency, &event_id, &payer, quantity)?;

        Storage::set_vault(&env, &event_id, VaultKind::Treasury, treasury);
        Storage::set_event(&env, &event_id, &event);

        env.events().publish(
            (Symbol::new(&env, "sponsored"), event_id.clone(), payer.clone()),
            SponsoredEvent {
                event_id,
                payer,
                quantity,
                treasury_balance: treasury,
            },
        );

        Ok(quantity)
    }

    // ============================================
    // FLOW 3: BUYER PAYS FOR TICKETS
    // ============================================

    /// Pay `quantity × ticket_price` into the gains vault
    ///
    /// No ticket is minted; only the cumulative payment is recorded.
    ///
    /// # Errors
    /// - `EventNotFound`: Unknown event id
    /// - `EventClosed`: Event no longer active
    /// - `InvalidQuantity`: quantity must be positive
    /// - `ArithmeticOverflow`: Cost or gains would overflow
    /// - `InsufficientFunds`: Payer balance below cost
    pub fn buy_tickets(
        env: Env,
        event_id: BytesN<32>,
        payer: Address,
        quantity: i128,
    ) -> Result<i128, Error> {
        payer.require_auth();

        let mut event = Self::load_event(&env, &event_id)?;

        if !event.active {
            return Err(Error::EventClosed);
        }

        if quantity <= 0 {
            return Err(Error::InvalidQuantity);
        }

        let cost = ticket_cost(quantity, event.ticket_price).ok_or(Error::ArithmeticOverflow)?;
        let gains = Storage::get_vault(&env, &event_id, VaultKind::Gains)
            .checked_add(cost)
            .ok_or(Error::ArithmeticOverflow)?;
        event.total_ticket_revenue = event
            .total_ticket_revenue
            .checked_add(cost)
            .ok_or(Error::ArithmeticOverflow)?;

        let accepted = token::Client::new(&env, &event.accepted_currency);
        if accepted.balance(&payer) < cost {
            return Err(Error::InsufficientFunds);
        }

        accepted.transfer(&payer, &env.current_contract_address(), &cost);

        Storage::set_vault(&env, &event_id, VaultKind::Gains, gains);
        Storage::set_event(&env, &event_id, &event);

        env.events().publish(
            (Symbol::new(&env, "tickets_bought"), event_id.clone(), payer.clone()),
            TicketsBoughtEvent {
                event_id,
                payer,
                quantity,
                cost,
                gains_balance: gains,
            },
        );

        Ok(cost)
    }

    // ============================================
    // FLOW 4: ORGANIZER WITHDRAWS SPONSORSHIP
    // ============================================

    /// Move `amount` from the treasury to the organizer
    ///
    /// Allowed before and after the event is closed.
    ///
    /// # Errors
    /// - `EventNotFound`: Unknown event id
    /// - `Unauthorized`: Caller is not the organizer
    /// - `InvalidQuantity`: amount must be positive
    /// - `InsufficientFunds`: amount exceeds the treasury
    pub fn withdraw_funds(
        env: Env,
        event_id: BytesN<32>,
        caller: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut event = Self::load_event(&env, &event_id)?;

        if caller != event.organizer {
            return Err(Error::Unauthorized);
        }

        if amount <= 0 {
            return Err(Error::InvalidQuantity);
        }

        let treasury = Storage::get_vault(&env, &event_id, VaultKind::Treasury);
        if amount > treasury {
            return Err(Error::InsufficientFunds);
        }

        event.total_withdrawn = event
            .total_withdrawn
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        let treasury = treasury - amount;

        token::Client::new(&env, &event.accepted_currency).transfer(
            &env.current_contract_address(),
            &event.organizer,
            &amount,
        );

        Storage::set_vault(&env, &event_id, VaultKind::Treasury, treasury);
        Storage::set_event(&env, &event_id, &event);

        env.events().publish(
            (Symbol::new(&env, "funds_withdrawn"), event_id.clone()),
            FundsWithdrawnEvent {
                event_id,
                organizer: caller,
                amount,
                treasury_balance: treasury,
            },
        );

        Ok(())
    }

    // ============================================
    // FLOW 5: ORGANIZER CLOSES EVENT
    // ============================================

    /// Stop sponsorship and ticket sales. Irreversible.
    ///
    /// # Errors
    /// - `EventNotFound`: Unknown event id
    /// - `Unauthorized`: Caller is not the organizer
    /// - `EventAlreadyClosed`: Event was closed before
    pub fn close_event(env: Env, event_id: BytesN<32>, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut event = Self::load_event(&env, &event_id)?;

        if caller != event.organizer {
            return Err(Error::Unauthorized);
        }

        if !event.active {
            return Err(Error::EventAlreadyClosed);
        }

        event.active = false;
        Storage::set_event(&env, &event_id, &event);

        log!(&env, "event closed", event_id);

        env.events().publish(
            (Symbol::new(&env, "event_closed"), event_id.clone()),
            EventClosedEvent { event_id },
        );

        Ok(())
    }

    // ============================================
    // FLOW 6: SPONSOR REDEEMS EARNINGS
    // ============================================

    /// Redeem all of the claimant's claim tokens for a pro-rata share of gains
    ///
    /// share = floor(gains × holding / supply), computed on the current
    /// snapshot. The whole holding is burned; rounding dust stays in the
    /// gains vault.
    ///
    /// # Errors
    /// - `EventNotFound`: Unknown event id
    /// - `NoClaimBalance`: Claimant holds no claim tokens
    /// - `NothingToWithdraw`: Gains vault empty, or share rounds to zero
    /// - `ArithmeticOverflow`: Share computation overflowed
    /// - `ClaimTokenRejected`: Claim token refused the burn
    pub fn withdraw_earnings(
        env: Env,
        event_id: BytesN<32>,
        claimant: Address,
    ) -> Result<i128, Error> {
        claimant.require_auth();

        let mut event = Self::load_event(&env, &event_id)?;

        let holding = claims::balance_of(&env, &event.claim_currency, &event_id, &claimant);
        if holding <= 0 {
            return Err(Error::NoClaimBalance);
        }

        let gains = Storage::get_vault(&env, &event_id, VaultKind::Gains);
        if gains == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let supply = claims::total_supply(&env, &event.claim_currency, &event_id);
        let share = pro_rata_share(gains, holding, supply).ok_or(Error::ArithmeticOverflow)?;
        if share == 0 {
            return Err(Error::NothingToWithdraw);
        }

        event.total_earnings_paid = event
            .total_earnings_paid
            .checked_add(share)
            .ok_or(Error::ArithmeticOverflow)?;
        let gains = gains - share;

        claims::burn(&env, &event.claim_currency, &event_id, &claimant, holding)?;
        token::Client::new(&env, &event.accepted_currency).transfer(
            &env.current_contract_address(),
            &claimant,
            &share,
        );

        Storage::set_vault(&env, &event_id, VaultKind::Gains, gains);
        Storage::set_event(&env, &event_id, &event);

        log!(&env, "earnings withdrawn", claimant, holding, share);

        env.events().publish(
            (Symbol::new(&env, "earnings_withdrawn"), event_id.clone(), claimant.clone()),
            EarningsWithdrawnEvent {
                event_id,
                claimant,
                burned: holding,
                payout: share,
                gains_balance: gains,
            },
        );

        Ok(share)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get a snapshot of an event and its balances
    pub fn get_event(env: Env, event_id: BytesN<32>) -> Result<EventInfo, Error> {
        let event = Self::load_event(&env, &event_id)?;

        Ok(EventInfo {
            treasury_balance: Storage::get_vault(&env, &event_id, VaultKind::Treasury),
            gains_balance: Storage::get_vault(&env, &event_id, VaultKind::Gains),
            total_claim_supply: claims::total_supply(&env, &event.claim_currency, &event_id),
            event_id,
            organizer: event.organizer,
            name: event.name,
            ticket_price: event.ticket_price,
            accepted_currency: event.accepted_currency,
            claim_currency: event.claim_currency,
            active: event.active,
            total_sponsored: event.total_sponsored,
            total_ticket_revenue: event.total_ticket_revenue,
            total_withdrawn: event.total_withdrawn,
            total_earnings_paid: event.total_earnings_paid,
        })
    }

    /// Derive the id an event of `organizer` named `name` has (or would have)
    /// on this ledger
    pub fn event_id(env: Env, organizer: Address, name: String) -> BytesN<32> {
        derive_event_id(&env, &organizer, &name)
    }

    /// Get a holder's claim tokens for an event
    pub fn claim_balance(env: Env, event_id: BytesN<32>, holder: Address) -> Result<i128, Error> {
        let event = Self::load_event(&env, &event_id)?;
        Ok(claims::balance_of(&env, &event.claim_currency, &event_id, &holder))
    }

    /// Get the ledger configuration
    pub fn config(env: Env) -> Result<Config, Error> {
        Storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn load_event(env: &Env, event_id: &BytesN<32>) -> Result<Event, Error> {
        if !Storage::has_config(env) {
            return Err(Error::NotInitialized);
        }
        Storage::get_event(env, event_id).ok_or(Error::EventNotFound)
    }
}
