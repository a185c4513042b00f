use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env, String};

// Constants
pub const MAX_EVENT_NAME_LEN: u32 = 64;

const EVENT_ID_DOMAIN: &[u8] = b"event-ledger:event";

/// Ledgers per day at ~5s close time.
const DAY_IN_LEDGERS: u32 = 17_280;
pub const EVENT_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const EVENT_LIFETIME_THRESHOLD: u32 = EVENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Contract holding every event's claim currency
    pub claim_token: Address,
}

/// Persisted event record. Vault balances and claim supply live under
/// their own keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    pub organizer: Address,
    pub name: String,
    pub ticket_price: i128,
    pub accepted_currency: Address,
    pub claim_currency: Address,
    pub active: bool,
    /// Cumulative accepted currency ever sponsored
    pub total_sponsored: i128,
    /// Cumulative ticket payments
    pub total_ticket_revenue: i128,
    /// Cumulative organizer withdrawals from the treasury
    pub total_withdrawn: i128,
    /// Cumulative pro-rata payouts from the gains vault
    pub total_earnings_paid: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VaultKind {
    /// Sponsorship contributions, withdrawable by the organizer
    Treasury = 0,
    /// Ticket-sale proceeds, owed to claim holders
    Gains = 1,
}

/// Point-in-time view of an event returned by `get_event`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventInfo {
    pub event_id: BytesN<32>,
    pub organizer: Address,
    pub name: String,
    pub ticket_price: i128,
    pub accepted_currency: Address,
    pub claim_currency: Address,
    pub treasury_balance: i128,
    pub gains_balance: i128,
    pub total_claim_supply: i128,
    pub active: bool,
    pub total_sponsored: i128,
    pub total_ticket_revenue: i128,
    pub total_withdrawn: i128,
    pub total_earnings_paid: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Event(BytesN<32>),            // event_id -> Event
    Vault(BytesN<32>, VaultKind), // (event_id, vault) -> balance
}

/// Stable event identifier: sha256 over this ledger's address, the organizer
/// and the name. Ledgers sharing one claim token never derive the same id.
pub fn derive_event_id(env: &Env, organizer: &Address, name: &String) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, EVENT_ID_DOMAIN);
    preimage.append(&env.current_contract_address().to_xdr(env));
    preimage.append(&organizer.clone().to_xdr(env));
    preimage.append(&name.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

pub struct Storage;

impl Storage {
    // Config
    pub fn get_config(env: &Env) -> Option<Config> {
        env.storage().instance().get(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    // Event
    pub fn get_event(env: &Env, event_id: &BytesN<32>) -> Option<Event> {
        let key = DataKey::Event(event_id.clone());
        let event = env.storage().persistent().get::<DataKey, Event>(&key);
        if event.is_some() {
            Self::bump(env, &key);
        }
        event
    }

    pub fn set_event(env: &Env, event_id: &BytesN<32>, event: &Event) {
        let key = DataKey::Event(event_id.clone());
        env.storage().persistent().set(&key, event);
        Self::bump(env, &key);
    }

    pub fn has_event(env: &Env, event_id: &BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Event(event_id.clone()))
    }

    // Vaults
    pub fn get_vault(env: &Env, event_id: &BytesN<32>, kind: VaultKind) -> i128 {
        let key = DataKey::Vault(event_id.clone(), kind);
        let balance = env.storage().persistent().get::<DataKey, i128>(&key);
        if balance.is_some() {
            Self::bump(env, &key);
        }
        balance.unwrap_or(0)
    }

    pub fn set_vault(env: &Env, event_id: &BytesN<32>, kind: VaultKind, balance: i128) {
        let key = DataKey::Vault(event_id.clone(), kind);
        env.storage().persistent().set(&key, &balance);
        Self::bump(env, &key);
    }

    fn bump(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, EVENT_LIFETIME_THRESHOLD, EVENT_BUMP_AMOUNT);
    }
}
