use soroban_sdk::{contracttype, Address, BytesN, Env};

/// Ledgers per day at ~5s close time.
const DAY_IN_LEDGERS: u32 = 17_280;
pub const BALANCE_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Initialized,
    Operators(Address),
    Authority(BytesN<32>),        // event_id -> minting ledger
    Supply(BytesN<32>),           // event_id -> outstanding claim tokens
    Balance(BytesN<32>, Address), // (event_id, holder)
}

pub fn read_i128(env: &Env, key: &DataKey) -> i128 {
    let value = env.storage().persistent().get::<DataKey, i128>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
    value.unwrap_or(0)
}

/// Writes a balance-like entry; zero removes it.
pub fn write_i128(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
}

pub fn read_authority(env: &Env, event_id: &BytesN<32>) -> Option<Address> {
    let key = DataKey::Authority(event_id.clone());
    let authority = env.storage().persistent().get::<DataKey, Address>(&key);
    if authority.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
    authority
}

pub fn write_authority(env: &Env, event_id: &BytesN<32>, authority: &Address) {
    let key = DataKey::Authority(event_id.clone());
    env.storage().persistent().set(&key, authority);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
