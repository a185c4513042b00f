#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
use events::{BurnEvent, MintEvent, RegisterEvent, TransferEvent};
use storage::{read_authority, read_i128, write_authority, write_i128, DataKey};

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Symbol};

/// Event-scoped claim currency.
///
/// Every sponsored event gets its own fungible asset, identified by the
/// event id. Only the operator that registered an event may mint or burn
/// its balances.
#[contract]
pub struct ClaimToken;

#[contractimpl]
impl ClaimToken {
    /// Initialize the token contract
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Admin, &admin);

        Ok(())
    }

    /// Add an operator (an event ledger contract)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn add_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::Operators(operator), &true);

        Ok(())
    }

    /// Remove an operator. Events it already registered keep their authority.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    pub fn remove_operator(env: Env, operator: Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        env.storage()
            .instance()
            .remove(&DataKey::Operators(operator));

        Ok(())
    }

    /// Bind a new event's claim asset to `operator` as its sole mint/burn authority
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NotOperator`: Caller is not a registered operator
    /// - `EventAlreadyRegistered`: Event id already bound
    pub fn register_event(env: Env, operator: Address, event_id: BytesN<32>) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        operator.require_auth();

        if !Self::is_operator(env.clone(), operator.clone()) {
            return Err(Error::NotOperator);
        }

        if read_authority(&env, &event_id).is_some() {
            return Err(Error::EventAlreadyRegistered);
        }

        write_authority(&env, &event_id, &operator);

        env.events().publish(
            (Symbol::new(&env, "register_event"), event_id.clone()),
            RegisterEvent {
                event_id,
                authority: operator,
            },
        );

        Ok(())
    }

    /// Mint claim tokens (event authority only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `EventNotRegistered`: No authority bound to the event
    /// - `Unauthorized`: Caller is not the event's authority
    /// - `ArithmeticOverflow`: Balance or supply would overflow
    pub fn mint(
        env: Env,
        authority: Address,
        event_id: BytesN<32>,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        Self::check_authority(&env, &authority, &event_id)?;

        let balance_key = DataKey::Balance(event_id.clone(), to.clone());
        let supply_key = DataKey::Supply(event_id.clone());

        let new_balance = read_i128(&env, &balance_key)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        let new_supply = read_i128(&env, &supply_key)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        write_i128(&env, &balance_key, new_balance);
        write_i128(&env, &supply_key, new_supply);

        env.events().publish(
            (Symbol::new(&env, "mint"), event_id.clone()),
            MintEvent {
                event_id,
                to,
                amount,
            },
        );

        Ok(())
    }

    /// Burn claim tokens (event authority only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `EventNotRegistered`: No authority bound to the event
    /// - `Unauthorized`: Caller is not the event's authority
    /// - `InsufficientBalance`: Not enough balance
    pub fn burn(
        env: Env,
        authority: Address,
        event_id: BytesN<32>,
        from: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        Self::check_authority(&env, &authority, &event_id)?;

        let balance_key = DataKey::Balance(event_id.clone(), from.clone());
        let supply_key = DataKey::Supply(event_id.clone());

        let current_balance = read_i128(&env, &balance_key);
        if current_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        // supply >= any single balance, so neither subtraction can go negative
        let current_supply = read_i128(&env, &supply_key);
        write_i128(&env, &balance_key, current_balance - amount);
        write_i128(&env, &supply_key, current_supply - amount);

        env.events().publish(
            (Symbol::new(&env, "burn"), event_id.clone()),
            BurnEvent {
                event_id,
                from,
                amount,
            },
        );

        Ok(())
    }

    /// Transfer claim tokens between holders. Supply is unchanged.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Not enough balance
    pub fn transfer(
        env: Env,
        event_id: BytesN<32>,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        from.require_auth();

        let from_key = DataKey::Balance(event_id.clone(), from.clone());
        let from_balance = read_i128(&env, &from_key);

        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from != to {
            let to_key = DataKey::Balance(event_id.clone(), to.clone());
            let new_to_balance = read_i128(&env, &to_key)
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;

            write_i128(&env, &from_key, from_balance - amount);
            write_i128(&env, &to_key, new_to_balance);
        }

        log!(&env, "claim transfer", from, to, amount);

        env.events().publish(
            (Symbol::new(&env, "transfer"), event_id.clone()),
            TransferEvent {
                event_id,
                from,
                to,
                amount,
            },
        );

        Ok(())
    }

    /// Get a holder's claim balance for an event
    pub fn balance_of(env: Env, event_id: BytesN<32>, holder: Address) -> i128 {
        read_i128(&env, &DataKey::Balance(event_id, holder))
    }

    /// Get the outstanding claim supply for an event
    pub fn total_supply(env: Env, event_id: BytesN<32>) -> i128 {
        read_i128(&env, &DataKey::Supply(event_id))
    }

    /// Get the mint/burn authority bound to an event, if registered
    pub fn authority_of(env: Env, event_id: BytesN<32>) -> Option<Address> {
        read_authority(&env, &event_id)
    }

    /// Check if address is an operator
    pub fn is_operator(env: Env, address: Address) -> bool {
        env.storage()
            .instance()
            .get::<DataKey, bool>(&DataKey::Operators(address))
            .unwrap_or(false)
    }

    fn check_initialized(env: &Env) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn check_authority(env: &Env, authority: &Address, event_id: &BytesN<32>) -> Result<(), Error> {
        let bound = read_authority(env, event_id).ok_or(Error::EventNotRegistered)?;
        if &bound != authority {
            return Err(Error::Unauthorized);
        }
        authority.require_auth();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

    struct Setup {
        env: Env,
        client: ClaimTokenClient<'static>,
        ledger: Address,
        event_id: BytesN<32>,
    }

    fn setup() -> Setup {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register_contract(None, ClaimToken);
        let client = ClaimTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let ledger = Address::generate(&env);
        let event_id = BytesN::from_array(&env, &[7u8; 32]);

        client.initialize(&admin);
        client.add_operator(&ledger);
        client.register_event(&ledger, &event_id);

        Setup {
            env,
            client,
            ledger,
            event_id,
        }
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, ClaimToken);
        let client = ClaimTokenClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize(&admin);

        let result = client.try_initialize(&admin);
        assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    }

    #[test]
    fn test_mint_and_balance() {
        let s = setup();
        let user = Address::generate(&s.env);

        s.client.mint(&s.ledger, &s.event_id, &user, &5);
        s.client.mint(&s.ledger, &s.event_id, &user, &15);

        assert_eq!(s.client.balance_of(&s.event_id, &user), 20);
        assert_eq!(s.client.total_supply(&s.event_id), 20);
    }

    #[test]
    fn test_register_requires_operator() {
        let s = setup();
        let stranger = Address::generate(&s.env);
        let other_event = BytesN::from_array(&s.env, &[9u8; 32]);

        let result = s.client.try_register_event(&stranger, &other_event);
        assert_eq!(result, Err(Ok(Error::NotOperator)));

        let result = s.client.try_register_event(&s.ledger, &s.event_id);
        assert_eq!(result, Err(Ok(Error::EventAlreadyRegistered)));
        assert_eq!(s.client.authority_of(&s.event_id), Some(s.ledger.clone()));
    }

    #[test]
    fn test_only_event_authority_mints_and_burns() {
        let s = setup();
        let user = Address::generate(&s.env);
        let other_operator = Address::generate(&s.env);
        s.client.add_operator(&other_operator);

        let result = s.client.try_mint(&other_operator, &s.event_id, &user, &10);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));

        s.client.mint(&s.ledger, &s.event_id, &user, &10);
        let result = s.client.try_burn(&other_operator, &s.event_id, &user, &10);
        assert_eq!(result, Err(Ok(Error::Unauthorized)));
        assert_eq!(s.client.balance_of(&s.event_id, &user), 10);
    }

    #[test]
    fn test_unregistered_event() {
        let s = setup();
        let user = Address::generate(&s.env);
        let unknown = BytesN::from_array(&s.env, &[1u8; 32]);

        let result = s.client.try_mint(&s.ledger, &unknown, &user, &10);
        assert_eq!(result, Err(Ok(Error::EventNotRegistered)));
    }

    #[test]
    fn test_transfer_keeps_supply() {
        let s = setup();
        let user1 = Address::generate(&s.env);
        let user2 = Address::generate(&s.env);

        s.client.mint(&s.ledger, &s.event_id, &user1, &1000);
        s.client.transfer(&s.event_id, &user1, &user2, &500);

        assert_eq!(s.client.balance_of(&s.event_id, &user1), 500);
        assert_eq!(s.client.balance_of(&s.event_id, &user2), 500);
        assert_eq!(s.client.total_supply(&s.event_id), 1000);
    }

    #[test]
    fn test_burn() {
        let s = setup();
        let user = Address::generate(&s.env);

        s.client.mint(&s.ledger, &s.event_id, &user, &1000);
        s.client.burn(&s.ledger, &s.event_id, &user, &400);

        assert_eq!(s.client.balance_of(&s.event_id, &user), 600);
        assert_eq!(s.client.total_supply(&s.event_id), 600);

        s.client.burn(&s.ledger, &s.event_id, &user, &600);
        assert_eq!(s.client.balance_of(&s.event_id, &user), 0);
        assert_eq!(s.client.total_supply(&s.event_id), 0);
    }

    #[test]
    fn test_insufficient_balance_error() {
        let s = setup();
        let user1 = Address::generate(&s.env);
        let user2 = Address::generate(&s.env);

        s.client.mint(&s.ledger, &s.event_id, &user1, &1000);

        let result = s.client.try_transfer(&s.event_id, &user1, &user2, &1500);
        assert_eq!(result, Err(Ok(Error::InsufficientBalance)));

        let result = s.client.try_burn(&s.ledger, &s.event_id, &user1, &1001);
        assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
    }

    #[test]
    fn test_invalid_amount() {
        let s = setup();
        let user = Address::generate(&s.env);

        let result = s.client.try_mint(&s.ledger, &s.event_id, &user, &0);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));

        let result = s.client.try_burn(&s.ledger, &s.event_id, &user, &-1);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));
    }
}
