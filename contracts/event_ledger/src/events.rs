use soroban_sdk::{contracttype, Address, BytesN, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventCreatedEvent {
    pub event_id: BytesN<32>,
    pub organizer: Address,
    pub name: String,
    pub ticket_price: i128,
    pub accepted_currency: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SponsoredEvent {
    pub event_id: BytesN<32>,
    pub payer: Address,
    pub quantity: i128,
    pub treasury_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketsBoughtEvent {
    pub event_id: BytesN<32>,
    pub payer: Address,
    pub quantity: i128,
    pub cost: i128,
    pub gains_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub event_id: BytesN<32>,
    pub organizer: Address,
    pub amount: i128,
    pub treasury_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventClosedEvent {
    pub event_id: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarningsWithdrawnEvent {
    pub event_id: BytesN<32>,
    pub claimant: Address,
    pub burned: i128,
    pub payout: i128,
    pub gains_balance: i128,
}
