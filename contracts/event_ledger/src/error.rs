use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the event organizer
    Unauthorized = 10,

    // ============================================
    // EVENT LIFECYCLE ERRORS (20-29)
    // ============================================
    /// An event with this organizer and name already exists
    EventAlreadyExists = 20,
    /// No event under this id
    EventNotFound = 21,
    /// Event no longer accepts sponsorship or ticket sales
    EventClosed = 22,
    /// Event was already closed
    EventAlreadyClosed = 23,
    /// Name is empty or longer than MAX_EVENT_NAME_LEN
    InvalidEventName = 24,
    /// Ticket price must be positive
    InvalidTicketPrice = 25,

    // ============================================
    // AMOUNT/BALANCE ERRORS (40-49)
    // ============================================
    /// Quantity or amount must be positive
    InvalidQuantity = 40,
    /// Payer or vault balance too low
    InsufficientFunds = 41,

    // ============================================
    // REDEMPTION ERRORS (50-59)
    // ============================================
    /// Claimant holds no claim tokens for this event
    NoClaimBalance = 50,
    /// Gains pool is empty or the pro-rata share rounds to zero
    NothingToWithdraw = 51,

    // ============================================
    // ARITHMETIC ERRORS (60-69)
    // ============================================
    /// Checked arithmetic failed
    ArithmeticOverflow = 60,

    // ============================================
    // CLAIM TOKEN ERRORS (70-79)
    // ============================================
    /// Claim token refused a register, mint or burn from this ledger
    ClaimTokenRejected = 70,
}
