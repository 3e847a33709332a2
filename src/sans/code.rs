//! Enumerated terminal and transaction codes.
//!
//! Cards in the field carry codes beyond those catalogued here. Both
//! enumerations fold such values into an [`Unknown`](TerminalType::Unknown)
//! variant rather than failing, so a record written by newer equipment still
//! decodes.

/// The kind of device that wrote a history record.
///
/// The terminal type selects how the middle bytes of the record are laid
/// out; see [`Trip`](crate::sans::record::Trip).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalType {
    /// Fare adjustment machine.
    FareAdjustment,
    /// On-vehicle terminal, found on buses.
    Vehicle,
    /// Ticket vending machine.
    TicketMachine,
    /// Ticket gate.
    Gate,
    /// Simplified ticket gate, found at unstaffed stations.
    SimpleGate,
    /// Staffed window terminal.
    Window,
    /// Gate-side terminal.
    GateTerminal,
    /// Mobile phone.
    MobilePhone,
    /// Transfer fare adjustment machine.
    TransferAdjustment,
    /// Connecting gate between operators.
    ConnectingGate,
    /// Shop point-of-sale terminal.
    Retail,
    /// Vending machine.
    VendingMachine,
    /// A code not yet catalogued.
    Unknown(u8),
}

impl TerminalType {
    /// Classify a raw terminal code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x03 => Self::FareAdjustment,
            0x05 => Self::Vehicle,
            0x08 | 0x12 => Self::TicketMachine,
            0x16 => Self::Gate,
            0x17 => Self::SimpleGate,
            0x18 => Self::Window,
            0x1A => Self::GateTerminal,
            0x1B => Self::MobilePhone,
            0x1C => Self::TransferAdjustment,
            0x1D => Self::ConnectingGate,
            0xC7 => Self::Retail,
            0xC8 => Self::VendingMachine,
            code => Self::Unknown(code),
        }
    }
}

/// The nature of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Fare payment on exit.
    Fare,
    /// Charge (top-up) of the stored balance.
    Charge,
    /// Ticket purchase.
    TicketPurchase,
    /// Fare adjustment.
    Adjustment,
    /// New card issue.
    NewIssue,
    /// Bus fare payment.
    Bus,
    /// Automatic charge on passing a gate.
    AutoCharge,
    /// Purchase at a shop or vending machine.
    Retail,
    /// Purchase settled partly in cash.
    RetailWithCash,
    /// Deposit at a charging machine.
    Deposit,
    /// A code not yet catalogued.
    Unknown(u8),
}

impl TransactionType {
    /// Classify a raw transaction code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => Self::Fare,
            0x02 => Self::Charge,
            0x03 => Self::TicketPurchase,
            0x04 => Self::Adjustment,
            0x07 => Self::NewIssue,
            0x0D | 0x0F => Self::Bus,
            0x14 => Self::AutoCharge,
            0x46 => Self::Retail,
            0x49 => Self::Deposit,
            0xC6 => Self::RetailWithCash,
            code => Self::Unknown(code),
        }
    }
}
