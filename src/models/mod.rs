pub mod bank_link;
pub mod purchase;
pub mod transaction;

pub use bank_link::{BankLinkFields, BankLinkRecord};
pub use purchase::PurchaseEntry;
pub use transaction::{Transaction, TxId};
