use crate::identity::UserId;
use crate::storage::Document;

/// Bank-link form fields as submitted by the user
///
/// The full name is validated but not part of the persisted record.
#[derive(Debug, Clone, Default)]
pub struct BankLinkFields {
    pub full_name: String,
    pub bank_name: String,
    pub account_number: String,
    pub routing_number: String,
}

/// Persisted bank-link record, write-once per submission
///
/// Owned by the external store; there is no dedupe by account number and no
/// unlink or update path.
#[derive(Debug, Clone, PartialEq)]
pub struct BankLinkRecord {
    pub user_id: UserId,
    pub bank_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub linked_at_ms: i64,
}

impl BankLinkRecord {
    /// Flatten into a document for the external store
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("userId".to_string(), self.user_id.to_string());
        doc.insert("bankName".to_string(), self.bank_name.clone());
        doc.insert("accountNumber".to_string(), self.account_number.clone());
        doc.insert("routingNumber".to_string(), self.routing_number.clone());
        doc.insert("linkedAt".to_string(), self.linked_at_ms.to_string());
        doc
    }
}
