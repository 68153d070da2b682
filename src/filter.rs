use crate::models::{CompanyAccount, Role, Transaction, TransactionStatus, User};

/// Declarative filter over the in-memory transaction list.
///
/// Criteria are AND-combined; an unset or empty criterion matches everything.
/// Filtering is pure: the source collection is never mutated and result order
/// equals source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-sensitive substring over the submitter's bank reference, the
    /// embedded username, or the embedded email.
    pub free_text: Option<String>,
    pub status: Option<TransactionStatus>,
    /// Prefix of the RFC 3339 creation timestamp; partial dates work.
    pub date_prefix: Option<String>,
    /// Substring of the RFC 3339 creation timestamp, not a range.
    pub time_fragment: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && set(&self.free_text).is_none()
            && set(&self.date_prefix).is_none()
            && set(&self.time_fragment).is_none()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(status) = self.status {
            if tx.status != status {
                return false;
            }
        }

        if let Some(prefix) = set(&self.date_prefix) {
            if !tx.created_at_rfc3339().starts_with(prefix) {
                return false;
            }
        }

        if let Some(fragment) = set(&self.time_fragment) {
            if !tx.created_at_rfc3339().contains(fragment) {
                return false;
            }
        }

        if let Some(query) = set(&self.free_text) {
            let hit = tx.transaction_user_id.contains(query)
                || tx.user.username.contains(query)
                || tx.user.email.contains(query);
            if !hit {
                return false;
            }
        }

        true
    }

    /// The visible subset of `transactions`.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}

/// Filter over the user directory: free text across id, username, email,
/// phone and ip address, AND an exact role match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub query: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }

        if let Some(query) = set(&self.query) {
            let lowered = query.to_lowercase();
            let hit = user.id.contains(query)
                || user.username.to_lowercase().contains(&lowered)
                || user.email.to_lowercase().contains(&lowered)
                || user.phone.contains(query)
                || user.ip_address.contains(query);
            if !hit {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users
            .iter()
            .filter(|user| self.matches(user))
            .cloned()
            .collect()
    }
}

/// Company accounts whose payment type is still offered to users.
pub fn active_company_accounts(accounts: &[CompanyAccount]) -> Vec<CompanyAccount> {
    accounts
        .iter()
        .filter(|account| account.has_active_payment_type())
        .cloned()
        .collect()
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmbeddedUser;
    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};

    fn tx(id: &str, status: TransactionStatus, username: &str, email: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount: BigDecimal::from(100),
            company_account_number: "TR330006".to_string(),
            transaction_user_id: format!("TX{id}"),
            user_account_number: "TR120006".to_string(),
            user_account_holder_name: "Holder".to_string(),
            payment_type: "papara".to_string(),
            payment_method: "transfer".to_string(),
            status,
            rejection_note: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            user: EmbeddedUser {
                username: username.to_string(),
                email: email.to_string(),
                first_name: String::new(),
                last_name: String::new(),
            },
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("1", TransactionStatus::Pending, "alice", "a@x.com"),
            tx("2", TransactionStatus::Received, "bkaya", "b@x.com"),
            tx("3", TransactionStatus::Rejected, "carol", "c@y.org"),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let filter = TransactionFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn empty_strings_behave_like_unset() {
        let filter = TransactionFilter {
            free_text: Some(String::new()),
            date_prefix: Some(String::new()),
            time_fragment: Some(String::new()),
            status: None,
        };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn free_text_matches_reference_username_or_email() {
        let transactions = sample();

        let by_name = TransactionFilter {
            free_text: Some("alice".to_string()),
            ..Default::default()
        };
        let result = by_name.apply(&transactions);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");

        let by_reference = TransactionFilter {
            free_text: Some("TX3".to_string()),
            ..Default::default()
        };
        assert_eq!(by_reference.apply(&transactions)[0].id, "3");

        let by_email = TransactionFilter {
            free_text: Some("@y.org".to_string()),
            ..Default::default()
        };
        assert_eq!(by_email.apply(&transactions)[0].id, "3");

        let miss = TransactionFilter {
            free_text: Some("bob".to_string()),
            ..Default::default()
        };
        assert!(miss.apply(&transactions).is_empty());
    }

    #[test]
    fn free_text_is_case_sensitive() {
        let filter = TransactionFilter {
            free_text: Some("Alice".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn status_filter_is_exact() {
        let filter = TransactionFilter {
            status: Some(TransactionStatus::Rejected),
            ..Default::default()
        };
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn date_prefix_supports_partial_dates() {
        let full = TransactionFilter {
            date_prefix: Some("2024-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(full.apply(&sample()).len(), 3);

        let month = TransactionFilter {
            date_prefix: Some("2024-05".to_string()),
            ..Default::default()
        };
        assert_eq!(month.apply(&sample()).len(), 3);

        let other_day = TransactionFilter {
            date_prefix: Some("2024-06".to_string()),
            ..Default::default()
        };
        assert!(other_day.apply(&sample()).is_empty());
    }

    #[test]
    fn time_fragment_is_a_substring_match() {
        let filter = TransactionFilter {
            time_fragment: Some("10:00".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 3);

        let miss = TransactionFilter {
            time_fragment: Some("23:59".to_string()),
            ..Default::default()
        };
        assert!(miss.apply(&sample()).is_empty());
    }

    #[test]
    fn criteria_are_and_combined() {
        let filter = TransactionFilter {
            free_text: Some("@x.com".to_string()),
            status: Some(TransactionStatus::Received),
            ..Default::default()
        };
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn user_filter_matches_across_fields() {
        let users = vec![
            User {
                id: "u-1".to_string(),
                username: "Alice".to_string(),
                email: "a@x.com".to_string(),
                phone: "+905551112233".to_string(),
                ip_address: "10.0.0.7".to_string(),
                role: Role::User,
            },
            User {
                id: "u-2".to_string(),
                username: "bkaya".to_string(),
                email: "b@x.com".to_string(),
                phone: String::new(),
                ip_address: "10.0.0.9".to_string(),
                role: Role::Finance,
            },
        ];

        // Name matching is case-insensitive, unlike the transaction search.
        let by_name = UserFilter {
            query: Some("alice".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&users).len(), 1);

        let by_ip = UserFilter {
            query: Some("0.0.9".to_string()),
            ..Default::default()
        };
        assert_eq!(by_ip.apply(&users)[0].id, "u-2");

        let by_role = UserFilter {
            role: Some(Role::Finance),
            ..Default::default()
        };
        assert_eq!(by_role.apply(&users)[0].id, "u-2");

        let combined = UserFilter {
            query: Some("@x.com".to_string()),
            role: Some(Role::User),
        };
        assert_eq!(combined.apply(&users)[0].id, "u-1");
    }

    #[test]
    fn active_accounts_drop_retired_payment_types() {
        let active = CompanyAccount {
            id: "ca-1".to_string(),
            bank_name: "Ziraat".to_string(),
            image: String::new(),
            qr_code: String::new(),
            min: BigDecimal::from(50),
            max: BigDecimal::from(1000),
            payment_type: "papara".to_string(),
            account_holder_name: "Paydesk Ltd".to_string(),
            account_number: "TR56".to_string(),
            payment_method: "havale".to_string(),
            wallet_address: String::new(),
        };
        let retired = CompanyAccount {
            id: "ca-2".to_string(),
            payment_type: "bitcoin".to_string(),
            ..active.clone()
        };

        let visible = active_company_accounts(&[active.clone(), retired]);
        assert_eq!(visible, vec![active]);
    }
}
