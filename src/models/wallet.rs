use std::str::FromStr;

use pagekit_core::{Identity, IdentityStatus};

use crate::config::eth_address;

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: String,
        ens_name: Option<String>,
        chain_id: Option<u64>,
        /// Whether the account went through an explicit sign-in
        signed_in: bool,
    },
}

impl WalletState {
    /// Get chain ID if connected
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            WalletState::Connected { chain_id, .. } => *chain_id,
            _ => None,
        }
    }

    /// Gating identity for this state.
    ///
    /// An address the wallet reports but that does not parse is treated as
    /// no account at all.
    pub fn identity(&self) -> IdentityStatus {
        match self {
            WalletState::Connected {
                address, signed_in, ..
            } => match Identity::from_str(address) {
                Ok(account) => IdentityStatus {
                    account: Some(account),
                    authenticated: *signed_in,
                },
                Err(e) => {
                    log::warn!("wallet reported unparseable address '{}': {}", address, e);
                    IdentityStatus::anonymous()
                }
            },
            _ => IdentityStatus::anonymous(),
        }
    }

    /// Format address for display (ENS name or 0x1234...5678)
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected {
                ens_name: Some(name),
                ..
            } => name.clone(),
            WalletState::Connected { address, .. } if address.len() >= eth_address::FULL_LEN => {
                format!(
                    "{}...{}",
                    &address[..eth_address::PREFIX_LEN],
                    &address[eth_address::SUFFIX_START..]
                )
            }
            WalletState::Connected { address, .. } => address.clone(),
            WalletState::Connecting => "connecting...".to_string(),
            WalletState::Disconnected => "guest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

    fn connected(signed_in: bool) -> WalletState {
        WalletState::Connected {
            address: ADDRESS.to_string(),
            ens_name: None,
            chain_id: Some(1),
            signed_in,
        }
    }

    #[test]
    fn test_disconnected_state() {
        let state = WalletState::Disconnected;
        assert_eq!(state.chain_id(), None);
        assert_eq!(state.display_name(), "guest");
        assert_eq!(state.identity(), IdentityStatus::anonymous());
    }

    #[test]
    fn test_connecting_has_no_identity() {
        let state = WalletState::Connecting;
        assert_eq!(state.display_name(), "connecting...");
        assert!(!state.identity().has_account());
    }

    #[test]
    fn test_connected_identity() {
        let identity = connected(true).identity();
        assert!(identity.can_see_errors());
        assert_eq!(identity.account, Identity::from_str(ADDRESS).ok());

        let identity = connected(false).identity();
        assert!(identity.has_account());
        assert!(!identity.can_see_errors());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(connected(true).display_name(), "0x1234...7890");

        let with_ens = WalletState::Connected {
            address: ADDRESS.to_string(),
            ens_name: Some("vitalik.eth".to_string()),
            chain_id: None,
            signed_in: true,
        };
        assert_eq!(with_ens.display_name(), "vitalik.eth");
    }

    #[test]
    fn test_malformed_address_is_anonymous() {
        let state = WalletState::Connected {
            address: "0x1234".to_string(),
            ens_name: None,
            chain_id: None,
            signed_in: true,
        };
        assert_eq!(state.display_name(), "0x1234");
        assert_eq!(state.identity(), IdentityStatus::anonymous());
    }
}
