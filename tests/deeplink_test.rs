//! Deeplink Resolver Integration Tests
//!
//! Covers the `zcash:` URI shapes the resolver recognizes, the error it
//! reports for each kind of bad input, and its purity properties.
//!
//! Run with: cargo test --test deeplink_test -- --nocapture

mod common;

use common::{accept_all, reject_all, SEND_URI, T_ADDRESS};
use proptest::prelude::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use zwallet_nav::{
    resolve_deeplink, DeeplinkError, Destination, NetworkKind, StructuralAddressValidator,
    Zatoshi,
};

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_home_url_parsing() {
    let result = resolve_deeplink("zcash:///home", NetworkKind::Testnet, &reject_all);
    assert_eq!(result, Ok(Destination::Home));
}

#[test]
fn test_send_url_parsing() {
    let result = resolve_deeplink(SEND_URI, NetworkKind::Mainnet, &accept_all);
    assert_eq!(
        result,
        Ok(Destination::Send {
            amount: Zatoshi(123_000_000),
            address: T_ADDRESS.to_string(),
            memo: "hello".to_string(),
        })
    );
}

#[test]
fn test_send_with_structural_validator() {
    let validator = StructuralAddressValidator::new();
    let result = resolve_deeplink(SEND_URI, NetworkKind::Mainnet, &validator);
    assert!(matches!(result, Ok(Destination::Send { .. })));

    // Mainnet transparent address is not valid on testnet
    let result = resolve_deeplink(SEND_URI, NetworkKind::Testnet, &validator);
    assert!(matches!(result, Err(DeeplinkError::InvalidAddress(_))));
}

#[test]
fn test_memo_is_percent_decoded() {
    let uri = "zcash:///home/send?address=address&memo=some%20text&amount=123000000";
    let result = resolve_deeplink(uri, NetworkKind::Testnet, &accept_all);
    assert_eq!(
        result,
        Ok(Destination::Send {
            amount: Zatoshi(123_000_000),
            address: "address".to_string(),
            memo: "some text".to_string(),
        })
    );
}

#[test]
fn test_memo_keeps_literal_plus() {
    let uri = "zcash:///home/send?address=address&amount=1&memo=1+1%3D2";
    let result = resolve_deeplink(uri, NetworkKind::Testnet, &accept_all);
    assert_eq!(
        result,
        Ok(Destination::Send {
            amount: Zatoshi(1),
            address: "address".to_string(),
            memo: "1+1=2".to_string(),
        })
    );
}

#[test]
fn test_non_utf8_memo_is_unrecognized() {
    let uri = "zcash:///home/send?address=address&amount=1&memo=%FF%FE";
    let result = resolve_deeplink(uri, NetworkKind::Testnet, &accept_all);
    assert!(matches!(result, Err(DeeplinkError::UnrecognizedDeeplink(_))));
}

#[test]
fn test_missing_memo_defaults_to_empty() {
    let uri = "zcash:///home/send?address=address&amount=5";
    match resolve_deeplink(uri, NetworkKind::Testnet, &accept_all) {
        Ok(Destination::Send { memo, amount, .. }) => {
            assert_eq!(memo, "");
            assert_eq!(amount, Zatoshi(5));
        }
        other => panic!("expected send destination, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_amount_is_malformed() {
    for amount in ["abc", "-1", "1.5", "+1", "", "1e8"] {
        let uri = format!("zcash:///home/send?address=address&amount={}", encode(amount));
        let result = resolve_deeplink(&uri, NetworkKind::Testnet, &accept_all);
        assert!(
            matches!(result, Err(DeeplinkError::MalformedAmount(_))),
            "amount {:?} gave {:?}",
            amount,
            result
        );
    }
}

#[test]
fn test_missing_amount_is_malformed() {
    let result = resolve_deeplink(
        "zcash:///home/send?address=address",
        NetworkKind::Testnet,
        &accept_all,
    );
    assert!(matches!(result, Err(DeeplinkError::MalformedAmount(_))));
}

#[test]
fn test_invalid_address_takes_precedence_over_amount() {
    let result = resolve_deeplink(
        "zcash:///home/send?address=nope&amount=abc",
        NetworkKind::Testnet,
        &reject_all,
    );
    assert_eq!(result, Err(DeeplinkError::InvalidAddress("nope".to_string())));
}

#[test]
fn test_missing_address_is_invalid() {
    let result = resolve_deeplink(
        "zcash:///home/send?amount=10",
        NetworkKind::Testnet,
        &accept_all,
    );
    assert!(matches!(result, Err(DeeplinkError::InvalidAddress(_))));
}

#[test]
fn test_unrecognized_links() {
    for uri in [
        "zcash:///settings",
        "zcash:///home/receive",
        "zcash:///",
        "https://example.com/home",
        "bitcoin:///home",
        "not a uri",
    ] {
        let result = resolve_deeplink(uri, NetworkKind::Testnet, &accept_all);
        assert!(
            matches!(result, Err(DeeplinkError::UnrecognizedDeeplink(_))),
            "{} gave {:?}",
            uri,
            result
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_home_ignores_query(query in ".{0,40}") {
        let uri = format!("zcash:///home?{}", encode(&query));
        prop_assert_eq!(
            resolve_deeplink(&uri, NetworkKind::Mainnet, &reject_all),
            Ok(Destination::Home)
        );
    }

    #[test]
    fn prop_send_round_trips_amount_and_memo(
        amount in any::<u64>(),
        address in "[a-zA-Z0-9]{1,80}",
        memo in proptest::option::of(".{0,64}"),
    ) {
        let mut uri = format!("zcash:///home/send?address={}&amount={}", address, amount);
        if let Some(memo) = &memo {
            uri.push_str(&format!("&memo={}", encode(memo)));
        }

        prop_assert_eq!(
            resolve_deeplink(&uri, NetworkKind::Testnet, &accept_all),
            Ok(Destination::Send {
                amount: Zatoshi(amount),
                address,
                memo: memo.unwrap_or_default(),
            })
        );
    }

    #[test]
    fn prop_non_numeric_amount_is_malformed(amount in "[a-zA-Z.\\-]{1,12}") {
        let uri = format!("zcash:///home/send?address=address&amount={}", encode(&amount));
        prop_assert!(matches!(
            resolve_deeplink(&uri, NetworkKind::Testnet, &accept_all),
            Err(DeeplinkError::MalformedAmount(_))
        ));
    }

    #[test]
    fn prop_rejected_address_is_invalid(amount in any::<u64>()) {
        let uri = format!("zcash:///home/send?address=addr&amount={}", amount);
        prop_assert!(matches!(
            resolve_deeplink(&uri, NetworkKind::Mainnet, &reject_all),
            Err(DeeplinkError::InvalidAddress(_))
        ));
    }

    #[test]
    fn prop_resolution_is_idempotent(uri in "zcash:///home(/send)?\\?[a-z=&0-9%]{0,30}") {
        let first = resolve_deeplink(&uri, NetworkKind::Testnet, &accept_all);
        let second = resolve_deeplink(&uri, NetworkKind::Testnet, &accept_all);
        prop_assert_eq!(first, second);
    }
}
