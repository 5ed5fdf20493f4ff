use audit_model::{Asset, AssetId, AssetStatus};

/// What a decoded code means against the current asset list.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanDecision {
    /// A pending record carries the code.
    Match(Asset),
    /// Every record carrying the code was already scanned; holds the first one.
    AlreadyScanned(AssetId),
    /// No record carries the code; a new extra record is proposed.
    Unlisted(Asset),
}

/// Matches `code` against `assets` without mutating them.
///
/// Barcodes are compared exactly. When several imported records share a
/// barcode the first pending one in list order is matched, so each scan of
/// the shared code accounts for the next duplicate.
pub fn reconcile(assets: &[Asset], code: &str) -> ScanDecision {
    let pending = assets
        .iter()
        .find(|asset| asset.barcode == code && asset.status == AssetStatus::Pending);
    if let Some(asset) = pending {
        return ScanDecision::Match(asset.clone());
    }
    match assets.iter().find(|asset| asset.barcode == code) {
        Some(asset) => ScanDecision::AlreadyScanned(asset.id.clone()),
        None => ScanDecision::Unlisted(Asset::extra(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_model::EXTRA_ASSET_NAME;

    fn list() -> Vec<Asset> {
        let mut found = Asset::pending(AssetId::from("a-0"), "Monitor", "MN-202");
        found.mark_found(chrono::Utc::now(), None, None);
        vec![
            Asset::pending(AssetId::from("a-1"), "Chair", "CH-001"),
            Asset::pending(AssetId::from("a-2"), "Chair", "CH-001"),
            found,
        ]
    }

    #[test]
    fn first_pending_match_in_list_order_wins() {
        match reconcile(&list(), "CH-001") {
            ScanDecision::Match(asset) => assert_eq!(asset.id.as_str(), "a-1"),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn later_duplicate_is_matched_once_first_is_found() {
        let mut assets = list();
        assets[0].mark_found(chrono::Utc::now(), None, None);
        match reconcile(&assets, "CH-001") {
            ScanDecision::Match(asset) => assert_eq!(asset.id.as_str(), "a-2"),
            other => panic!("expected match, got {other:?}"),
        }
        assets[1].mark_found(chrono::Utc::now(), None, None);
        assert_eq!(
            reconcile(&assets, "CH-001"),
            ScanDecision::AlreadyScanned(AssetId::from("a-1"))
        );
    }

    #[test]
    fn scanned_record_is_reported_not_restaged() {
        assert_eq!(
            reconcile(&list(), "MN-202"),
            ScanDecision::AlreadyScanned(AssetId::from("a-0"))
        );
    }

    #[test]
    fn unknown_code_proposes_extra_record() {
        match reconcile(&list(), "XX-999") {
            ScanDecision::Unlisted(asset) => {
                assert_eq!(asset.barcode, "XX-999");
                assert_eq!(asset.status, AssetStatus::Extra);
                assert_eq!(asset.name, EXTRA_ASSET_NAME);
                assert!(asset.location.is_none());
            }
            other => panic!("expected unlisted, got {other:?}"),
        }
    }

    #[test]
    fn matching_is_exact() {
        assert!(matches!(
            reconcile(&list(), "ch-001"),
            ScanDecision::Unlisted(_)
        ));
    }
}
