use super::{PackageIdentity, PackageSet};

/// Link state of one installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    pub identity: PackageIdentity,
    pub linked: bool,
}

/// Classify every installed package as linked or unlinked, in identity order.
///
/// Linked packages that are no longer installed are not reported.
pub fn reconcile(installed: &PackageSet, linked: &PackageSet) -> Vec<PackageStatus> {
    installed
        .iter()
        .map(|identity| PackageStatus {
            identity: identity.clone(),
            linked: linked.contains(identity),
        })
        .collect()
}

/// Split a report into `(linked, unlinked)`.
pub fn partition(statuses: &[PackageStatus]) -> (Vec<&PackageIdentity>, Vec<&PackageIdentity>) {
    let (linked, unlinked): (Vec<_>, Vec<_>) = statuses.iter().partition(|s| s.linked);
    (
        linked.into_iter().map(|s| &s.identity).collect(),
        unlinked.into_iter().map(|s| &s.identity).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> PackageSet {
        items.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_reconcile_marks_membership() {
        let installed = set(&["foo-1.0", "bar-2.3", "foo-2.0"]);
        let linked = set(&["foo-1.0"]);

        let report: Vec<(String, bool)> = reconcile(&installed, &linked)
            .into_iter()
            .map(|s| (s.identity.to_string(), s.linked))
            .collect();

        assert_eq!(
            report,
            vec![
                ("bar-2.3".to_string(), false),
                ("foo-1.0".to_string(), true),
                ("foo-2.0".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_reconcile_ignores_linked_but_not_installed() {
        let installed = set(&["foo-1.0"]);
        let linked = set(&["foo-1.0", "gone-0.1"]);

        let report = reconcile(&installed, &linked);
        assert_eq!(report.len(), 1);
        assert!(report[0].linked);
    }

    #[test]
    fn test_reconcile_empty_installed() {
        assert!(reconcile(&PackageSet::new(), &set(&["foo-1.0"])).is_empty());
    }

    #[test]
    fn test_partition() {
        let report = reconcile(&set(&["foo-1.0", "bar-2.3"]), &set(&["bar-2.3"]));
        let (linked, unlinked) = partition(&report);

        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].to_string(), "bar-2.3");
        assert_eq!(unlinked.len(), 1);
        assert_eq!(unlinked[0].to_string(), "foo-1.0");
    }
}
