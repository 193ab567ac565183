//! Searchable delegation selector state.
//!
//! [`DelegationQuerySelector`] holds the query text, the filtered options and
//! the highlighted row for a dropdown of the account's delegations. All
//! updates are synchronous recomputations over data already in memory.
//! Choosing an option hands it to the caller; the transaction draft is never
//! touched here.

use crate::domain::{Account, SolanaTransaction, ValidatorCatalog, amount::is_positive};

use super::mapper::{MappedDelegation, map_delegations};

// ============================================================================
// Selector Context
// ============================================================================

/// The flow the selector is mounted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorContext {
    /// Undelegation and other flows that may pick any delegation.
    #[default]
    General,
    /// Claim-rewards flow: only delegations with pending rewards are offered.
    ClaimRewards,
}

impl SelectorContext {
    /// Localization key of the field label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::General => "solana.undelegation.flow.steps.amount.fields.validator",
            Self::ClaimRewards => "solana.claimRewards.flow.steps.claimRewards.selectLabel",
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Filter mapped delegations for a context and query.
///
/// In [`SelectorContext::ClaimRewards`] only strictly positive pending
/// rewards are kept. A non-empty query then keeps rows whose display name
/// (catalog name, else address) contains it, ignoring case. Order is kept.
#[must_use]
pub fn filter_options(
    all: &[MappedDelegation],
    context: SelectorContext,
    query: &str,
) -> Vec<MappedDelegation> {
    let needle = query.to_lowercase();

    all.iter()
        .filter(|d| match context {
            SelectorContext::General => true,
            SelectorContext::ClaimRewards => is_positive(&d.pending_rewards),
        })
        .filter(|d| needle.is_empty() || d.display_name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// ============================================================================
// Selector State
// ============================================================================

/// State of a delegation dropdown for one (account, transaction) pair.
#[derive(Debug, Clone)]
pub struct DelegationQuerySelector {
    context: SelectorContext,
    delegations: Vec<MappedDelegation>,
    selected_address: Option<String>,
    query: String,
    options: Vec<MappedDelegation>,
    highlighted: Option<usize>,
}

impl DelegationQuerySelector {
    /// Builds the selector and computes its first option list.
    ///
    /// # Arguments
    ///
    /// * `account` - Account whose delegations are offered
    /// * `transaction` - Draft whose first validator is the current value
    /// * `catalog` - Known validators used for names
    /// * `context` - Flow the selector is mounted in
    #[must_use]
    pub fn new(
        account: &Account,
        transaction: &SolanaTransaction,
        catalog: &ValidatorCatalog,
        context: SelectorContext,
    ) -> Self {
        let delegations = map_delegations(&account.delegations, catalog, &account.unit());
        let mut selector = Self {
            context,
            delegations,
            selected_address: None,
            query: String::new(),
            options: Vec::new(),
            highlighted: None,
        };
        selector.set_transaction(transaction);
        selector.recompute();
        selector
    }

    /// The flow this selector was built for.
    #[must_use]
    pub const fn context(&self) -> SelectorContext {
        self.context
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query and recomputes the options.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.recompute();
    }

    /// Appends a character to the query.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.recompute();
    }

    /// Removes the last character of the query.
    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.recompute();
        }
    }

    /// Re-evaluates the options for the current query.
    ///
    /// The highlight is kept on the same delegation when it survives the
    /// filter, otherwise it moves to the first option.
    pub fn recompute(&mut self) {
        let previous = self
            .highlighted
            .and_then(|i| self.options.get(i))
            .map(|d| d.stake_account_address.clone());

        self.options = filter_options(&self.delegations, self.context, &self.query);

        self.highlighted = previous
            .and_then(|addr| {
                self.options
                    .iter()
                    .position(|d| d.stake_account_address == addr)
            })
            .or(if self.options.is_empty() { None } else { Some(0) });
    }

    /// Tracks a new transaction draft from the owning flow.
    pub fn set_transaction(&mut self, transaction: &SolanaTransaction) {
        self.selected_address = transaction.validators().first().map(|v| v.address.clone());
    }

    /// Current options in display order.
    #[must_use]
    pub fn options(&self) -> &[MappedDelegation] {
        &self.options
    }

    /// The option matching the transaction's validator, if listed.
    #[must_use]
    pub fn value(&self) -> Option<&MappedDelegation> {
        let address = self.selected_address.as_deref()?;
        self.options.iter().find(|d| d.validator_address == address)
    }

    /// Index of the highlighted option.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Moves the highlight down, wrapping at the end.
    pub fn highlight_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Moves the highlight up, wrapping at the start.
    pub fn highlight_prev(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |i| (i + len - 1) % len));
    }

    /// Hands the option at `index` to `on_change`.
    ///
    /// # Returns
    ///
    /// `true` if an option existed at `index`.
    pub fn select(&self, index: usize, on_change: impl FnOnce(&MappedDelegation)) -> bool {
        match self.options.get(index) {
            Some(option) => {
                on_change(option);
                true
            }
            None => false,
        }
    }

    /// Hands the highlighted option to `on_change`.
    pub fn select_highlighted(&self, on_change: impl FnOnce(&MappedDelegation)) -> bool {
        self.highlighted
            .is_some_and(|index| self.select(index, on_change))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TransactionMode, ValidatorRef};
    use crate::test_utils::{AccountMother, DelegationMother, acme_catalog};
    use rstest::*;

    #[fixture]
    fn account() -> Account {
        AccountMother::solana(vec![
            DelegationMother::with_rewards("Vx1", 5_000_000_000, 0),
            DelegationMother::with_rewards("Vx2", 3_000_000_000, 120_000_000),
            DelegationMother::with_rewards("AnonVote7", 1_000_000_000, 1),
        ])
    }

    fn undelegate_tx(address: Option<&str>) -> SolanaTransaction {
        let validators = address
            .map(|a| vec![ValidatorRef::new(a, 0u8)])
            .unwrap_or_default();
        SolanaTransaction::new(TransactionMode::Undelegate).with_validators(validators)
    }

    fn addresses(selector: &DelegationQuerySelector) -> Vec<&str> {
        selector
            .options()
            .iter()
            .map(|d| d.validator_address.as_str())
            .collect()
    }

    #[rstest]
    fn test_general_context_lists_everything(account: Account, acme_catalog: ValidatorCatalog) {
        let selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(None),
            &acme_catalog,
            SelectorContext::General,
        );
        assert_eq!(addresses(&selector), vec!["Vx1", "Vx2", "AnonVote7"]);
        assert_eq!(selector.query(), "");
        assert!(selector.value().is_none());
        assert_eq!(selector.highlighted(), Some(0));
    }

    #[rstest]
    fn test_claim_rewards_excludes_zero_rewards(account: Account, acme_catalog: ValidatorCatalog) {
        let selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(None),
            &acme_catalog,
            SelectorContext::ClaimRewards,
        );
        assert_eq!(addresses(&selector), vec!["Vx2", "AnonVote7"]);
    }

    #[rstest]
    #[case::name_lowercase("acme", vec!["Vx1"])]
    #[case::name_uppercase("BOREALIS", vec!["Vx2"])]
    #[case::name_substring("stake", vec!["Vx2"])]
    #[case::address_when_unnamed("anonvote", vec!["AnonVote7"])]
    #[case::address_of_named_is_ignored("Vx1", vec![])]
    #[case::no_match("zzz", vec![])]
    #[case::single_space(" ", vec!["Vx1", "Vx2"])]
    #[case::trailing_space_kept("acme ", vec![])]
    #[case::inner_space("s s", vec!["Vx2"])]
    fn test_query_filtering(
        account: Account,
        acme_catalog: ValidatorCatalog,
        #[case] query: &str,
        #[case] expected: Vec<&str>,
    ) {
        let mut selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(None),
            &acme_catalog,
            SelectorContext::General,
        );
        selector.set_query(query);
        assert_eq!(addresses(&selector), expected, "query={query:?}");
        assert_eq!(selector.highlighted().is_some(), !expected.is_empty());
    }

    #[rstest]
    #[case::space_excludes_unnamed(" ", vec!["Vx1", "Vx2"])]
    #[case::trailing_space("acme ", vec![])]
    #[case::claim_filter_first("anon", vec!["AnonVote7"])]
    fn test_filter_options_uses_raw_query(
        account: Account,
        acme_catalog: ValidatorCatalog,
        #[case] query: &str,
        #[case] expected: Vec<&str>,
    ) {
        let all = map_delegations(&account.delegations, &acme_catalog, &account.unit());
        let general: Vec<String> = filter_options(&all, SelectorContext::General, query)
            .into_iter()
            .map(|d| d.validator_address)
            .collect();
        assert_eq!(general, expected);

        // ClaimRewards drops Vx1 (no pending rewards) before the query applies.
        let claim = filter_options(&all, SelectorContext::ClaimRewards, query);
        assert!(claim.iter().all(|d| d.validator_address != "Vx1"));
    }

    #[rstest]
    fn test_value_follows_transaction(account: Account, acme_catalog: ValidatorCatalog) {
        let mut selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(Some("Vx2")),
            &acme_catalog,
            SelectorContext::General,
        );
        assert_eq!(selector.value().map(|d| d.display_name()), Some("Borealis Stake"));

        // Filtered out by the query: no value.
        selector.set_query("acme");
        assert!(selector.value().is_none());
        selector.set_query("");

        selector.set_transaction(&undelegate_tx(Some("Missing")));
        assert!(selector.value().is_none());
    }

    #[rstest]
    fn test_select_reports_without_mutating(account: Account, acme_catalog: ValidatorCatalog) {
        let tx = undelegate_tx(Some("Vx1"));
        let selector = DelegationQuerySelector::new(
            &account,
            &tx,
            &acme_catalog,
            SelectorContext::General,
        );

        let mut chosen = None;
        assert!(selector.select(1, |d| chosen = Some(d.validator_address.clone())));
        assert_eq!(chosen.as_deref(), Some("Vx2"));
        assert_eq!(tx.validators()[0].address, "Vx1");

        assert!(!selector.select(10, |_| panic!("no option at 10")));
    }

    #[rstest]
    fn test_highlight_navigation(account: Account, acme_catalog: ValidatorCatalog) {
        let mut selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(None),
            &acme_catalog,
            SelectorContext::General,
        );
        selector.highlight_prev();
        assert_eq!(selector.highlighted(), Some(2));
        selector.highlight_prev();
        assert_eq!(selector.highlighted(), Some(1));
        selector.highlight_next();
        assert_eq!(selector.highlighted(), Some(2));
        selector.highlight_next();
        assert_eq!(selector.highlighted(), Some(0));

        // Highlight sticks to the same row when it survives the filter.
        selector.highlight_next();
        selector.set_query("borealis");
        assert_eq!(selector.highlighted(), Some(0));
        let mut chosen = String::new();
        assert!(selector.select_highlighted(|d| chosen = d.validator_address.clone()));
        assert_eq!(chosen, "Vx2");
    }

    #[rstest]
    fn test_push_and_backspace(account: Account, acme_catalog: ValidatorCatalog) {
        let mut selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(None),
            &acme_catalog,
            SelectorContext::General,
        );
        for c in "acmx".chars() {
            selector.push_char(c);
        }
        assert!(selector.options().is_empty());
        assert!(!selector.select_highlighted(|_| panic!("nothing highlighted")));
        selector.backspace();
        assert_eq!(selector.query(), "acm");
        assert_eq!(addresses(&selector), vec!["Vx1"]);
    }

    #[rstest]
    fn test_empty_delegations(acme_catalog: ValidatorCatalog) {
        let account = AccountMother::solana(Vec::new());
        let mut selector = DelegationQuerySelector::new(
            &account,
            &undelegate_tx(None),
            &acme_catalog,
            SelectorContext::ClaimRewards,
        );
        assert!(selector.options().is_empty());
        assert!(selector.highlighted().is_none());
        selector.highlight_next();
        assert!(selector.highlighted().is_none());
    }
}
