//! Local selection state for the static page widgets.
//!
//! Each widget keeps one small value and derives what to render from a
//! fixed table. Inputs come from a closed set of choices, so nothing here
//! can fail.

use derive_more::Display;

use crate::core::content::{
    AiCapabilityGroup, CapabilityCard, PlanPrice, PricingPlan, Solution,
};

/// Annual billing discount, as a fraction of the monthly price kept
const ANNUAL_NUMERATOR: u32 = 4;
const ANNUAL_DENOMINATOR: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Annual,
            BillingPeriod::Annual => BillingPeriod::Monthly,
        }
    }

    pub fn is_annual(&self) -> bool {
        matches!(self, BillingPeriod::Annual)
    }
}

/// Monthly price shown for `monthly` dollars under `period`.
///
/// Annual billing keeps 80% of the price, rounded to the nearest dollar.
pub fn displayed_price(monthly: u32, period: BillingPeriod) -> u32 {
    match period {
        BillingPeriod::Monthly => monthly,
        // 4p/5 never lands on a half, so adding half the denominator rounds
        BillingPeriod::Annual => {
            let scaled = (u64::from(monthly) * u64::from(ANNUAL_NUMERATOR)
                + u64::from(ANNUAL_DENOMINATOR / 2))
                / u64::from(ANNUAL_DENOMINATOR);
            // Never above the monthly price, so it fits back in u32
            u32::try_from(scaled).unwrap_or(monthly)
        }
    }
}

/// Price label of a plan, without the currency sign for custom plans
pub fn price_label(plan: &PricingPlan, period: BillingPeriod) -> String {
    match plan.price {
        PlanPrice::Monthly(amount) => format!("${}", displayed_price(amount, period)),
        PlanPrice::Custom => "Custom".to_string(),
    }
}

/// Single-open accordion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Header of item `index` clicked
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Category pill selection on the solutions page. `None` means "All".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: Option<&'static str>,
}

impl CategoryFilter {
    pub fn select(&mut self, category: Option<&'static str>) {
        self.selected = category;
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn apply(&self, solutions: &'static [Solution]) -> Vec<&'static Solution> {
        solutions
            .iter()
            .filter(|solution| self.selected.is_none_or(|category| solution.category == category))
            .collect()
    }
}

/// Distinct categories in first-seen order
pub fn categories(solutions: &'static [Solution]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for solution in solutions {
        if !seen.contains(&solution.category) {
            seen.push(solution.category);
        }
    }
    seen
}

/// Selected AI capability tab
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabSelection {
    index: usize,
}

impl TabSelection {
    /// Select the group whose id matches a URL fragment, if any
    pub fn from_anchor(groups: &[AiCapabilityGroup], anchor: &str) -> Self {
        let anchor = anchor.trim_start_matches('#');
        let index = groups
            .iter()
            .position(|group| group.id == anchor)
            .unwrap_or_default();
        Self { index }
    }

    /// Out-of-range indices are ignored
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = index;
        }
    }

    pub fn current<'a>(&self, groups: &'a [AiCapabilityGroup]) -> Option<&'a AiCapabilityGroup> {
        groups.get(self.index)
    }
}

/// Capability chosen from the home page columns, and the cards it shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilitySelector {
    columns: &'static [&'static [&'static str]],
    cards: &'static [CapabilityCard],
    selected: &'static str,
}

impl CapabilitySelector {
    /// Starts on the first capability of the first column
    pub fn new(
        columns: &'static [&'static [&'static str]],
        cards: &'static [CapabilityCard],
    ) -> Self {
        let selected = columns
            .iter()
            .flat_map(|column| column.iter())
            .next()
            .copied()
            .unwrap_or_default();
        Self {
            columns,
            cards,
            selected,
        }
    }

    /// Returns `false` when `capability` was already selected
    pub fn select(&mut self, capability: &'static str) -> bool {
        if capability == self.selected {
            return false;
        }
        self.selected = capability;
        true
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }

    pub fn is_selected(&self, capability: &str) -> bool {
        self.selected == capability
    }

    /// Position in the flattened columns, 0 for unknown names
    fn flat_index(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|column| column.iter())
            .position(|capability| *capability == self.selected)
            .unwrap_or_default()
    }

    pub fn primary_card(&self) -> Option<&'static CapabilityCard> {
        self.card_at(self.flat_index())
    }

    pub fn secondary_card(&self) -> Option<&'static CapabilityCard> {
        self.card_at(self.flat_index() + 2)
    }

    fn card_at(&self, index: usize) -> Option<&'static CapabilityCard> {
        if self.cards.is_empty() {
            return None;
        }
        self.cards.get(index % self.cards.len())
    }
}

/// Login form mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum AuthMode {
    #[default]
    #[display("Login")]
    Login,
    #[display("Sign up")]
    SignUp,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::SignUp => "Create your workspace",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to your MyLabelDesk workspace.",
            AuthMode::SignUp => "Start your 14-day free trial. No credit card required.",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::SignUp => "Create workspace",
        }
    }

    /// Sign up also asks for the label name
    pub fn asks_label_name(&self) -> bool {
        matches!(self, AuthMode::SignUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{
        AI_CAPABILITIES, CAPABILITY_CARDS, CAPABILITY_COLUMNS, PRICING_PLANS, SOLUTIONS,
    };

    #[test]
    fn test_annual_price_rounding() {
        assert_eq!(displayed_price(149, BillingPeriod::Annual), 119);
        assert_eq!(displayed_price(49, BillingPeriod::Annual), 39);
        assert_eq!(displayed_price(0, BillingPeriod::Annual), 0);
        assert_eq!(displayed_price(3, BillingPeriod::Annual), 2);
    }

    #[test]
    fn test_annual_price_large_amounts() {
        assert_eq!(
            displayed_price(2_000_000_000, BillingPeriod::Annual),
            1_600_000_000
        );
        assert_eq!(displayed_price(u32::MAX, BillingPeriod::Annual), 3_435_973_836);
        assert_eq!(displayed_price(u32::MAX, BillingPeriod::Monthly), u32::MAX);
    }

    #[test]
    fn test_annual_matches_float_rounding() {
        for price in 0..2000u32 {
            let expected = (f64::from(price) * 0.8).round() as u32;
            assert_eq!(displayed_price(price, BillingPeriod::Annual), expected);
        }
    }

    #[test]
    fn test_toggle_back_restores_price() {
        let period = BillingPeriod::Monthly.toggle();
        assert!(period.is_annual());
        assert_eq!(displayed_price(149, period), 119);
        let period = period.toggle();
        assert_eq!(displayed_price(149, period), 149);
    }

    #[test]
    fn test_price_label() {
        let growth = &PRICING_PLANS[1];
        assert_eq!(price_label(growth, BillingPeriod::Monthly), "$149");
        assert_eq!(price_label(growth, BillingPeriod::Annual), "$119");
        let enterprise = &PRICING_PLANS[2];
        assert_eq!(price_label(enterprise, BillingPeriod::Annual), "Custom");
    }

    #[test]
    fn test_accordion_single_open() {
        let mut faq = Accordion::default();
        assert_eq!(faq, Accordion::default());

        faq.toggle(1);
        assert!(faq.is_open(1));

        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));

        faq.toggle(3);
        assert_eq!(faq, Accordion::default());
    }

    #[test]
    fn test_category_filter_legal() {
        let mut filter = CategoryFilter::default();
        assert_eq!(filter.apply(SOLUTIONS).len(), 9);

        filter.select(Some("Legal"));
        let result = filter.apply(SOLUTIONS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "contracts");

        filter.select(None);
        assert_eq!(filter.apply(SOLUTIONS).len(), 9);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let cats = categories(SOLUTIONS);
        assert_eq!(cats.len(), 9);
        assert_eq!(cats[0], "Discovery");
        assert_eq!(cats[8], "Catalog");
    }

    #[test]
    fn test_tab_from_anchor() {
        let tab = TabSelection::from_anchor(AI_CAPABILITIES, "#operations");
        assert_eq!(tab.current(AI_CAPABILITIES).unwrap().category, "Operations");

        let tab = TabSelection::from_anchor(AI_CAPABILITIES, "unknown");
        assert_eq!(tab, TabSelection::default());
    }

    #[test]
    fn test_tab_select_bounds() {
        let mut tab = TabSelection::default();
        tab.select(2, AI_CAPABILITIES.len());
        assert_eq!(tab.current(AI_CAPABILITIES).unwrap().id, "executive");
        tab.select(7, AI_CAPABILITIES.len());
        assert_eq!(tab.current(AI_CAPABILITIES).unwrap().id, "executive");
    }

    #[test]
    fn test_capability_selector_cards() {
        let mut selector = CapabilitySelector::new(CAPABILITY_COLUMNS, CAPABILITY_CARDS);
        assert_eq!(selector.selected(), "A&R workflow");
        assert_eq!(selector.primary_card().unwrap().title, "Workflow timeline");
        assert_eq!(selector.secondary_card().unwrap().title, "Metadata cockpit");

        // Flattened index 6 is "Metadata & credits"
        assert!(selector.select("Metadata & credits"));
        assert_eq!(selector.primary_card().unwrap().title, "Artist pulse");
        assert_eq!(selector.secondary_card().unwrap().title, "Distribution board");

        assert!(!selector.select("Metadata & credits"));
    }

    #[test]
    fn test_auth_mode() {
        assert_eq!(AuthMode::default().heading(), "Welcome back");
        assert!(!AuthMode::Login.asks_label_name());
        assert!(AuthMode::SignUp.asks_label_name());
        assert_eq!(AuthMode::SignUp.submit_label(), "Create workspace");
        assert_eq!(AuthMode::SignUp.to_string(), "Sign up");
    }
}
