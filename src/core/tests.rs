#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::core::content::{
        AI_CAPABILITIES, CAPABILITY_CARDS, CAPABILITY_COLUMNS, MARQUEE_LOGOS, NAV_ITEMS,
        PRICING_PLANS, PlanPrice, SOLUTIONS, TOOLS,
    };
    use crate::core::hero::{HeroPhase, HeroTimeline};
    use crate::core::routes::{SiteRoute, resolve};
    use crate::core::selection::{BillingPeriod, CategoryFilter, categories, price_label};

    #[test]
    fn test_every_nav_href_resolves() {
        for item in NAV_ITEMS {
            assert!(resolve(item.href()).is_some(), "{item} href");

            let menu = item.menu();
            assert!(resolve(menu.cta.href).is_some(), "{} cta", menu.title);
            for column in menu.columns {
                for link in column.links {
                    assert!(
                        resolve(link.href).is_some(),
                        "{} -> {} does not resolve",
                        link.label,
                        link.href
                    );
                }
            }
        }
    }

    #[test]
    fn test_menus_have_three_columns() {
        for item in NAV_ITEMS {
            assert_eq!(item.menu().columns.len(), 3, "{item}");
        }
    }

    #[test]
    fn test_fragment_links_target_their_anchor() {
        let target = resolve("/solutions#contracts").unwrap();
        assert_eq!(target.route, SiteRoute::Solutions);
        assert_eq!(target.anchor, Some("contracts"));

        assert!(resolve("/solutions#nope").is_none());
        assert!(resolve("/unknown").is_none());
    }

    #[test]
    fn test_anchor_ids_unique_per_route() {
        for route in SiteRoute::ALL {
            let anchors = route.anchors();
            let unique: HashSet<_> = anchors.iter().collect();
            assert_eq!(unique.len(), anchors.len(), "{route}");
        }
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
            assert_eq!(route.to_string(), route.path());
        }
    }

    #[test]
    fn test_tools_fill_hero_grid() {
        let timeline = HeroTimeline::default();
        assert_eq!(TOOLS.len(), 16);
        assert_eq!(TOOLS.len() % timeline.columns, 0);

        // Both corners drift symmetrically
        let first = timeline.tile_frame(0, TOOLS.len(), HeroPhase::Explode);
        let last = timeline.tile_frame(TOOLS.len() - 1, TOOLS.len(), HeroPhase::Explode);
        assert_eq!(first.x, -last.x);
        assert_eq!(first.y, -last.y);
    }

    #[test]
    fn test_marquee_has_logos() {
        assert_eq!(MARQUEE_LOGOS.len(), 5);
    }

    #[test]
    fn test_capability_tables() {
        assert_eq!(CAPABILITY_COLUMNS.len(), 3);
        assert_eq!(CAPABILITY_CARDS.len(), 5);

        let names: Vec<_> = CAPABILITY_COLUMNS.iter().flat_map(|c| c.iter()).collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let highlighted: Vec<_> = PRICING_PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].id, "growth");
    }

    #[test]
    fn test_custom_plan_ignores_billing() {
        for plan in PRICING_PLANS {
            if plan.price == PlanPrice::Custom {
                assert_eq!(
                    price_label(plan, BillingPeriod::Monthly),
                    price_label(plan, BillingPeriod::Annual)
                );
            }
        }
    }

    #[test]
    fn test_each_category_filter_is_non_empty() {
        let mut filter = CategoryFilter::default();
        let mut total = 0;
        for category in categories(SOLUTIONS) {
            filter.select(Some(category));
            let matched = filter.apply(SOLUTIONS);
            assert!(!matched.is_empty(), "{category}");
            total += matched.len();
        }
        assert_eq!(total, SOLUTIONS.len());
    }

    #[test]
    fn test_ai_groups_have_items() {
        assert_eq!(AI_CAPABILITIES.len(), 3);
        for group in AI_CAPABILITIES {
            assert_eq!(group.items.len(), 4, "{}", group.id);
        }
    }
}
