// crates/goshanta-core/src/search/spots.rs
use crate::error::Result;
use crate::model::{field, Spot};
use crate::query::Predicate;
use crate::text::{SearchFilters, TokenMatcherSet};
use crate::traits::Collection;

/// Spot fields tested by every token matcher.
pub const SPOT_TEXT_FIELDS: [&str; 8] = [
    field::NAME,
    field::DESCRIPTION,
    field::DISTRICT,
    field::DIVISION,
    field::COUNTRY,
    field::REVIEW_COMMENT,
    field::TAGS,
    field::TYPE,
];

/// Text relevance: any matcher hitting any of [`SPOT_TEXT_FIELDS`].
pub fn text_group(matchers: &TokenMatcherSet) -> Predicate {
    Predicate::or(
        matchers
            .iter()
            .flat_map(|m| {
                SPOT_TEXT_FIELDS
                    .iter()
                    .map(move |f| Predicate::matches(*f, m.clone()))
            })
            .collect(),
    )
}

/// The full spot query: the text group AND every inferred filter.
///
/// Filters only narrow; a spot that satisfies all filters but no text test
/// is never returned.
pub fn spot_predicate(matchers: &TokenMatcherSet, filters: &SearchFilters) -> Predicate {
    let mut clauses = vec![text_group(matchers)];
    if let Some(budget) = &filters.budget {
        clauses.push(Predicate::equals(field::BUDGET_LEVEL, budget.as_str()));
    }
    if let Some(hobby) = &filters.hobby {
        clauses.push(Predicate::any_of(field::TAGS, [hobby.as_str()]));
    }
    if let Some(ideal_for) = &filters.ideal_for {
        clauses.push(Predicate::any_of(field::IDEAL_FOR, [ideal_for.as_str()]));
    }
    Predicate::and(clauses)
}

/// Run the spot query. Empty `matchers` never reach the collection.
pub fn search_spots<C>(
    spots: &C,
    matchers: &TokenMatcherSet,
    filters: &SearchFilters,
) -> Result<Vec<Spot>>
where
    C: Collection<Spot> + ?Sized,
{
    if matchers.is_empty() {
        return Ok(Vec::new());
    }
    let predicate = spot_predicate(matchers, filters);
    tracing::debug!(leaves = predicate.leaf_count(), ?filters, "querying spots");
    let hits = spots.find(&predicate)?;
    tracing::debug!(hits = hits.len(), "spots matched");
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BudgetLevel;

    fn spot(name: &str, description: &str, tags: &[&str], budget: BudgetLevel) -> Spot {
        Spot {
            id: None,
            name: name.into(),
            description: description.into(),
            district: "Dhaka".into(),
            division: "Dhaka".into(),
            country: "Bangladesh".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            kind: "place".into(),
            budget_level: Some(budget),
            ideal_for: vec!["family".into()],
            user_reviews: Vec::new(),
        }
    }

    #[test]
    fn text_group_is_matchers_times_fields() {
        let matchers = TokenMatcherSet::build("lake museum");
        match text_group(&matchers) {
            Predicate::Or(children) => assert_eq!(children.len(), 16),
            other => panic!("expected an OR group, got {other:?}"),
        }
    }

    #[test]
    fn description_hit_satisfies_the_text_group() {
        let matchers = TokenMatcherSet::build("lake museum");
        let fort = spot("Lalbagh Fort", "Has a small Museum inside", &["history"], BudgetLevel::Low);
        assert!(spot_predicate(&matchers, &SearchFilters::default()).evaluate(&fort));
    }

    #[test]
    fn filters_never_replace_text_relevance() {
        let matchers = TokenMatcherSet::build("lake museum");
        let garden = spot("Quiet Garden", "A calm garden", &["nature"], BudgetLevel::Low);
        let filters = SearchFilters {
            budget: Some("low".into()),
            hobby: Some("nature".into()),
            ideal_for: Some("family".into()),
        };
        assert!(!spot_predicate(&matchers, &filters).evaluate(&garden));
    }

    #[test]
    fn each_filter_narrows() {
        let matchers = TokenMatcherSet::build("garden");
        let garden = spot("Quiet Garden", "A calm garden", &["nature"], BudgetLevel::Low);

        let mut filters = SearchFilters::default();
        assert!(spot_predicate(&matchers, &filters).evaluate(&garden));

        filters.budget = Some("high".into());
        assert!(!spot_predicate(&matchers, &filters).evaluate(&garden));

        filters.budget = Some("low".into());
        filters.hobby = Some("history".into());
        assert!(!spot_predicate(&matchers, &filters).evaluate(&garden));

        filters.hobby = Some("nature".into());
        filters.ideal_for = Some("solo".into());
        assert!(!spot_predicate(&matchers, &filters).evaluate(&garden));
    }

    #[test]
    fn tags_and_type_take_part_in_text_matching() {
        let matchers = TokenMatcherSet::build("trip");
        let garden = spot("Quiet Garden", "A calm garden", &["family trip"], BudgetLevel::Low);
        assert!(text_group(&matchers).evaluate(&garden));
        assert!(text_group(&TokenMatcherSet::build("PLACE")).evaluate(&garden));
    }
}
