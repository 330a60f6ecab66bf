use crate::content::PortfolioItem;

pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parses a button's filter value; `"all"` shows everything.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(slug) => slug,
        }
    }

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(slug) => item.category == *slug,
        }
    }

    /// Inline display style the item gets under this filter.
    pub fn display(&self, item: &PortfolioItem) -> &'static str {
        if self.matches(item) {
            "display: block;"
        } else {
            "display: none;"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str) -> PortfolioItem {
        PortfolioItem {
            title: format!("{} project", category),
            category: category.to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn all_shows_every_item() {
        let filter = Filter::from_value("all");
        assert_eq!(filter, Filter::All);
        assert!(filter.matches(&item("branding")));
        assert!(filter.matches(&item("web")));
    }

    #[test]
    fn category_hides_other_items() {
        let filter = Filter::from_value("web");
        assert!(filter.matches(&item("web")));
        assert!(!filter.matches(&item("branding")));
        assert_eq!(filter.display(&item("branding")), "display: none;");
        assert_eq!(filter.display(&item("web")), "display: block;");
    }

    #[test]
    fn category_match_is_exact() {
        let filter = Filter::from_value("web");
        assert!(!filter.matches(&item("webdesign")));
        assert!(!filter.matches(&item("Web")));
    }

    #[test]
    fn value_round_trips_button_attribute() {
        assert_eq!(Filter::default().value(), "all");
        assert_eq!(Filter::from_value("print").value(), "print");
    }
}
