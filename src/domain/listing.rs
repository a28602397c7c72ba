// src/domain/listing.rs

use crate::domain::property::{Property, PropertyType};

/// Number of cards on one page of the listing.
pub const PAGE_SIZE: usize = 6;

/// How many page buttons the pagination bar shows at most.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Status label that qualifies a property for the home page.
pub const FEATURED_STATUS: &str = "High Potential";
pub const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    From100kTo200k,
    From200kTo300k,
    Over300k,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Any,
        PriceRange::From100kTo200k,
        PriceRange::From200kTo300k,
        PriceRange::Over300k,
    ];

    /// Inclusive dollar bounds; `None` for the upper bound means unbounded.
    pub fn bounds(self) -> Option<(u64, Option<u64>)> {
        match self {
            PriceRange::Any => None,
            PriceRange::From100kTo200k => Some((100_000, Some(200_000))),
            PriceRange::From200kTo300k => Some((200_000, Some(300_000))),
            PriceRange::Over300k => Some((300_000, None)),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        match self.bounds() {
            None => true,
            Some((min, Some(max))) => min <= price && price <= max,
            Some((min, None)) => price >= min,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            PriceRange::Any => "any",
            PriceRange::From100kTo200k => "100k-200k",
            PriceRange::From200kTo300k => "200k-300k",
            PriceRange::Over300k => "300k-plus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceRange::Any => "Any",
            PriceRange::From100kTo200k => "$100k - $200k",
            PriceRange::From200kTo300k => "$200k - $300k",
            PriceRange::Over300k => "$300k+",
        }
    }

    /// Accepts the URL form or the display label. Anything else is `Any`.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.param() == value || r.label() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    AllTypes,
    Only(PropertyType),
}

impl TypeFilter {
    pub fn all() -> impl Iterator<Item = TypeFilter> {
        std::iter::once(TypeFilter::AllTypes).chain(PropertyType::ALL.map(TypeFilter::Only))
    }

    pub fn matches(self, property_type: PropertyType) -> bool {
        match self {
            TypeFilter::AllTypes => true,
            TypeFilter::Only(wanted) => wanted == property_type,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            TypeFilter::AllTypes => "all",
            TypeFilter::Only(PropertyType::SingleFamily) => "single-family",
            TypeFilter::Only(PropertyType::MultiFamily) => "multi-family",
            TypeFilter::Only(PropertyType::Townhouse) => "townhouse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TypeFilter::AllTypes => "All Types",
            TypeFilter::Only(t) => t.label(),
        }
    }

    pub fn from_param(value: &str) -> Self {
        Self::all()
            .find(|t| t.param() == value || t.label() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinBedrooms {
    #[default]
    Any,
    Two,
    Three,
    Four,
}

impl MinBedrooms {
    pub const ALL: [MinBedrooms; 4] = [
        MinBedrooms::Any,
        MinBedrooms::Two,
        MinBedrooms::Three,
        MinBedrooms::Four,
    ];

    pub fn minimum(self) -> Option<u32> {
        match self {
            MinBedrooms::Any => None,
            MinBedrooms::Two => Some(2),
            MinBedrooms::Three => Some(3),
            MinBedrooms::Four => Some(4),
        }
    }

    pub fn admits(self, bedrooms: u32) -> bool {
        self.minimum().map_or(true, |min| bedrooms >= min)
    }

    pub fn param(self) -> &'static str {
        match self {
            MinBedrooms::Any => "any",
            MinBedrooms::Two => "2",
            MinBedrooms::Three => "3",
            MinBedrooms::Four => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MinBedrooms::Any => "Any",
            MinBedrooms::Two => "2+",
            MinBedrooms::Three => "3+",
            MinBedrooms::Four => "4+",
        }
    }

    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|b| b.param() == value || b.label() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    PotentialRoi,
    PriceAsc,
    PriceDesc,
    RecentlyAdded,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::PotentialRoi,
        SortBy::PriceAsc,
        SortBy::PriceDesc,
        SortBy::RecentlyAdded,
    ];

    pub fn param(self) -> &'static str {
        match self {
            SortBy::PotentialRoi => "roi",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::RecentlyAdded => "recent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::PotentialRoi => "Potential ROI",
            SortBy::PriceAsc => "Price: Low to High",
            SortBy::PriceDesc => "Price: High to Low",
            SortBy::RecentlyAdded => "Recently Added",
        }
    }

    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.param() == value || s.label() == value)
            .unwrap_or_default()
    }

    fn sort(self, items: &mut [&Property]) {
        // sort_by is stable, so ties keep their seed order.
        match self {
            SortBy::PotentialRoi => {
                items.sort_by(|a, b| b.estimated_roi.total_cmp(&a.estimated_roi))
            }
            SortBy::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
            SortBy::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
            SortBy::RecentlyAdded => items.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        }
    }
}

/// Everything the visitor picked on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub property_type: TypeFilter,
    pub min_bedrooms: MinBedrooms,
    pub sort_by: SortBy,
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: PriceRange::default(),
            property_type: TypeFilter::default(),
            min_bedrooms: MinBedrooms::default(),
            sort_by: SortBy::default(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, property: &Property) -> bool {
        self.price_range.contains(property.price)
            && self.property_type.matches(property.property_type)
            && self.min_bedrooms.admits(property.bedrooms)
    }

    /// Query string for these criteria on another page, e.g. for pagination links.
    pub fn query_for_page(&self, page: usize) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("price", self.price_range.param())
            .append_pair("type", self.property_type.param())
            .append_pair("beds", self.min_bedrooms.param())
            .append_pair("sort", self.sort_by.param())
            .append_pair("page", &page.to_string())
            .finish()
    }
}

/// One page of the listing plus the totals the pagination bar needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    pub page_items: Vec<&'a Property>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl ListingView<'_> {
    /// 1-based `(first, last)` positions for the "Showing X to Y of Z" label.
    /// `None` when nothing is shown on this page.
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.page_items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = (self.page * self.page_size).min(self.total_count);
        Some((first, last))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filters, sorts and pages `all` according to `criteria`.
///
/// The input is never reordered; the view holds references into it. A `page`
/// of 0 or past the last page yields no items but still reports the totals.
pub fn compute_view<'a>(all: &'a [Property], criteria: &FilterCriteria) -> ListingView<'a> {
    let mut matching: Vec<&Property> = all.iter().filter(|p| criteria.matches(p)).collect();
    criteria.sort_by.sort(&mut matching);

    let page_size = criteria.page_size.max(1);
    let total_count = matching.len();
    let total_pages = total_count.div_ceil(page_size);

    let page_items = if criteria.page == 0 {
        Vec::new()
    } else {
        matching
            .into_iter()
            .skip((criteria.page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect()
    };

    ListingView {
        page_items,
        total_count,
        total_pages,
        page: criteria.page,
        page_size,
    }
}

/// The page the listing actually renders for a requested page number.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// A window of at most `max_visible` page numbers around `current`.
pub fn page_numbers(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = start.saturating_add(max_visible - 1).min(total_pages);
    if end - start < max_visible - 1 {
        start = end.saturating_sub(max_visible - 1).max(1);
    }
    (start..=end).collect()
}

/// Properties for the home page: the first few "High Potential" ones in seed order.
pub fn featured_properties(all: &[Property]) -> Vec<&Property> {
    all.iter()
        .filter(|p| p.status == FEATURED_STATUS)
        .take(FEATURED_COUNT)
        .collect()
}
