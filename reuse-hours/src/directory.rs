//! In-memory directory of locations, with the search, filters and sort orders
//! used to build a listing.
//!
//! ```
//! use reuse_hours::directory::{Directory, Filter, Query, SortBy};
//!
//! let locations = serde_json::from_str(r#"[{
//!     "id": 1,
//!     "name": "Free Geek",
//!     "type": "donation",
//!     "category": "Electronics",
//!     "address": "1731 SE 10th Ave, Portland, OR 97214",
//!     "lat": 45.5091,
//!     "lng": -122.6548,
//!     "hours": "Mon-Sat 10am-6pm",
//!     "accepts": ["computers", "laptops"]
//! }]"#).unwrap();
//!
//! let directory = Directory::new(locations);
//! let results = directory.sorted(directory.search("laptop"), SortBy::Distance);
//! assert_eq!(results[0].name, "Free Geek");
//! assert_eq!(directory.filter(&Filter::All).len(), 1);
//!
//! let query = Query::default().with_category("Electronics").with_search("free");
//! assert_eq!(directory.query(&query).len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::localization::{DistanceText, GeoPoint};
use crate::opening_hours::get_open_status;
use crate::status::OpenStatus;

/// Origin used to sort by distance when the position of the user is unknown.
pub const PORTLAND_CENTER: GeoPoint = GeoPoint::new(45.5231, -122.6765);

// LocationKind

/// What a location does with the items it receives.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Disposal,
    Donation,
    Recycling,
    Repair,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disposal => "disposal",
            Self::Donation => "donation",
            Self::Recycling => "recycling",
            Self::Repair => "repair",
        }
    }
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Location

/// A location record, as served by the data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub category: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub accepts: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Location {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Check if a lowercase search term appears in any of the searchable
    /// fields of this record.
    fn matches(&self, term: &str) -> bool {
        let accepts = self.accepts.join(" ");

        let found = [
            self.name.as_str(),
            self.category.as_str(),
            accepts.as_str(),
            self.description.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term));

        found
    }
}

// CategoryGroup

/// A named group of items, such as "Electronics", used to browse locations by
/// what they accept.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl CategoryGroup {
    /// Find a group from its name, ignoring case.
    ///
    /// ```
    /// use reuse_hours::directory::CategoryGroup;
    ///
    /// assert_eq!(CategoryGroup::from_name("yard & garden").unwrap().name, "Yard & Garden");
    /// assert!(CategoryGroup::from_name("Spaceships").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<&'static Self> {
        CATEGORY_GROUPS
            .iter()
            .find(|group| group.name.eq_ignore_ascii_case(name))
    }

    /// Check if a location accepts an item of this group: one of its accepted
    /// items contains a keyword of the group, or is part of one.
    pub fn matches(&self, location: &Location) -> bool {
        let accepts: Vec<_> = location
            .accepts
            .iter()
            .map(|item| item.to_lowercase())
            .collect();

        self.keywords.iter().any(|keyword| {
            accepts
                .iter()
                .any(|item| item.contains(keyword) || keyword.contains(item.as_str()))
        })
    }
}

pub static CATEGORY_GROUPS: [CategoryGroup; 18] = [
    CategoryGroup {
        name: "Electronics",
        keywords: &[
            "computers",
            "laptops",
            "monitors",
            "electronics",
            "cables",
            "keyboards",
            "phones",
            "tablets",
            "tvs",
            "printers",
            "cell phones",
            "smartphones",
            "data destruction",
            "computer",
            "laptop",
            "monitor",
            "phone",
            "tablet",
            "tv",
            "printer",
        ],
    },
    CategoryGroup {
        name: "Furniture",
        keywords: &[
            "furniture",
            "couch",
            "sofa",
            "tables",
            "chairs",
            "cabinets",
            "desks",
            "beds",
            "dressers",
            "shelves",
        ],
    },
    CategoryGroup {
        name: "Clothing",
        keywords: &[
            "clothing",
            "clothes",
            "shoes",
            "textiles",
            "fabric",
            "cotton clothing",
            "linens",
            "towels",
            "sheets",
            "t-shirts",
            "cotton fabrics",
            "belts",
            "purses",
            "hats",
            "accessories",
        ],
    },
    CategoryGroup {
        name: "Building Materials",
        keywords: &[
            "lumber",
            "doors",
            "windows",
            "hardware",
            "plumbing",
            "electrical",
            "flooring",
            "building materials",
            "cabinets",
            "construction debris",
        ],
    },
    CategoryGroup {
        name: "Appliances",
        keywords: &[
            "appliances",
            "refrigerator",
            "small appliances",
            "washer",
            "dryer",
            "microwave",
            "stove",
        ],
    },
    CategoryGroup {
        name: "Bicycles",
        keywords: &[
            "bicycles",
            "bike parts",
            "helmets",
            "bike accessories",
            "bikes",
            "bicycle",
        ],
    },
    CategoryGroup {
        name: "Art & Craft",
        keywords: &[
            "fabric",
            "paper",
            "craft supplies",
            "art materials",
            "office supplies",
            "creative reuse items",
            "magazines",
        ],
    },
    CategoryGroup {
        name: "Hazardous",
        keywords: &[
            "hazardous waste",
            "chemicals",
            "fluorescent bulbs",
            "household hazardous waste",
            "paint thinners",
        ],
    },
    CategoryGroup {
        name: "Tools",
        keywords: &[
            "hand tools",
            "power tools",
            "garden tools",
            "woodworking tools",
            "automotive tools",
            "ladders",
            "specialty tools",
            "tools",
        ],
    },
    CategoryGroup {
        name: "Books & Media",
        keywords: &["books", "magazines", "newspapers", "office paper", "book"],
    },
    CategoryGroup {
        name: "Toys & Kids",
        keywords: &["toys", "stuffed animals", "games", "kids items"],
    },
    CategoryGroup {
        name: "Mattresses",
        keywords: &["mattresses", "box springs", "mattress", "box spring", "bedding"],
    },
    CategoryGroup {
        name: "Batteries",
        keywords: &[
            "batteries",
            "rechargeable batteries",
            "battery",
            "cell phones",
            "power tool batteries",
            "laptop batteries",
        ],
    },
    CategoryGroup {
        name: "Paint",
        keywords: &[
            "paint",
            "paints",
            "stains",
            "primers",
            "varnishes",
            "sealers",
            "latex paint",
            "oil-based paint",
        ],
    },
    CategoryGroup {
        name: "Housewares",
        keywords: &[
            "housewares",
            "home decor",
            "kitchenware",
            "dishes",
            "pots",
            "pans",
            "small household items",
            "knickknacks",
        ],
    },
    CategoryGroup {
        name: "Yard & Garden",
        keywords: &[
            "yard debris",
            "compostable materials",
            "food scraps",
            "garden tools",
            "plants",
        ],
    },
    CategoryGroup {
        name: "Paper & Cardboard",
        keywords: &["cardboard", "paper", "newspapers", "office paper", "magazines"],
    },
    CategoryGroup {
        name: "Sporting Goods",
        keywords: &[
            "sporting goods",
            "sports equipment",
            "exercise equipment",
            "camping gear",
        ],
    },
];

// Filter

/// Restriction applied to the locations of a directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Kind(LocationKind),
    /// Locations accepting items of the [`CategoryGroup`] with given name.
    /// Names that are not a known group are compared to the category of the
    /// record instead, ignoring case.
    Category(String),
    /// Locations which id is part of the list.
    Favorites(Vec<u64>),
}

impl Filter {
    pub fn accepts(&self, location: &Location) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => location.kind == *kind,
            Self::Category(name) => match CategoryGroup::from_name(name) {
                Some(group) => group.matches(location),
                None => location.category.eq_ignore_ascii_case(name),
            },
            Self::Favorites(ids) => ids.contains(&location.id),
        }
    }
}

// SortBy

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum SortBy {
    /// Keep the order of the input.
    #[default]
    Default,
    Name,
    Kind,
    /// Closest first, from the user if known or from the fallback origin.
    Distance,
}

// Query

/// A listing request: the filter is applied first, then selected category
/// groups, then the search term, and results are finally sorted.
///
/// ```
/// use reuse_hours::directory::{Filter, LocationKind, Query, SortBy};
///
/// let query = Query::default()
///     .with_filter(Filter::Kind(LocationKind::Donation))
///     .with_category("Furniture")
///     .with_search("habitat")
///     .with_sort(SortBy::Name);
///
/// assert_eq!(query.categories, ["Furniture"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub filter: Filter,
    /// Names of selected category groups, a location must match any of
    /// them. No selection matches all locations.
    pub categories: Vec<String>,
    pub search: String,
    pub sort_by: SortBy,
}

impl Query {
    pub fn with_filter(self, filter: Filter) -> Self {
        Self { filter, ..self }
    }

    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self { search: term.into(), ..self }
    }

    pub fn with_sort(self, sort_by: SortBy) -> Self {
        Self { sort_by, ..self }
    }

    fn accepts_categories(&self, location: &Location) -> bool {
        self.categories.is_empty()
            || self
                .categories
                .iter()
                .filter_map(|name| CategoryGroup::from_name(name))
                .any(|group| group.matches(location))
    }
}

// Directory

#[derive(Clone, Debug, Default)]
pub struct Directory {
    locations: Vec<Location>,
    user_location: Option<GeoPoint>,
    fallback_origin: Option<GeoPoint>,
}

impl Directory {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations, ..Default::default() }
    }

    /// Set the position of the user, which enables distance badges.
    pub fn with_user_location(self, position: GeoPoint) -> Self {
        Self { user_location: Some(position), ..self }
    }

    /// Replace the origin used to sort by distance when the position of the
    /// user is unknown, which is [`PORTLAND_CENTER`] by default.
    pub fn with_fallback_origin(self, origin: GeoPoint) -> Self {
        Self { fallback_origin: Some(origin), ..self }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    /// Point from which distances are measured.
    pub fn origin(&self) -> GeoPoint {
        self.user_location
            .or(self.fallback_origin)
            .unwrap_or(PORTLAND_CENTER)
    }

    /// List locations which name, category, accepted items or description
    /// contain the search term, ignoring case. An empty term matches all
    /// locations.
    pub fn search(&self, term: &str) -> Vec<&Location> {
        let term = term.to_lowercase();

        self.locations
            .iter()
            .filter(|location| term.is_empty() || location.matches(&term))
            .collect()
    }

    /// List locations accepted by a filter.
    pub fn filter(&self, filter: &Filter) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|location| filter.accepts(location))
            .collect()
    }

    /// Run a full listing query.
    pub fn query(&self, query: &Query) -> Vec<&Location> {
        let term = query.search.to_lowercase();

        let results = self
            .locations
            .iter()
            .filter(|location| query.filter.accepts(location))
            .filter(|location| query.accepts_categories(location))
            .filter(|location| term.is_empty() || location.matches(&term))
            .collect();

        self.sorted(results, query.sort_by)
    }

    /// Sort a list of results, the sort is stable.
    pub fn sorted<'a>(&self, mut results: Vec<&'a Location>, sort_by: SortBy) -> Vec<&'a Location> {
        match sort_by {
            SortBy::Default => {}
            SortBy::Name => results.sort_by_cached_key(|location| location.name.to_lowercase()),
            SortBy::Kind => results.sort_by_key(|location| location.kind.as_str()),
            SortBy::Distance => {
                let origin = self.origin();

                results.sort_by(|a, b| {
                    let dist_a = origin.distance_to(&a.position());
                    let dist_b = origin.distance_to(&b.position());
                    dist_a.partial_cmp(&dist_b).unwrap_or(Ordering::Equal)
                })
            }
        }

        results
    }

    /// Distance badge of a location, such as "1.2 mi away". This is only
    /// available when the position of the user is known.
    pub fn distance_text(&self, location: &Location) -> Option<String> {
        let user = self.user_location?;
        let miles = user.distance_to(&location.position());
        Some(format!("{} away", DistanceText(miles)))
    }

    /// Evaluate the status of a location at given local time.
    pub fn status_of(&self, location: &Location, current_time: NaiveDateTime) -> OpenStatus {
        get_open_status(location.hours.as_deref(), current_time)
    }
}
