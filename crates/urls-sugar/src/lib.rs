//! # urls-sugar
//!
//! Declarative URL descriptions expanded into regex route patterns:
//! - Constants (`home/`, or several accepted names for one view)
//! - Variables (`(?P<id>[0-9]+)/`, optionally separated lists like `1,2,3/`)
//! - Optional groups, nestable, that may be absent from the URL
//!
//! A [`UrlSugar`] expands into one anchored regexp per combination of present
//! and absent optional groups. [`patterns`] and [`sugar_patterns`] splice the
//! generated routes into an ordinary route list and hand it to the host
//! router, which stays an explicit [`HostRouter`] collaborator.
//!
//! ## Ordering
//!
//! Routers try patterns in order and take the first match. Generated routes
//! are registered longest first, so a route containing optional content is
//! never shadowed by the shorter route without it.
//!
//! ## Example
//!
//! ```
//! use urls_sugar::{constant, optional, patterns, variable, PatternItem, RegexRouter, RouteEntry, UrlSugar};
//!
//! let router = RegexRouter::new();
//! let table = patterns(
//!     &router,
//!     "shop.views",
//!     vec![
//!         PatternItem::Entry(RouteEntry::new("^$", "index")),
//!         PatternItem::Sugar(UrlSugar::new(
//!             vec![
//!                 constant("products"),
//!                 optional([constant("page"), variable("page", "[0-9]+")]),
//!             ],
//!             "product_list".to_string(),
//!         )),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     table.patterns(),
//!     vec!["^$", "^products/page/(?P<page>[0-9]+)/$", "^products/$"]
//! );
//!
//! let resolved = table.resolve("/products/page/3/").unwrap();
//! assert_eq!(resolved.view, "shop.views.product_list");
//! assert_eq!(resolved.params.get("page"), Some(&"3".to_string()));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod element;
mod expand;
mod patterns;
pub mod resolver;
mod sugar;

pub use config::SugarConfig;
pub use element::{constant, optional, variable, Constant, ConstantName, Element, Fragments, Optional, Variable};
pub use expand::expand;
pub use patterns::{i18n_patterns, patterns, sugar_patterns, HostRouter, PatternItem};
pub use resolver::{RegexRouter, ResolvedRoute, RouteEntry, RouteTable};
pub use sugar::{url_sugar, RouteTarget, UrlSugar};
