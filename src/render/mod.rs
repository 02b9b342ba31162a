//! Projection of records into display views.
//!
//! Views hold plain text; escaping happens when a view is turned into
//! [`Html`], the only type a display surface accepts as markup.

pub mod card;
pub mod detail;
pub mod escape;
pub mod page;

pub use card::{render, render_for_query, CardView, CatalogView};
pub use detail::{present, DetailView, SummaryRow};
pub use escape::Html;
