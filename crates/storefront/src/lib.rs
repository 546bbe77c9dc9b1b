//! Storefront helpers around the routine builder.
//!
//! Shipping estimates, the skincare quiz, product comparison, recently-viewed
//! tracking and the theme preference. Everything here is synchronous and IO-free apart from the
//! [`KeyValueStore`] seam used for browser-style blob storage.

pub mod compare;
pub mod quiz;
pub mod recently_viewed;
pub mod shipping;
pub mod storage;
pub mod theme;

pub use compare::{
    CompareSelection, CompareToggle, ComparableProduct, Comparison, find_comparable, lineup,
};
pub use quiz::{Concern, Quiz, QuizProgress, Recommendation, SkinType, TimeCommitment, recommend};
pub use recently_viewed::{RecentProduct, RecentlyViewed};
pub use shipping::{
    FREE_SHIPPING_THRESHOLD, Region, ShippingMethod, ShippingOption, ZipCode, estimate_shipping,
    qualifies_for_free_shipping,
};
pub use storage::{InMemoryStore, KeyValueStore};
pub use theme::{ColorPair, Palette, Theme};
