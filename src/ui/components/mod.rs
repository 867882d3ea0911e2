//! Reusable UI primitives.
//!
//! This module provides a set of composable, accessible UI components
//! rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Badge`]: Status badge/tag
//! - [`Skeleton`] and presets: Loading placeholders
//! - [`Spinner`], [`LoadingSpinner`], [`PageSpinner`]: Loading indicators
//! - [`NetworkBanner`]: Connectivity banner
//! - [`LinkButton`]: Anchor styled as a button
//! - [`Card`]: Card container
//! - [`icons`]: SVG icon components
//!
//! Variant enums implement [`style::StyleTable`]; components take them as
//! [`StyleKey`] so a variant can also be given by name.

mod badge;
mod button;
mod card;
pub mod icons;
mod network_banner;
mod skeleton;
mod spinner;
pub mod style;

pub use badge::{BADGE_BASE_CLASSES, Badge, BadgeSize, BadgeVariant, badge_classes};
pub use button::{ButtonSize, ButtonVariant, LinkButton, button_classes};
pub use card::Card;
pub use icons::*;
pub use network_banner::{NetworkBanner, OFFLINE_MESSAGE, RESTORED_MESSAGE};
pub use skeleton::{
    SKELETON_BASE_CLASSES, Skeleton, SkeletonAvatar, SkeletonCard, SkeletonComicCard,
    SkeletonText, SkeletonVariant, TEXT_LINE_FULL_WIDTH, TEXT_LINE_SHORT_WIDTH,
};
pub use spinner::{LoadingSpinner, PageSpinner, Spinner, SpinnerSize};
pub use style::{StyleKey, StyleTable, UnknownVariant};
