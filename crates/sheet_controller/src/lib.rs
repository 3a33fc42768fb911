//! Presentation-state controller for modal "sheet" overlays in
//! [`ratatui`] UIs.
//!
//! A [`SheetController`] decouples *which view requests a modal* from
//! *which view owns the presentation state*: any code holding a clone of
//! the controller (usually found through the ambient [`SheetContext`])
//! calls [`show`](SheetController::show) with a view factory, and the
//! [`SheetControllerHost`] wrapping the content observes the visibility
//! flag and draws the materialized sheet over its area until the sheet is
//! dismissed: by a [`SheetDismissButton`], by Esc, or by calling
//! [`dismiss`](SheetController::dismiss) directly.
//!
//! ```
//! use ratatui::{layout::Rect, Frame};
//! use sheet_controller::{
//!     SheetContext, SheetController, SheetDismissButton, SheetView, UsingSheetController,
//! };
//!
//! struct Content;
//! impl SheetView for Content {
//!     fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect) {}
//! }
//!
//! let controller = SheetController::new();
//! let ctx = SheetContext::new().with(controller.clone());
//! let mut host = Content.using_sheet_controller(&controller);
//!
//! controller.show(SheetDismissButton::new);
//! assert!(controller.is_presented());
//! controller.dismiss();
//! assert!(!controller.is_presented());
//! # let _ = (ctx, &mut host);
//! ```

mod context;
mod controller;
mod dismiss;
mod host;
mod view;

pub use context::SheetContext;
pub use controller::{EnvironmentSetter, SheetController, SubscriptionId};
pub use dismiss::SheetDismissButton;
pub use host::{SheetControllerHost, UsingSheetController};
pub use view::{BoxedView, EmptyView, SheetView, WithEnvironment};

#[cfg(test)]
mod testsupport;
