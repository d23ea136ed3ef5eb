// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for load failures and settings problems.
//!
//! - [`Notification`] - severity plus an i18n key resolved at draw time
//! - [`Manager`] - queue with a visible cap and auto-dismiss on tick
//! - [`Toast`] - the widget
//!
//! Success and info toasts last 3s, warnings 5s, errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
